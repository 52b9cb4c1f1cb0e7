//! CLI entry point for sitefront

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitefront::commands::render::RenderOptions;
use sitefront::page::PageKind;

#[derive(Parser)]
#[command(name = "sitefront")]
#[command(author = "Malte")]
#[command(version)]
#[command(about = "Render and preview the pages of a small personal site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post and add it to the index
    New {
        /// Title of the new post
        title: String,

        /// Slug to use instead of the one derived from the title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Rebuild posts.json from the posts directory
    Index,

    /// List site content
    List {
        /// Type of content to list (post, link)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Render a page after its scripts ran and print the HTML
    #[command(alias = "r")]
    Render {
        /// Page to render (index, article, links)
        #[arg(default_value = "index")]
        page: PageKind,

        /// Post filename passed as query parameter
        #[arg(short, long)]
        post: Option<String>,

        /// Pretend the OS prefers a dark color scheme
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Pretend the OS prefers a light color scheme
        #[arg(long)]
        light: bool,

        /// File persisting the theme choice between renders
        #[arg(long)]
        theme_store: Option<PathBuf>,

        /// Base URL of a deployed site to fetch resources from
        #[arg(long)]
        remote: Option<String>,

        /// Click the theme toggle this many times after loading
        #[arg(short, long, default_value = "0")]
        toggle: u8,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sitefront=debug,info"
    } else {
        "sitefront=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            sitefront::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let site = sitefront::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            sitefront::commands::new::create_post(&site, &title, slug.as_deref())?;
        }

        Commands::Index => {
            let site = sitefront::Site::new(&base_dir)?;
            let count = site.rebuild_index()?;
            println!("Indexed {} posts", count);
        }

        Commands::List { r#type } => {
            let site = sitefront::Site::new(&base_dir)?;
            sitefront::commands::list::run(&site, &r#type)?;
        }

        Commands::Render {
            page,
            post,
            dark,
            light,
            theme_store,
            remote,
            toggle,
        } => {
            let site = sitefront::Site::new(&base_dir)?;
            let prefers_dark = match (dark, light) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let options = RenderOptions {
                page,
                post,
                prefers_dark,
                theme_store,
                remote,
                toggles: toggle,
            };
            let html = sitefront::commands::render::run(&site, &options).await?;
            print!("{}", html);
        }

        Commands::Server { port, ip, r#static } => {
            let site = sitefront::Site::new(&base_dir)?;

            if !r#static {
                site.rebuild_index()?;
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            sitefront::server::start(&site, &ip, port, !r#static).await?;
        }

        Commands::Version => {
            println!("sitefront version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
