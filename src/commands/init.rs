//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::PostIndex;

const CONFIG_TEMPLATE: &str = r#"# Site configuration

# Site
owner: Malte

# Resources
posts_index: posts.json
posts_dir: posts
links_path: links.md

# Navigation
home_page: index.html
article_page: article.html
post_query_param: post

# Key of the persisted theme choice
storage_key: theme

# Contact link, assembled at runtime
email:
  user: kontakt
  domain: example.com
  element_id: email-link

markdown:
  highlight: true
  highlight_theme: base16-ocean.dark
"#;

const LINKS_TEMPLATE: &str = r#"TITLE: The Rust Programming Language
URL: https://doc.rust-lang.org/book/
DESC: Das Buch zum Einstieg in Rust.
---
TITLE: crates.io
URL: https://crates.io
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("posts"))?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let first_post = format!("{}-hallo-welt.md", today);
    let sample_post = r#"# Hallo Welt

Willkommen! Dies ist der erste Artikel.

```rust
fn main() {
    println!("Hallo Welt");
}
```
"#;

    let index = PostIndex {
        posts: vec![first_post.clone()],
    };

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("links.md"), LINKS_TEMPLATE)?;
    write_if_missing(&target_dir.join("posts").join(&first_post), sample_post)?;
    write_if_missing(&target_dir.join("posts.json"), &index.to_json()?)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.owner, "Malte");

        let index = PostIndex::parse(&fs::read_to_string(site.index_path()).unwrap()).unwrap();
        assert_eq!(index.posts.len(), 1);
        assert!(site.posts_dir.join(&index.posts[0]).exists());
        assert!(site.links_path().exists());
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("links.md"), "mine").unwrap();
        init_site(dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("links.md")).unwrap(),
            "mine"
        );
    }
}
