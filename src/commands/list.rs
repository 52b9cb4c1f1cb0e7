//! List site content

use anyhow::Result;
use std::fs;

use super::index::load_index;
use crate::content::parse_links;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let index = load_index(site)?;
            let posts = index.newest_first();
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .date()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, post.title(), post.filename());
            }
        }
        "link" | "links" => {
            let path = site.links_path();
            let text = if path.exists() {
                fs::read_to_string(&path)?
            } else {
                String::new()
            };
            let links = parse_links(&text);
            println!("Links ({}):", links.len());
            for link in links {
                println!("  {} <{}>", link.title, link.url);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, link", content_type);
        }
    }

    Ok(())
}
