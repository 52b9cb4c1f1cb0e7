//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use super::index::{load_index, save_index};
use crate::Site;

/// Create `posts/YYYY-MM-DD-<slug>.md` and register it in the index
pub fn create_post(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a filename from title {:?}", title);
    }

    let filename = format!("{}-{}.md", now.format("%Y-%m-%d"), slug);
    fs::create_dir_all(&site.posts_dir)?;
    let file_path = site.posts_dir.join(&filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("# {}\n\n", title))?;

    let mut index = load_index(site)?;
    if !index.posts.contains(&filename) {
        index.posts.push(filename);
        index.posts.sort();
        save_index(site, &index)?;
    }

    println!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::format_title;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_registers_in_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_post(&site, "Mein neuer Post", None).unwrap();
        let filename = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(filename.ends_with("-mein-neuer-post.md"));
        assert_eq!(format_title(&filename), "Mein neuer post");
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Mein neuer Post\n\n");

        let index = load_index(&site).unwrap();
        assert_eq!(index.posts, vec![filename]);
    }

    #[test]
    fn test_create_post_refuses_duplicates() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Twice", None).unwrap();
        assert!(create_post(&site, "Twice", None).is_err());
        assert!(create_post(&site, "!!!", None).is_err());
    }

    #[test]
    fn test_custom_slug() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_post(&site, "Anything", Some("Custom Name")).unwrap();
        assert!(path.to_string_lossy().ends_with("-custom-name.md"));
    }
}
