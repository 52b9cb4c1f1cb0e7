//! Rebuild the post index (posts.json)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::PostIndex;
use crate::Site;

/// Scan the posts directory and rewrite the index; returns the post count
pub fn run(site: &Site) -> Result<usize> {
    let index = scan_posts(&site.posts_dir);
    save_index(site, &index)?;
    tracing::info!("Indexed {} posts into {:?}", index.posts.len(), site.index_path());
    Ok(index.posts.len())
}

/// Collect the markdown filenames directly inside `posts_dir`
pub fn scan_posts(posts_dir: &Path) -> PostIndex {
    if !posts_dir.exists() {
        return PostIndex::default();
    }

    let mut posts: Vec<String> = WalkDir::new(posts_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(".md") && !name.starts_with('.'))
        .collect();
    posts.sort();

    PostIndex { posts }
}

/// Read the index file; a missing file is an empty index
pub fn load_index(site: &Site) -> Result<PostIndex> {
    let path = site.index_path();
    if !path.exists() {
        return Ok(PostIndex::default());
    }
    let content = fs::read_to_string(&path)?;
    PostIndex::parse(&content).with_context(|| format!("Invalid post index {:?}", path))
}

/// Write the index file
pub fn save_index(site: &Site, index: &PostIndex) -> Result<()> {
    fs::write(site.index_path(), index.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_posts() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(posts.join("drafts")).unwrap();
        fs::write(posts.join("2024-03-01-b.md"), "# B").unwrap();
        fs::write(posts.join("2024-01-01-a.md"), "# A").unwrap();
        fs::write(posts.join("notes.txt"), "x").unwrap();
        fs::write(posts.join(".hidden.md"), "x").unwrap();
        fs::write(posts.join("drafts/2025-01-01-c.md"), "# C").unwrap();

        let index = scan_posts(&posts);
        assert_eq!(index.posts, vec!["2024-01-01-a.md", "2024-03-01-b.md"]);
    }

    #[test]
    fn test_run_writes_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.posts_dir).unwrap();
        fs::write(site.posts_dir.join("2024-01-01-a.md"), "# A").unwrap();

        assert_eq!(run(&site).unwrap(), 1);
        assert_eq!(load_index(&site).unwrap().posts, vec!["2024-01-01-a.md"]);
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_posts(&dir.path().join("posts")).posts.is_empty());
    }

    #[test]
    fn test_load_invalid_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::write(site.index_path(), "{\"posts\": 3}").unwrap();
        assert!(load_index(&site).is_err());
    }
}
