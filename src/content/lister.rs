//! Content lister - discovers post directories under the content root

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// Enumerates the post directories of a content root
pub struct ContentLister {
    root: PathBuf,
    listing_page: String,
    dynamic_marker: char,
}

impl ContentLister {
    /// Create a lister for an explicit root
    pub fn new<P: AsRef<Path>>(root: P, listing_page: &str, dynamic_marker: char) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            listing_page: listing_page.to_string(),
            dynamic_marker,
        }
    }

    /// Create a lister using the reserved names from site configuration
    pub fn from_config<P: AsRef<Path>>(root: P, config: &SiteConfig) -> Self {
        Self::new(root, &config.listing_page, config.dynamic_marker)
    }

    /// Whether a directory name denotes a real post
    pub fn is_post_name(&self, name: &str) -> bool {
        !name.starts_with(self.dynamic_marker) && name != self.listing_page
    }

    /// List the slugs of all post directories (unordered)
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| Error::io(&self.root, e))?;

        let mut slugs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(&self.root, e))?
        {
            let path = entry.path();

            let file_type = entry.file_type().await.map_err(|e| Error::io(&path, e))?;
            let is_dir = if file_type.is_symlink() {
                // Follow links; a dangling link is not a post
                match tokio::fs::metadata(&path).await {
                    Ok(metadata) => metadata.is_dir(),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
                    Err(e) => return Err(Error::io(&path, e)),
                }
            } else {
                file_type.is_dir()
            };
            if !is_dir {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("Skipping non UTF-8 entry {:?}", path);
                continue;
            };

            if !self.is_post_name(&name) {
                tracing::debug!("Skipping reserved entry {:?}", name);
                continue;
            }

            slugs.push(name);
        }

        tracing::debug!("Found {} post directories in {:?}", slugs.len(), self.root);
        Ok(slugs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn lister(root: &Path) -> ContentLister {
        ContentLister::new(root, "page", '[')
    }

    #[test]
    fn test_is_post_name() {
        let lister = lister(Path::new("posts"));
        assert!(lister.is_post_name("hello-world"));
        assert!(lister.is_post_name("pages"));
        assert!(!lister.is_post_name("page"));
        assert!(!lister.is_post_name("[slug]"));
        assert!(!lister.is_post_name("[...all]"));
    }

    #[tokio::test]
    async fn test_list_filters_reserved_and_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["first", "second", "[slug]", "page"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("README.md"), "not a post").unwrap();

        let mut slugs = lister(dir.path()).list().await.unwrap();
        slugs.sort();
        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_list_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let slugs = lister(dir.path()).list().await.unwrap();
        assert!(slugs.is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = lister(&dir.path().join("missing")).list().await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_follows_directory_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling"))
            .unwrap();

        let slugs = lister(dir.path()).list().await.unwrap();
        assert_eq!(slugs, vec!["linked"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unresolvable_symlink_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("first")).unwrap();
        // A link to itself fails with ELOOP, not NotFound
        std::os::unix::fs::symlink(dir.path().join("loop"), dir.path().join("loop")).unwrap();

        let err = lister(dir.path()).list().await.unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("loop")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
