//! Metadata loader - reads each post's metadata header and orders the posts

use futures::future::try_join_all;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use super::{FrontMatter, Post};
use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// Loads post metadata from `<root>/<slug>/<metadata_file>`
pub struct MetadataLoader {
    root: PathBuf,
    metadata_file: String,
}

impl MetadataLoader {
    /// Create a loader for an explicit root
    pub fn new<P: AsRef<Path>>(root: P, metadata_file: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            metadata_file: metadata_file.to_string(),
        }
    }

    /// Create a loader using the metadata file name from site configuration
    pub fn from_config<P: AsRef<Path>>(root: P, config: &SiteConfig) -> Self {
        Self::new(root, &config.metadata_file)
    }

    /// Path of the metadata file for a slug
    pub fn metadata_path(&self, slug: &str) -> PathBuf {
        self.root.join(slug).join(&self.metadata_file)
    }

    /// Load a single post by slug
    pub async fn load(&self, slug: &str) -> Result<Post> {
        let path = self.metadata_path(slug);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;

        let post = parse_post(slug, &content)?;
        tracing::debug!("Loaded post {:?} ({})", post.slug, post.date);
        Ok(post)
    }

    /// Load every slug concurrently and return the posts newest first
    ///
    /// The first failing entry fails the whole listing.
    pub async fn load_all(&self, slugs: &[String]) -> Result<Vec<Post>> {
        let mut posts = try_join_all(slugs.iter().map(|slug| self.load(slug))).await?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}

/// Build a post from the raw text of its metadata file
pub fn parse_post(slug: &str, content: &str) -> Result<Post> {
    let (fm, _body) = FrontMatter::parse(content).map_err(|e| Error::metadata(slug, e))?;

    let title = fm
        .title
        .clone()
        .ok_or_else(|| Error::metadata(slug, "missing field `title`"))?;
    let date = fm
        .date
        .clone()
        .ok_or_else(|| Error::metadata(slug, "missing field `date`"))?;
    let published = fm
        .parse_date()
        .ok_or_else(|| Error::metadata(slug, format!("invalid date {:?}", date)))?;

    Ok(Post {
        slug: slug.to_string(),
        title,
        date,
        categories: fm.categories,
        published,
    })
}

/// Sort by date descending; equal dates fall back to slug ascending
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(compare_newest_first);
}

fn compare_newest_first(a: &Post, b: &Post) -> Ordering {
    b.published
        .cmp(&a.published)
        .then_with(|| a.slug.cmp(&b.slug))
}
