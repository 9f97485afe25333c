//! blog-catalog: post listing and category indexing for static blogs
//!
//! Posts live in one directory each under a content root. Every listing
//! call re-reads the metadata headers from disk, so the result always
//! reflects the content as it is now.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use std::path::{Path, PathBuf};

use content::{Category, CategoryRegistry, ContentLister, MetadataLoader, Post};
pub use error::{Error, Result};

/// The blog being indexed
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Content root (one subdirectory per post)
    pub content_dir: PathBuf,
    /// Static category table
    pub categories: CategoryRegistry,
}

/// A category page: the category and its posts, newest first
#[derive(Debug, Clone)]
pub struct CategoryListing<'a> {
    pub category: &'a Category,
    pub posts: Vec<Post>,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create a Blog from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let content_dir = base_dir.as_ref().join(&config.content_dir);
        let categories = CategoryRegistry::from_entries(&config.categories)?;

        Ok(Self {
            config,
            content_dir,
            categories,
        })
    }

    fn lister(&self) -> ContentLister {
        ContentLister::from_config(&self.content_dir, &self.config)
    }

    fn loader(&self) -> MetadataLoader {
        MetadataLoader::from_config(&self.content_dir, &self.config)
    }

    /// List every post, newest first
    pub async fn list_all_posts(&self) -> Result<Vec<Post>> {
        let slugs = self.lister().list().await?;
        let posts = self.loader().load_all(&slugs).await?;
        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }

    /// List the posts tagged with `category`, newest first
    ///
    /// The id is not checked against the registry; see [`Blog::category_listing`].
    pub async fn list_posts_by_category(&self, category: &str) -> Result<Vec<Post>> {
        let posts = self.list_all_posts().await?;
        Ok(content::filter_by_category(posts, category))
    }

    /// Resolve a category page, failing with `CategoryNotFound` for ids
    /// outside the registry before touching the content root
    pub async fn category_listing(&self, id: &str) -> Result<CategoryListing<'_>> {
        let category = self
            .categories
            .get(id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;
        let posts = self.list_posts_by_category(id).await?;
        Ok(CategoryListing { category, posts })
    }
}
