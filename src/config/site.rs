//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub root: String,

    // Content
    /// Directory holding one subdirectory per post, relative to the base dir
    pub content_dir: String,
    /// Name of the metadata-bearing file inside each post directory
    pub metadata_file: String,
    /// Reserved entry name used by the listing page itself
    pub listing_page: String,
    /// Leading character of dynamic route folders (`[slug]`, `[...all]`)
    pub dynamic_marker: char,

    // URL
    pub post_dir: String,
    pub category_dir: String,

    // Category registry
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A category as declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),

            content_dir: "posts".to_string(),
            metadata_file: "index.md".to_string(),
            listing_page: "page".to_string(),
            dynamic_marker: '[',

            post_dir: "blog".to_string(),
            category_dir: "category".to_string(),

            categories: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {:?}: {}", path, e)))?;
        Self::parse(&content)
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}
