//! Post and Category models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blog post as seen by listing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Slug (the post's directory name)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date, as authored
    pub date: String,

    /// Category ids, in authored order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Parsed publication date used for ordering
    #[serde(skip)]
    pub published: NaiveDateTime,
}

impl Post {
    /// Whether the post is tagged with the given category id
    pub fn in_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c == id)
    }
}

/// A category from the static registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key referenced by `Post::categories`
    pub id: String,
    /// Display label
    pub name: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
