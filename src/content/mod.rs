//! Content module - post discovery, metadata loading and category indexing

mod category;
mod filter;
mod frontmatter;
pub mod lister;
pub mod loader;
mod post;

pub use category::CategoryRegistry;
pub use filter::filter_by_category;
pub use frontmatter::FrontMatter;
pub use lister::ContentLister;
pub use loader::MetadataLoader;
pub use post::{Category, Post};
