//! Show a single category listing

use anyhow::Result;
use std::io::Write;

use super::list::{write_json, write_posts};
use crate::Blog;

/// Print the posts of one registered category
pub async fn run(blog: &Blog, id: &str, json: bool) -> Result<()> {
    let listing = blog.category_listing(id).await?;
    let mut out = std::io::stdout().lock();

    if json {
        write_json(&mut out, &listing.posts)?;
    } else {
        writeln!(
            out,
            "{} ({}):",
            listing.category.name,
            listing.posts.len()
        )?;
        write_posts(&mut out, blog, &listing.posts)?;
    }

    Ok(())
}
