//! List site content

use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

use crate::content::Post;
use crate::helpers::{category_url, post_url};
use crate::Blog;

/// List site content by type
pub async fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = blog.list_all_posts().await?;
            let mut out = std::io::stdout().lock();
            if json {
                write_json(&mut out, &posts)?;
            } else {
                writeln!(out, "Posts ({}):", posts.len())?;
                write_posts(&mut out, blog, &posts)?;
            }
        }
        "category" | "categories" => {
            let posts = blog.list_all_posts().await?;
            let counts = count_categories(&posts);
            let mut out = std::io::stdout().lock();
            writeln!(out, "Categories ({}):", blog.categories.len())?;
            for category in blog.categories.iter() {
                writeln!(
                    out,
                    "  {} - {} ({}) [{}]",
                    category.id,
                    category.name,
                    counts.get(category.id.as_str()).copied().unwrap_or(0),
                    category_url(&blog.config, &category.id)
                )?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

/// Print one line per post: date, title, URL and known category names
pub(crate) fn write_posts<W: Write>(out: &mut W, blog: &Blog, posts: &[Post]) -> Result<()> {
    for post in posts {
        let names: Vec<&str> = blog
            .categories
            .resolve(&post.categories)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        let url = post_url(&blog.config, &post.slug);
        if names.is_empty() {
            writeln!(out, "  {} - {} [{}]", post.date, post.title, url)?;
        } else {
            writeln!(
                out,
                "  {} - {} [{}] ({})",
                post.date,
                post.title,
                url,
                names.join(", ")
            )?;
        }
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(out: &mut W, posts: &[Post]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, posts)?;
    writeln!(out)?;
    Ok(())
}

/// Count posts per category id
fn count_categories(posts: &[Post]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for post in posts {
        for cat in &post.categories {
            *counts.entry(cat.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryEntry, SiteConfig};
    use crate::content::loader::parse_post;

    fn blog() -> Blog {
        let mut config = SiteConfig::default();
        config.categories = vec![CategoryEntry {
            id: "tech".to_string(),
            name: "Technology".to_string(),
        }];
        Blog::with_config("/nonexistent", config).unwrap()
    }

    fn posts() -> Vec<Post> {
        vec![
            parse_post(
                "c",
                "---\ntitle: C\ndate: 2024-02-01\ncategories: [tech, ghost]\n---\n",
            )
            .unwrap(),
            parse_post("a", "---\ntitle: A\ndate: 2024-01-01\n---\n").unwrap(),
        ]
    }

    #[test]
    fn test_write_posts_skips_unknown_categories() {
        let mut out = Vec::new();
        write_posts(&mut out, &blog(), &posts()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "  2024-02-01 - C [/blog/c] (Technology)\n  2024-01-01 - A [/blog/a]\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &posts()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["slug"], "c");
        assert_eq!(value[1]["categories"], serde_json::json!([]));
    }

    #[test]
    fn test_count_categories() {
        let posts = posts();
        let counts = count_categories(&posts);
        assert_eq!(counts.get("tech"), Some(&1));
        assert_eq!(counts.get("ghost"), Some(&1));
        assert_eq!(counts.get("life"), None);
    }
}
