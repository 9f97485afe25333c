//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/category/tech") // -> "/blog/category/tech"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// URL path of a category listing page
pub fn category_url(config: &SiteConfig, id: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.category_dir.trim_matches('/'), encode_segment(id)),
    )
}

/// URL path of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.post_dir.trim_matches('/'), encode_segment(slug)),
    )
}

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_category_url_default_root() {
        let config = SiteConfig::default();
        assert_eq!(category_url(&config, "tech"), "/category/tech");
        assert_eq!(category_url(&config, "rust & c"), "/category/rust%20&%20c");
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post_url(&SiteConfig::default(), "hello-world"), "/blog/hello-world");
        assert_eq!(post_url(&test_config(), "hello"), "/blog/blog/hello");
    }
}
