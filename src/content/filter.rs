//! Category filter over an already ordered post list

use super::Post;

/// Keep the posts tagged with `category`, preserving their order
///
/// Unknown ids simply produce an empty list.
pub fn filter_by_category(posts: Vec<Post>, category: &str) -> Vec<Post> {
    posts.into_iter().filter(|p| p.in_category(category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::{parse_post, sort_newest_first};

    fn sample_posts() -> Vec<Post> {
        let mut posts = vec![
            parse_post("a", "---\ntitle: A\ndate: 2024-01-01\ncategories: [tech]\n---\n").unwrap(),
            parse_post("b", "---\ntitle: B\ndate: 2024-03-01\ncategories: []\n---\n").unwrap(),
            parse_post(
                "c",
                "---\ntitle: C\ndate: 2024-02-01\ncategories: [tech, life]\n---\n",
            )
            .unwrap(),
        ];
        sort_newest_first(&mut posts);
        posts
    }

    fn slugs(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        assert_eq!(slugs(&filter_by_category(sample_posts(), "tech")), vec!["c", "a"]);
        assert_eq!(slugs(&filter_by_category(sample_posts(), "life")), vec!["c"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_by_category(sample_posts(), "music").is_empty());
        assert!(filter_by_category(Vec::new(), "tech").is_empty());
    }

    #[test]
    fn test_every_result_contains_category() {
        for post in filter_by_category(sample_posts(), "tech") {
            assert!(post.categories.iter().any(|c| c == "tech"));
        }
    }
}
