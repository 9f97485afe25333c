//! Category registry - the static id/name table posts refer to

use indexmap::IndexMap;

use super::Category;
use crate::config::CategoryEntry;
use crate::error::{Error, Result};

/// Immutable lookup table of known categories, in configured order
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: IndexMap<String, Category>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(categories.len());
        for category in categories {
            if map.contains_key(&category.id) {
                return Err(Error::Config(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
            map.insert(category.id.clone(), category);
        }
        Ok(Self { categories: map })
    }

    /// Build a registry from the `categories` list of the site configuration
    pub fn from_entries(entries: &[CategoryEntry]) -> Result<Self> {
        Self::new(
            entries
                .iter()
                .map(|e| Category::new(&e.id, &e.name))
                .collect(),
        )
    }

    /// Look up a category by id
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    /// Iterate categories in configured order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Known categories for a post's ids, in the post's order
    ///
    /// Ids missing from the registry are skipped.
    pub fn resolve<'a>(&'a self, ids: &[String]) -> Vec<&'a Category> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::new(vec![
            Category::new("tech", "Technology"),
            Category::new("life", "Life"),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("tech").unwrap().name, "Technology");
        assert!(registry.contains("life"));
        assert!(registry.get("music").is_none());
    }

    #[test]
    fn test_iter_keeps_configured_order() {
        let ids: Vec<_> = registry().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["tech", "life"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CategoryRegistry::new(vec![
            Category::new("tech", "Technology"),
            Category::new("tech", "Tech again"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_resolve_skips_unknown() {
        let registry = registry();
        let ids = vec!["life".to_string(), "music".to_string(), "tech".to_string()];
        let names: Vec<_> = registry.resolve(&ids).into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Life", "Technology"]);
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![CategoryEntry {
            id: "tech".to_string(),
            name: "Technology".to_string(),
        }];
        let registry = CategoryRegistry::from_entries(&entries).unwrap();
        assert_eq!(registry.get("tech"), Some(&Category::new("tech", "Technology")));
        assert!(CategoryRegistry::default().is_empty());
    }
}
