use thiserror::Error;

use crate::model::curriculum;
use crate::model::ids::TopicId;
use crate::model::topic::{Category, Topic};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one topic")]
    Empty,

    #[error("duplicate topic id: {0}")]
    DuplicateId(TopicId),
}

/// Ordered, non-empty list of lessons. Order is the lesson sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

/// Topics of one category, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub topics: Vec<&'a Topic>,
}

impl Catalog {
    /// Build a catalog from topics in lesson order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` if two topics share an id.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        if topics.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (idx, topic) in topics.iter().enumerate() {
            if topics[..idx].iter().any(|prev| prev.id() == topic.id()) {
                return Err(CatalogError::DuplicateId(topic.id().clone()));
            }
        }
        Ok(Self { topics })
    }

    /// The compiled-in C curriculum.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            topics: curriculum::topics(),
        }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> &Topic {
        &self.topics[0]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id().as_str() == id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|topic| topic.id().as_str() == id)
    }

    /// Topics grouped by category in display order; empty categories are skipped.
    #[must_use]
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let topics = self
                    .topics
                    .iter()
                    .filter(|topic| topic.category() == category)
                    .collect::<Vec<_>>();
                (!topics.is_empty()).then_some(CategoryGroup { category, topics })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, category: Category) -> Topic {
        Topic::new(id, category, id.to_uppercase(), "", "", "")
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            topic("a", Category::Basics),
            topic("b", Category::Basics),
            topic("a", Category::Advanced),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(TopicId::new("a")));
    }

    #[test]
    fn builtin_catalog_satisfies_invariants() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.topics().to_vec()).expect("builtin is valid");
        assert_eq!(validated.len(), 14);
        assert_eq!(builtin.first().id().as_str(), "history");
    }

    #[test]
    fn lookup_by_id_and_index() {
        let catalog = Catalog::new(vec![
            topic("a", Category::Basics),
            topic("b", Category::Basics),
        ])
        .unwrap();
        assert_eq!(catalog.index_of("b"), Some(1));
        assert_eq!(catalog.index_of("zzz"), None);
        assert_eq!(catalog.get("a").map(Topic::title), Some("A"));
        assert!(catalog.at(2).is_none());
    }

    #[test]
    fn grouped_follows_category_order_and_skips_empty() {
        let catalog = Catalog::new(vec![
            topic("late", Category::Advanced),
            topic("env", Category::Environment),
            topic("later", Category::Advanced),
        ])
        .unwrap();
        let groups = catalog.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, Category::Environment);
        assert_eq!(groups[1].category, Category::Advanced);
        let ids: Vec<_> = groups[1].topics.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["late", "later"]);
    }

    #[test]
    fn builtin_groups_cover_every_topic() {
        let catalog = Catalog::builtin();
        let total: usize = catalog.grouped().iter().map(|g| g.topics.len()).sum();
        assert_eq!(total, catalog.len());
    }
}
