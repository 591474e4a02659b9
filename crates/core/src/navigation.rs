//! Lesson selection and previous/next stepping over catalog order.
//!
//! Stepping clamps at both ends; there is no wraparound. Unknown ids never
//! fail: lookups fall back to the first lesson.

use crate::model::{Catalog, Topic, TopicId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The topic with `id`, or the first catalog entry when `id` is unknown.
#[must_use]
pub fn current<'a>(catalog: &'a Catalog, id: &str) -> &'a Topic {
    catalog.get(id).unwrap_or_else(|| catalog.first())
}

/// Position of `id` in catalog order.
#[must_use]
pub fn index(catalog: &Catalog, id: &str) -> Option<usize> {
    catalog.index_of(id)
}

/// The id one step away from `id`, or `id` itself when the step would leave
/// the catalog (or `id` is not in it).
#[must_use]
pub fn step(catalog: &Catalog, id: &TopicId, direction: Direction) -> TopicId {
    target_index(catalog, id.as_str(), direction)
        .and_then(|idx| catalog.at(idx))
        .map_or_else(|| id.clone(), |topic| topic.id().clone())
}

fn target_index(catalog: &Catalog, id: &str, direction: Direction) -> Option<usize> {
    let idx = catalog.index_of(id)?;
    match direction {
        Direction::Forward => (idx + 1 < catalog.len()).then_some(idx + 1),
        Direction::Backward => idx.checked_sub(1),
    }
}

/// Current-lesson selection owned by the top-level view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: TopicId,
}

impl Navigator {
    /// Start at the first lesson.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current: catalog.first().id().clone(),
        }
    }

    /// Start at `id`, falling back to the first lesson when unknown.
    #[must_use]
    pub fn starting_at(catalog: &Catalog, id: &str) -> Self {
        Self {
            current: current(catalog, id).id().clone(),
        }
    }

    #[must_use]
    pub fn current_id(&self) -> &TopicId {
        &self.current
    }

    #[must_use]
    pub fn current<'a>(&self, catalog: &'a Catalog) -> &'a Topic {
        current(catalog, self.current.as_str())
    }

    /// Select a lesson explicitly. Unknown ids select the first lesson.
    pub fn select(&mut self, catalog: &Catalog, id: &str) {
        self.current = current(catalog, id).id().clone();
    }

    /// Move one lesson in `direction`. Returns true when the selection changed.
    pub fn step(&mut self, catalog: &Catalog, direction: Direction) -> bool {
        let next = step(catalog, &self.current, direction);
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    #[must_use]
    pub fn can_step(&self, catalog: &Catalog, direction: Direction) -> bool {
        target_index(catalog, self.current.as_str(), direction).is_some()
    }

    /// Zero-based index of the current lesson and the catalog length.
    #[must_use]
    pub fn position(&self, catalog: &Catalog) -> (usize, usize) {
        (
            catalog.index_of(self.current.as_str()).unwrap_or(0),
            catalog.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|id| Topic::new(*id, Category::Basics, *id, "", "", ""))
                .collect(),
        )
        .unwrap()
    }

    fn id(value: &str) -> TopicId {
        TopicId::new(value)
    }

    #[test]
    fn current_falls_back_to_first_for_unknown_id() {
        let catalog = catalog(&["A", "B", "C"]);
        assert_eq!(current(&catalog, "B").id().as_str(), "B");
        assert_eq!(current(&catalog, "missing").id().as_str(), "A");
    }

    #[test]
    fn index_reports_absence() {
        let catalog = catalog(&["A", "B"]);
        assert_eq!(index(&catalog, "B"), Some(1));
        assert_eq!(index(&catalog, "nope"), None);
    }

    #[test]
    fn step_clamps_at_boundaries() {
        let catalog = catalog(&["A", "B", "C"]);
        assert_eq!(step(&catalog, &id("A"), Direction::Backward), id("A"));
        assert_eq!(step(&catalog, &id("C"), Direction::Forward), id("C"));
    }

    #[test]
    fn step_moves_by_one_in_the_interior() {
        let ids = ["a", "b", "c", "d", "e"];
        let catalog = catalog(&ids);
        for i in 1..ids.len() - 1 {
            assert_eq!(step(&catalog, &id(ids[i]), Direction::Forward), id(ids[i + 1]));
            assert_eq!(step(&catalog, &id(ids[i]), Direction::Backward), id(ids[i - 1]));
        }
    }

    #[test]
    fn step_from_unknown_id_is_a_no_op() {
        let catalog = catalog(&["A", "B"]);
        assert_eq!(step(&catalog, &id("ghost"), Direction::Forward), id("ghost"));
    }

    #[test]
    fn single_topic_catalog_never_moves() {
        let catalog = catalog(&["only"]);
        let mut nav = Navigator::new(&catalog);
        assert!(!nav.step(&catalog, Direction::Forward));
        assert!(!nav.step(&catalog, Direction::Backward));
        assert_eq!(nav.current_id(), &id("only"));
    }

    #[test]
    fn fresh_session_walks_forward_and_clamps() {
        let catalog = catalog(&["A", "B", "C"]);
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.current_id(), &id("A"));
        assert!(!nav.can_step(&catalog, Direction::Backward));

        assert!(nav.step(&catalog, Direction::Forward));
        assert_eq!(nav.current_id(), &id("B"));
        assert!(nav.step(&catalog, Direction::Forward));
        assert_eq!(nav.current_id(), &id("C"));
        assert!(!nav.step(&catalog, Direction::Forward));
        assert_eq!(nav.current_id(), &id("C"));
        assert_eq!(nav.position(&catalog), (2, 3));
    }

    #[test]
    fn select_unknown_id_falls_back_to_first() {
        let catalog = catalog(&["A", "B"]);
        let mut nav = Navigator::starting_at(&catalog, "B");
        assert_eq!(nav.current(&catalog).id(), &id("B"));
        nav.select(&catalog, "stale");
        assert_eq!(nav.current_id(), &id("A"));
    }
}
