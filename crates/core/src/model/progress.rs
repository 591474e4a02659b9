use serde::{Deserialize, Serialize};

use crate::model::catalog::Catalog;
use crate::model::ids::TopicId;

/// Topic ids the learner has marked complete.
///
/// Keeps insertion order so the persisted form reads like a history, but
/// compares as a set. Ids that no longer exist in the catalog are carried
/// along untouched and never counted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TopicId>", into = "Vec<TopicId>")]
pub struct CompletedSet {
    ids: Vec<TopicId>,
}

impl CompletedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ids, dropping repeats after the first occurrence.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = TopicId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id.as_str()) {
                set.ids.push(id);
            }
        }
        set
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing.as_str() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicId> {
        self.ids.iter()
    }

    /// Return a new set with `id` removed if present, appended otherwise.
    #[must_use]
    pub fn toggled(&self, id: &TopicId) -> Self {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|existing| existing == id) {
            ids.remove(pos);
        } else {
            ids.push(id.clone());
        }
        Self { ids }
    }

    /// Completion counted against the catalog; unknown ids are ignored.
    #[must_use]
    pub fn progress(&self, catalog: &Catalog) -> Progress {
        let completed = self
            .ids
            .iter()
            .filter(|id| catalog.contains(id.as_str()))
            .count();
        Progress {
            completed,
            total: catalog.len(),
        }
    }
}

impl PartialEq for CompletedSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ids.iter().all(|id| other.contains(id.as_str()))
    }
}

impl Eq for CompletedSet {}

impl From<Vec<TopicId>> for CompletedSet {
    fn from(ids: Vec<TopicId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<CompletedSet> for Vec<TopicId> {
    fn from(set: CompletedSet) -> Self {
        set.ids
    }
}

impl FromIterator<TopicId> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = TopicId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

/// Pure toggle: `toggle(id, toggle(id, set)) == set`.
#[must_use]
pub fn toggle(id: &TopicId, set: &CompletedSet) -> CompletedSet {
    set.toggled(id)
}

/// Completed-vs-total counter for the curriculum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Whole-number percentage, 0 when the total is 0.
    #[must_use]
    pub fn percent(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.completed.min(self.total) * 100 / self.total
    }
}
