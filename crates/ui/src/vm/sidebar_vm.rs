use masterclass_core::model::{Catalog, CompletedSet, TopicId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarTopicVm {
    pub id: TopicId,
    pub title: String,
    pub is_active: bool,
    pub is_completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroupVm {
    pub label: &'static str,
    pub topics: Vec<SidebarTopicVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarVm {
    pub groups: Vec<SidebarGroupVm>,
    pub completed: usize,
    pub total: usize,
    pub percent: usize,
}

impl SidebarVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("CURRICULUM PROGRESS: {}/{}", self.completed, self.total)
    }
}

/// Categories in display order; empty categories are skipped.
#[must_use]
pub fn map_sidebar(catalog: &Catalog, completed: &CompletedSet, active: &TopicId) -> SidebarVm {
    let groups = catalog
        .grouped()
        .into_iter()
        .map(|group| SidebarGroupVm {
            label: group.category.label(),
            topics: group
                .topics
                .into_iter()
                .map(|topic| SidebarTopicVm {
                    id: topic.id().clone(),
                    title: topic.title().to_string(),
                    is_active: topic.id() == active,
                    is_completed: completed.contains(topic.id().as_str()),
                })
                .collect(),
        })
        .collect();

    let progress = completed.progress(catalog);
    SidebarVm {
        groups,
        completed: progress.completed,
        total: progress.total,
        percent: progress.percent(),
    }
}
