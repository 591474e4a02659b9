use masterclass_core::model::{CompletedSet, ContentBlock, Topic, TopicId};

use crate::vm::markdown_vm::inline_markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonBlockVm {
    Paragraph { html: String },
    ListItem { html: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeLineVm {
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub id: TopicId,
    pub category_label: &'static str,
    pub title: String,
    pub summary: String,
    pub blocks: Vec<LessonBlockVm>,
    pub code: String,
    pub code_lines: Vec<CodeLineVm>,
    pub is_completed: bool,
}

impl LessonVm {
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "Mark Complete"
        }
    }
}

#[must_use]
pub fn map_lesson(topic: &Topic, completed: &CompletedSet) -> LessonVm {
    let blocks = topic
        .blocks()
        .into_iter()
        .map(|block| match block {
            ContentBlock::Paragraph(text) => LessonBlockVm::Paragraph {
                html: inline_markdown_to_html(text),
            },
            ContentBlock::ListItem(text) => LessonBlockVm::ListItem {
                html: inline_markdown_to_html(text),
            },
        })
        .collect();

    LessonVm {
        id: topic.id().clone(),
        category_label: topic.category().label(),
        title: topic.title().to_string(),
        summary: topic.summary().to_string(),
        blocks,
        code: topic.code_example().to_string(),
        code_lines: topic
            .code_lines()
            .into_iter()
            .map(|line| CodeLineVm {
                number: line.number,
                text: line.text.to_string(),
            })
            .collect(),
        is_completed: completed.contains(topic.id().as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterclass_core::model::Category;

    fn topic() -> Topic {
        Topic::new(
            "ptr",
            Category::Advanced,
            "Pointers",
            "Addresses.",
            "Intro with **bold**.\n- first item\n\n2. step",
            "int *p;\nint x;",
        )
    }

    #[test]
    fn blocks_keep_order_and_kind() {
        let vm = map_lesson(&topic(), &CompletedSet::new());
        assert_eq!(
            vm.blocks,
            vec![
                LessonBlockVm::Paragraph {
                    html: "Intro with <strong>bold</strong>.".into()
                },
                LessonBlockVm::ListItem {
                    html: "first item".into()
                },
                LessonBlockVm::Paragraph { html: String::new() },
                LessonBlockVm::Paragraph {
                    html: "2. step".into()
                },
            ]
        );
    }

    #[test]
    fn code_lines_are_numbered_from_one() {
        let vm = map_lesson(&topic(), &CompletedSet::new());
        assert_eq!(vm.code_lines.len(), 2);
        assert_eq!(vm.code_lines[0].number, 1);
        assert_eq!(vm.code_lines[1].text, "int x;");
        assert_eq!(vm.code, "int *p;\nint x;");
    }

    #[test]
    fn toggle_label_tracks_completion() {
        let open = map_lesson(&topic(), &CompletedSet::new());
        assert_eq!(open.toggle_label(), "Mark Complete");
        assert_eq!(open.category_label, "Advanced");

        let done = map_lesson(&topic(), &CompletedSet::from_ids([TopicId::from("ptr")]));
        assert_eq!(done.toggle_label(), "Completed");
    }
}
