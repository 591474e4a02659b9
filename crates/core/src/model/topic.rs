use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// Marker that turns a content line into a list item.
pub const LIST_ITEM_MARKER: &str = "- ";

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Grouping for lessons. Declaration order is the sidebar display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Environment,
    Basics,
    ControlFlow,
    Functions,
    DataStructures,
    Advanced,
    StandardLibrary,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Environment,
        Category::Basics,
        Category::ControlFlow,
        Category::Functions,
        Category::DataStructures,
        Category::Advanced,
        Category::StandardLibrary,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Environment => "Environment",
            Category::Basics => "Basics",
            Category::ControlFlow => "Control Flow",
            Category::Functions => "Functions",
            Category::DataStructures => "Data Structures",
            Category::Advanced => "Advanced",
            Category::StandardLibrary => "Standard Library",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

/// One line of lesson prose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBlock<'a> {
    Paragraph(&'a str),
    ListItem(&'a str),
}

impl<'a> ContentBlock<'a> {
    #[must_use]
    pub fn parse_line(line: &'a str) -> Self {
        match line.strip_prefix(LIST_ITEM_MARKER) {
            Some(item) => ContentBlock::ListItem(item),
            None => ContentBlock::Paragraph(line),
        }
    }
}

/// A 1-based numbered line of a code example.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A single immutable lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    category: Category,
    title: String,
    summary: String,
    content: String,
    code_example: String,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: impl Into<TopicId>,
        category: Category,
        title: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
        code_example: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            summary: summary.into(),
            content: content.into(),
            code_example: code_example.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn code_example(&self) -> &str {
        &self.code_example
    }

    /// Split the lesson prose into paragraphs and list items, one per line.
    ///
    /// Blank lines are kept as empty paragraphs so spacing survives rendering.
    #[must_use]
    pub fn blocks(&self) -> Vec<ContentBlock<'_>> {
        self.content.split('\n').map(ContentBlock::parse_line).collect()
    }

    #[must_use]
    pub fn code_lines(&self) -> Vec<CodeLine<'_>> {
        self.code_example
            .split('\n')
            .enumerate()
            .map(|(idx, text)| CodeLine {
                number: idx + 1,
                text,
            })
            .collect()
    }
}
