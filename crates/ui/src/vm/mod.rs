mod assistant_vm;
mod lesson_vm;
mod markdown_vm;
mod nav_vm;
mod sidebar_vm;

pub use assistant_vm::{AssistantPanelVm, ChatBubbleVm, map_assistant_panel};
pub use lesson_vm::{CodeLineVm, LessonBlockVm, LessonVm, map_lesson};
pub use markdown_vm::{inline_markdown_to_html, sanitize_inline_html};
pub use nav_vm::{NavFooterVm, map_nav_footer};
pub use sidebar_vm::{SidebarGroupVm, SidebarTopicVm, SidebarVm, map_sidebar};
