mod assistant;
mod code_block;
mod course;
mod lesson;
mod nav_footer;
mod sidebar;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantPanel;
pub use code_block::CodeBlock;
pub use course::CourseView;
pub use lesson::LessonView;
pub use nav_footer::NavFooter;
pub use sidebar::Sidebar;
