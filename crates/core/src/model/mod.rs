mod ai_settings;
mod assistant;
mod catalog;
mod curriculum;
mod ids;
mod progress;
mod topic;

pub use ids::TopicId;

pub use ai_settings::{
    AiSettings, AiSettingsDraft, AiSettingsError, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL,
    DEFAULT_AI_TIMEOUT_SECS,
};
pub use assistant::{ChatMessage, ChatRole};
pub use catalog::{Catalog, CatalogError, CategoryGroup};
pub use progress::{CompletedSet, Progress, toggle};
pub use topic::{Category, CodeLine, ContentBlock, LIST_ITEM_MARKER, Topic};
