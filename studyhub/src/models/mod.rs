pub mod chat;
pub mod content;

pub use chat::{ChatMessage, ChatRole};
pub use content::{Language, QuizQuestion, RoadmapItem, OPTION_COUNT};
