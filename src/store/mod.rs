//! Page-scoped state holders. Each store owns its slice exclusively.

pub mod chat;
pub mod generation;
pub mod learning;

pub use chat::{ChatStore, Message, Role};
pub use generation::GenerationStore;
pub use learning::LearningProgress;
