//! Typed wrappers, one per backend capability

pub mod architect;
pub mod auth;
pub mod learning_path;
pub mod rag;
pub mod templates;

pub use architect::client::ArchitectBackend;
pub use auth::client::AuthBackend;
pub use learning_path::client::LearningPathBackend;
pub use rag::client::RagBackend;
pub use templates::client::TemplatesBackend;
