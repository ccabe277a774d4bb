mod client;
pub mod public;
pub mod routes;

pub use client::ApiClient;
pub use public::ApiError;
pub use routes::{
    ArchitectBackend, AuthBackend, LearningPathBackend, RagBackend, TemplatesBackend,
};
