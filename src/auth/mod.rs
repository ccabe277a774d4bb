pub mod session;
pub mod usage;
pub use session::{Session, SessionManager, User};
pub use usage::{UsageLevel, remaining_usage};
