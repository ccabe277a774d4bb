//! Client-side navigation: the route table, the current location and
//! the guard in front of protected pages.

pub mod guard;
pub mod navigator;
pub mod routes;

pub use guard::{GuardDecision, guard};
pub use navigator::{Location, Navigator};
pub use routes::Route;
