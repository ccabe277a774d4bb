pub mod client;
pub mod public;
