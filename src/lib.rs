pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod core;
pub mod pages;
pub mod router;
pub mod storage;
pub mod store;
