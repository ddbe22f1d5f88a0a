//! Web surface for the linksift extractor.
//!
//! Serves a URL-input form, rendered results pages, and a JSON API over
//! the core library. Presentation only; all extraction semantics live in
//! the `linksift` crate.

pub mod app;
pub mod config;
pub mod render;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
