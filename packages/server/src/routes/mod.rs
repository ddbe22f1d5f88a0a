//! HTTP route handlers.

mod api;
mod extract;
mod health;
mod index;
mod search;

pub use api::api_extract_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use search::search_handler;
