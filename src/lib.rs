//! Seminar kit: topic in, slide deck, report and Q&A sheet out

// Module declarations
pub mod config;
pub mod content;
pub mod fallback;
pub mod file_storage;
pub mod kit;
pub mod models;
pub mod parsers;
pub mod render;
pub mod shutdown;
pub mod templates;
pub mod text_source;

// Server module (HTTP API)
pub mod server;

pub use kit::{generate_kit, KitError, KitResult};
pub use models::*;
