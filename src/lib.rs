//! Director Stats Server Library
//!
//! Read-only statistics about film directors, computed from a crew table
//! joined with a movies metadata table.

pub mod config;
pub mod dataset;
pub mod directors;
pub mod server;

// Re-export commonly used types for convenience
pub use dataset::{load_dataset, Dataset};
pub use server::{run_server, RequestsLoggingLevel};
