pub mod config;
pub mod error;
pub mod labels;
pub mod model;
pub mod pipeline;
pub mod postprocessing;
pub mod preprocessing;
pub mod server;

#[cfg(test)]
mod observability_tests;

// Re-export common types
pub use error::InferenceError;
pub use labels::LABELS;
