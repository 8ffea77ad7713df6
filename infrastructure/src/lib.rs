//! Infrastructure layer for askme
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod sources;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileSourceConfig, FileSourcesConfig};
pub use logging::JsonlAnswerLogger;
pub use sources::{
    WebSearchAdapter, WikipediaAdapter, WolframAdapter, build_sources, http::build_client,
};
