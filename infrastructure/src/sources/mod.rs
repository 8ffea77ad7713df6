//! Knowledge source adapters
//!
//! Concrete implementations of the [`SourceAdapter`](askme_application::SourceAdapter)
//! port, one per external provider, plus the shared HTTP plumbing and the
//! registry that builds them from configuration.

pub mod http;
mod registry;
mod web_search;
mod wikipedia;
mod wolfram;

pub use registry::build_sources;
pub use web_search::WebSearchAdapter;
pub use wikipedia::WikipediaAdapter;
pub use wolfram::WolframAdapter;
