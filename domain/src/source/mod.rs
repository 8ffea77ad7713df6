//! Knowledge source configuration and routing.

pub mod config;
pub mod routing;

pub use config::{RetryPolicy, SourceAdapterConfig};
pub use routing::{DEFAULT_ENTITY_BOOST, RoutingHints};
