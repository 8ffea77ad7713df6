//! The source-query boundary and source registration.

mod query;
mod registry;

pub use query::query_source;
pub use registry::RegisteredSource;
