//! Orchestration domain: request lifecycle states and per-request results.

pub mod state;
pub mod value_objects;
