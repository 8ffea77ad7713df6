//! Progress reporters for the answer lifecycle

pub mod reporter;
