//! Answer rendering

pub mod console;
pub mod formatter;
