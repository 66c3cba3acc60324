//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{copper_scenario, max_abs_error, relative_error, slab_scenario};
