//! UI building blocks shared across rendering and state modules.

/// Flattened row construction for the sectioned list.
pub(crate) mod rows;
/// Sectioned list rendering.
pub(crate) mod tables;
