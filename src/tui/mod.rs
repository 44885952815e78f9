//! Interactive terminal UI for browsing the operator catalog.
//!
//! This module contains the full TUI application: state management, the event
//! loop, rendering, and the reusable widgets and style definitions.

mod actions;
mod components;
mod config;
pub mod input;
mod preview;
mod render;
mod runtime;
mod state;
pub mod style;


pub use config::UiLabels;
pub use input::SearchInput;
pub use state::{App, BrowseOutcome};
