//! Core crate exports for the `marbles` terminal operator browser.
//!
//! The root module primarily re-exports the catalog model, the view-state
//! controller, and the TUI application so that embedders can run the browser
//! without digging through the module hierarchy.

pub mod app_dirs;
pub mod browser;
pub mod catalog;
pub mod detail;
pub mod filter;
pub mod logging;
pub mod tui;

pub use browser::{Browser, CellContent, Shell};
pub use catalog::{Category, Operator, catalog, category_of};
pub use detail::DetailView;
pub use filter::filter_catalog;
pub use tui::{App, BrowseOutcome, UiLabels};
pub use tui::style::{StyleConfig, Theme, default_theme};
