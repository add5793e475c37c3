pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod render;
pub mod sequencer;
pub mod widget;

pub use components::{home_search::*, nav_search::*};
pub use config::{FailurePolicy, SearchConfig};
pub use error::{AppError, AppResult};

/// Element the home page search is mounted into.
pub const HOME_HOST_ID: &str = "home-search";
/// Element in the page frame the navigation search is mounted into.
pub const NAV_HOST_ID: &str = "frame-nav-search";
/// Attribute on a host element holding the widget's JSON settings.
pub const CONFIG_ATTRIBUTE: &str = "data-search-config";
