//! Error types for the navigation bar

use thiserror::Error;

/// Diagnostics raised while checking a `NavBar` configuration.
///
/// Child-composition variants are advisory: the bar logs them and still renders.
#[derive(Error, Debug)]
pub enum NavBarError {
    #[error("Invalid prop '{prop}' supplied to '{component}' (got '{found}'). Must be one of NavBarItem, NavBarLink or NavBarTitle")]
    InvalidChild {
        prop: String,
        component: String,
        found: String,
    },

    #[error("Multiple NavBarTitle props supplied to '{component}'. Maximal one is allowed.")]
    MultipleTitles { component: String },

    #[error("Invalid style map: {0}")]
    Styles(#[from] serde_json::Error),
}

/// Result type for navigation bar operations
pub type NavBarResult<T> = Result<T, NavBarError>;
