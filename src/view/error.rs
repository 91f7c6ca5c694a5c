//! View error types

use thiserror::Error;

/// Errors that can occur while rendering an explorer view
#[derive(Debug, Error)]
pub enum ViewError {
    /// A renderer read the view context outside of a mounted view.
    /// This is a wiring defect, never a runtime condition.
    #[error("Explorer view context read outside of a mounted explorer view")]
    ContextUnbound,
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
