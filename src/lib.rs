//! Explorer view - shared interaction state for a file-explorer view
//!
//! This library decides which renderer (grid, rows, media, columns) is
//! mounted, propagates one selection/scroll/pagination model to it, governs
//! when items may be selected, and defines what double-activating an entry
//! does: navigate into a directory, or open a file with the host platform.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod config;
pub mod items;
pub mod keybinds;
pub mod quick_view;
pub mod services;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// View wiring or rendering error
    #[error("View error: {0}")]
    View(#[from] view::ViewError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
