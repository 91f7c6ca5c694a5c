//! Keybind system for the explorer view.
//!
//! Parses configured key strings into terminal key events and maps them to
//! view-wide commands such as the quick view toggle.

pub mod actions;
pub mod config;

pub use actions::{KeyOutcome, ViewCommand};
pub use config::{KeyBindings, parse_key_string};
