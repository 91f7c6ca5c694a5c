//! Explorer view core
//!
//! - `context`: the shared view context and the scope renderers read it through
//! - `dispatcher`: flags, quick view key, empty state and renderer mounting
//! - `entry`: per-item activation and context menu hookup
//! - `layout`: layout modes and their empty-state icons

mod context;
mod dispatcher;
mod entry;
mod error;
mod layout;

pub use context::{
    ContextMenu, ContextMenuCallback, ContextScope, LoadMore, MenuEntry, Padding, ScrollHandle,
    SelectionCallback, ViewContext,
};
pub use dispatcher::{
    DEFAULT_EMPTY_MESSAGE, EmptyState, Renderers, ViewDispatcher, ViewOutcome, ViewProps,
};
pub use entry::{Activation, ExplorerEntry, IgnoreReason};
pub use error::{Result, ViewError};
pub use layout::{EmptyIcon, LayoutMode};
