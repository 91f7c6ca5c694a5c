//! Terminal presentation layer
//!
//! The explorer view core never draws items itself. It mounts one
//! [`ItemRenderer`] per render pass and hands it the shared view context;
//! the widgets here cover what the view draws around the renderers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      ViewDispatcher                     │
//! │   (flags, empty state, quick view key)  │
//! └────────────────┬────────────────────────┘
//!                  │ ContextScope
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      ItemRenderer trait                 │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┼─────────┐
//!         ▼        ▼         ▼
//!     GridRenderer RowsRenderer MediaRenderer
//! ```

pub mod renderers;
pub mod theme;
pub mod traits;
pub mod viewport;
pub mod widgets;

pub use renderers::{GridRenderer, MediaRenderer, RowsRenderer};
pub use theme::Theme;
pub use traits::ItemRenderer;
pub use viewport::Viewport;
pub use widgets::{ContextMenuPopup, EmptyNotice, QuickViewPanel};
