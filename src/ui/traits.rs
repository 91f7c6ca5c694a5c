//! Core traits for the renderer layer

use crate::view::{ContextScope, Result};
use ratatui::{buffer::Buffer, layout::Rect};

/// Trait for item renderers (grid, rows, media)
///
/// A renderer draws the items of the bound view context and nothing else: it
/// reads selection, scroll and pagination knobs from the context and reports
/// back only through the context's callbacks.
pub trait ItemRenderer {
    /// Render the items of the bound context into `area`
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ContextUnbound` when called outside of a mounted
    /// view, or a render error if the items cannot be drawn.
    fn render(&self, scope: ContextScope<'_>, area: Rect, buf: &mut Buffer) -> Result<()>;
}
