//! Visible window calculation shared by the renderers
//!
//! Renderers lay items out in rows (one list row, or one line of grid cells).
//! The viewport applies the context's padding and top offset, clamps the
//! scroll offset, and decides which rows to draw. Overscan rows count as
//! rendered for the purpose of the load-more trigger.

use crate::view::ViewContext;
use ratatui::layout::Rect;

/// Rows to draw for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Area left after padding and top offset
    pub area: Rect,
    /// First row drawn
    pub first_row: usize,
    /// Number of rows that fit in `area`
    pub visible_rows: usize,
    /// One past the last row considered rendered (visible + overscan)
    pub rendered_end: usize,
}

impl Viewport {
    /// Compute the viewport for `total_rows` rows of `row_height` cells each
    #[must_use]
    pub fn new(ctx: &ViewContext, area: Rect, row_height: u16, total_rows: usize) -> Self {
        Self::in_content(ctx, content_area(ctx, area), row_height, total_rows)
    }

    /// Same as [`Viewport::new`] for an area that already excludes padding
    #[must_use]
    pub fn in_content(ctx: &ViewContext, area: Rect, row_height: u16, total_rows: usize) -> Self {
        let visible_rows = usize::from(area.height / row_height.max(1));

        let max_first = total_rows.saturating_sub(visible_rows.max(1));
        let first_row = ctx.scroll.offset().min(max_first);
        if first_row != ctx.scroll.offset() {
            ctx.scroll.scroll_to(first_row);
        }

        let overscan = ctx.overscan.unwrap_or(0);
        let rendered_end = (first_row + visible_rows + overscan).min(total_rows);

        Self {
            area,
            first_row,
            visible_rows,
            rendered_end,
        }
    }

    /// Rows actually visible on screen
    #[must_use]
    pub fn visible(&self) -> std::ops::Range<usize> {
        let end = (self.first_row + self.visible_rows).min(self.rendered_end);
        self.first_row..end
    }

    /// Screen rectangle of visible row `row` (absolute index)
    #[must_use]
    pub fn row_rect(&self, row: usize, row_height: u16) -> Rect {
        let offset = u16::try_from(row - self.first_row).unwrap_or(u16::MAX);
        Rect {
            x: self.area.x,
            y: self.area.y.saturating_add(offset.saturating_mul(row_height)),
            width: self.area.width,
            height: row_height,
        }
        .intersection(self.area)
    }

    /// Fire the context's load-more callback if the rendered window reaches
    /// its threshold. Returns whether it fired.
    pub fn maybe_load_more(&self, ctx: &ViewContext, total_rows: usize) -> bool {
        match &ctx.load_more {
            Some(load_more) if ctx.items.is_some() && self.rendered_end > 0 => {
                load_more.maybe_fire(self.rendered_end - 1, total_rows)
            }
            _ => false,
        }
    }
}

/// Area inside the context's padding, below its top offset
#[must_use]
pub fn content_area(ctx: &ViewContext, area: Rect) -> Rect {
    let padding = ctx.padding.unwrap_or_default();
    let top = ctx.top.unwrap_or(0);

    let x = area.x.saturating_add(padding.x());
    let y = area.y.saturating_add(padding.y()).saturating_add(top);
    let width = area.width.saturating_sub(padding.x().saturating_mul(2));
    let height = area
        .height
        .saturating_sub(padding.y().saturating_mul(2))
        .saturating_sub(top);

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::bare_context;
    use crate::view::{LoadMore, Padding};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_content_area_applies_padding_and_top() {
        let mut ctx = bare_context(None);
        ctx.padding = Some(Padding::Axis { x: 2, y: 1 });
        ctx.top = Some(3);

        let area = content_area(&ctx, Rect::new(0, 0, 20, 10));
        assert_eq!(area, Rect::new(2, 4, 16, 5));
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let ctx = bare_context(None);
        ctx.scroll.scroll_to(50);

        let viewport = Viewport::new(&ctx, Rect::new(0, 0, 10, 4), 1, 10);
        assert_eq!(viewport.first_row, 6);
        assert_eq!(ctx.scroll.offset(), 6);
        assert_eq!(viewport.visible().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_overscan_extends_rendered_window() {
        let mut ctx = bare_context(None);
        ctx.overscan = Some(3);

        let viewport = Viewport::new(&ctx, Rect::new(0, 0, 10, 4), 1, 100);
        assert_eq!(viewport.rendered_end, 7);
        assert_eq!(viewport.visible().count(), 4);
    }

    #[test]
    fn test_load_more_fires_near_the_end() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut ctx = bare_context(Some(Vec::new()));
        ctx.load_more = Some(LoadMore::new(2, move || flag.set(true)));

        let viewport = Viewport::new(&ctx, Rect::new(0, 0, 10, 4), 1, 20);
        assert!(!viewport.maybe_load_more(&ctx, 20));

        ctx.scroll.scroll_to(16);
        let viewport = Viewport::new(&ctx, Rect::new(0, 0, 10, 4), 1, 20);
        assert!(viewport.maybe_load_more(&ctx, 20));
        assert!(fired.get());
    }

    #[test]
    fn test_load_more_never_fires_while_items_unknown() {
        let mut ctx = bare_context(None);
        ctx.load_more = Some(LoadMore::new(100, || {}));

        let viewport = Viewport::new(&ctx, Rect::new(0, 0, 10, 4), 1, 0);
        assert!(!viewport.maybe_load_more(&ctx, 0));
    }
}
