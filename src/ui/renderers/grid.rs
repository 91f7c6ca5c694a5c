//! Grid layout: fixed-width cells, wrapped into rows

use super::{draw_centered, format_size, item_glyph};
use crate::ui::theme::Theme;
use crate::ui::traits::ItemRenderer;
use crate::ui::viewport::{Viewport, content_area};
use crate::view::{ContextScope, Result};
use ratatui::{buffer::Buffer, layout::Rect};

/// Minimum cell width; narrower cells cannot show a name
const MIN_ITEM_WIDTH: u16 = 6;

#[derive(Debug, Clone)]
pub struct GridRenderer {
    theme: Theme,
    item_width: u16,
    show_bytes: bool,
}

impl GridRenderer {
    #[must_use]
    pub fn new(theme: Theme, item_width: u16, show_bytes: bool) -> Self {
        Self {
            theme,
            item_width: item_width.max(MIN_ITEM_WIDTH),
            show_bytes,
        }
    }

    /// Cell height: glyph and name, plus size when shown
    #[must_use]
    pub const fn row_height(&self) -> u16 {
        if self.show_bytes { 3 } else { 2 }
    }

    /// Cells that fit side by side in `width`
    #[must_use]
    pub fn columns(&self, width: u16) -> usize {
        usize::from((width / self.item_width).max(1))
    }
}

impl ItemRenderer for GridRenderer {
    fn render(&self, scope: ContextScope<'_>, area: Rect, buf: &mut Buffer) -> Result<()> {
        let ctx = scope.get()?;
        let items = ctx.items_or_empty();

        let content = content_area(ctx, area);
        let columns = self.columns(content.width);
        let total_rows = items.len().div_ceil(columns);
        let row_height = self.row_height();
        let viewport = Viewport::in_content(ctx, content, row_height, total_rows);

        for row in viewport.visible() {
            let row_rect = viewport.row_rect(row, row_height);
            let start = row * columns;
            let end = (start + columns).min(items.len());

            for (col, item) in items[start..end].iter().enumerate() {
                let offset = u16::try_from(col).unwrap_or(u16::MAX);
                let cell = Rect {
                    x: row_rect.x.saturating_add(offset.saturating_mul(self.item_width)),
                    width: self.item_width,
                    ..row_rect
                }
                .intersection(row_rect);
                if cell.is_empty() {
                    continue;
                }

                let is_dir = item.directory().is_some();
                let name_style = if ctx.is_selected(item) {
                    buf.set_style(cell, self.theme.selected_style(ctx.selectable));
                    self.theme.selected_style(ctx.selectable)
                } else {
                    self.theme.item_style(is_dir)
                };

                let line = |n: u16| {
                    Rect {
                        y: cell.y.saturating_add(n),
                        height: 1,
                        ..cell
                    }
                    .intersection(cell)
                };
                draw_centered(buf, line(0), item_glyph(item), name_style);
                draw_centered(buf, line(1), &item.display_name(), name_style);
                if self.show_bytes
                    && let Some(size) = format_size(item)
                {
                    draw_centered(buf, line(2), &size, self.theme.dimmed_style());
                }
            }
        }

        viewport.maybe_load_more(ctx, total_rows);
        Ok(())
    }
}
