//! Media layout: bordered thumbnail tiles, a fixed number per row

use super::{draw_centered, item_glyph};
use crate::ui::theme::Theme;
use crate::ui::traits::ItemRenderer;
use crate::ui::viewport::{Viewport, content_area};
use crate::view::{ContextScope, Result};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

/// Smallest tile that still has room for a glyph and a name inside borders
const MIN_TILE_HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
pub struct MediaRenderer {
    theme: Theme,
    columns: u16,
}

impl MediaRenderer {
    #[must_use]
    pub fn new(theme: Theme, columns: u16) -> Self {
        Self {
            theme,
            columns: columns.max(1),
        }
    }

    /// Tile size for a content area `width` cells wide
    ///
    /// Terminal cells are roughly twice as tall as wide, so a square tile is
    /// half as many rows as columns.
    #[must_use]
    pub fn tile_size(&self, width: u16) -> (u16, u16) {
        let tile_width = (width / self.columns).max(1);
        (tile_width, (tile_width / 2).max(MIN_TILE_HEIGHT))
    }
}

impl ItemRenderer for MediaRenderer {
    fn render(&self, scope: ContextScope<'_>, area: Rect, buf: &mut Buffer) -> Result<()> {
        let ctx = scope.get()?;
        let items = ctx.items_or_empty();

        let content = content_area(ctx, area);
        let columns = usize::from(self.columns);
        let total_rows = items.len().div_ceil(columns);
        let (tile_width, tile_height) = self.tile_size(content.width);
        let viewport = Viewport::in_content(ctx, content, tile_height, total_rows);

        for row in viewport.visible() {
            let row_rect = viewport.row_rect(row, tile_height);
            let start = row * columns;
            let end = (start + columns).min(items.len());

            for (col, item) in items[start..end].iter().enumerate() {
                let offset = u16::try_from(col).unwrap_or(u16::MAX);
                let tile = Rect {
                    x: row_rect.x.saturating_add(offset.saturating_mul(tile_width)),
                    width: tile_width,
                    ..row_rect
                }
                .intersection(row_rect);
                if tile.is_empty() {
                    continue;
                }

                let selected = ctx.is_selected(item);
                let border_style = if selected {
                    self.theme.selected_style(ctx.selectable)
                } else {
                    self.theme.border_style()
                };
                let block = Block::bordered().border_style(border_style);
                let inner = block.inner(tile);
                block.render(tile, buf);

                let name_style = if selected {
                    self.theme.selected_style(ctx.selectable)
                } else {
                    self.theme.item_style(item.directory().is_some())
                };
                let middle = Rect {
                    y: inner.y + inner.height.saturating_sub(1) / 2,
                    height: 1,
                    ..inner
                }
                .intersection(inner);
                let bottom = Rect {
                    y: inner.bottom().saturating_sub(1),
                    height: 1,
                    ..inner
                }
                .intersection(inner);

                draw_centered(buf, middle, item_glyph(item), self.theme.empty_icon_style());
                if bottom != middle {
                    draw_centered(buf, bottom, &item.display_name(), name_style);
                }
            }
        }

        viewport.maybe_load_more(ctx, total_rows);
        Ok(())
    }
}
