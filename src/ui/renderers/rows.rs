//! List layout: one line per item under a column header

use super::{format_size, item_glyph, kind_label};
use crate::ui::theme::Theme;
use crate::ui::traits::ItemRenderer;
use crate::ui::viewport::{Viewport, content_area};
use crate::view::{ContextScope, Result};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
};

const NAME_HEADER: &str = "Name";
const KIND_HEADER: &str = "Kind";
const SIZE_HEADER: &str = "Size";

#[derive(Debug, Clone, Default)]
pub struct RowsRenderer {
    theme: Theme,
}

impl RowsRenderer {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn columns(line: Rect) -> [Rect; 3] {
        Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(12),
            Constraint::Length(11),
        ])
        .spacing(1)
        .areas(line)
    }
}

impl ItemRenderer for RowsRenderer {
    fn render(&self, scope: ContextScope<'_>, area: Rect, buf: &mut Buffer) -> Result<()> {
        let ctx = scope.get()?;
        let items = ctx.items_or_empty();

        let content = content_area(ctx, area);
        if content.is_empty() {
            return Ok(());
        }

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(content);
        let header_style = self.theme.dimmed_style().add_modifier(Modifier::BOLD);
        let [name, kind, size] = Self::columns(header);
        buf.set_stringn(name.x, name.y, NAME_HEADER, usize::from(name.width), header_style);
        buf.set_stringn(kind.x, kind.y, KIND_HEADER, usize::from(kind.width), header_style);
        buf.set_stringn(size.x, size.y, SIZE_HEADER, usize::from(size.width), header_style);

        let viewport = Viewport::in_content(ctx, body, 1, items.len());
        for index in viewport.visible() {
            let item = &items[index];
            let line = viewport.row_rect(index, 1);

            let style = if ctx.is_selected(item) {
                let selected = self.theme.selected_style(ctx.selectable);
                buf.set_style(line, selected);
                selected
            } else {
                self.theme.item_style(item.directory().is_some())
            };

            let [name, kind, size] = Self::columns(line);
            let label = format!("{} {}", item_glyph(item), item.display_name());
            buf.set_stringn(name.x, name.y, &label, usize::from(name.width), style);
            buf.set_stringn(
                kind.x,
                kind.y,
                kind_label(item),
                usize::from(kind.width),
                style,
            );
            if let Some(bytes) = format_size(item) {
                buf.set_stringn(size.x, size.y, bytes, usize::from(size.width), style);
            }
        }

        viewport.maybe_load_more(ctx, items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ExplorerItem, Selection};
    use crate::testing::{bare_context, buffer_text, path_item};

    fn items(count: i32) -> Vec<ExplorerItem> {
        (1..=count)
            .map(|id| path_item(id, "/", &format!("item{id}.txt"), false))
            .collect()
    }

    #[test]
    fn test_header_and_rows() {
        let ctx = bare_context(Some(items(2)));
        let renderer = RowsRenderer::new(Theme::dark());
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        renderer.render(ContextScope::bound(&ctx), area, &mut buf).unwrap();

        let text = buffer_text(&buf);
        assert!(text[0].starts_with("Name"));
        assert!(text[0].contains("Kind"));
        assert!(text[1].contains("item1.txt"));
        assert!(text[1].contains("TXT"));
        assert!(text[2].contains("item2.txt"));
        assert!(text[3].trim().is_empty());
    }

    #[test]
    fn test_scroll_offset_skips_rows() {
        let ctx = bare_context(Some(items(10)));
        ctx.scroll.scroll_to(4);
        let renderer = RowsRenderer::new(Theme::dark());
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        renderer.render(ContextScope::bound(&ctx), area, &mut buf).unwrap();

        let text = buffer_text(&buf);
        assert!(text[1].contains("item5.txt"));
        assert!(text[2].contains("item6.txt"));
    }

    #[test]
    fn test_selected_row_spans_full_width() {
        let mut ctx = bare_context(Some(items(2)));
        ctx.selected = Selection::Multiple(vec![1]);
        let theme = Theme::dark();
        let renderer = RowsRenderer::new(theme.clone());
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        renderer.render(ContextScope::bound(&ctx), area, &mut buf).unwrap();

        assert_eq!(buf[(39, 1)].bg, theme.selection_bg);
        assert_ne!(buf[(39, 2)].bg, theme.selection_bg);
    }

    #[test]
    fn test_unknown_items_render_header_only() {
        let ctx = bare_context(None);
        let renderer = RowsRenderer::new(Theme::dark());
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        renderer.render(ContextScope::bound(&ctx), area, &mut buf).unwrap();

        let text = buffer_text(&buf);
        assert!(text[0].starts_with("Name"));
        assert!(text[1].trim().is_empty());
    }
}
