//! Quick view overlay: details of the item held in the quick view slot

use crate::items::{ExplorerItem, ItemKind};
use crate::ui::renderers::{format_size, item_glyph, kind_label};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

/// Full-area panel describing one item
pub struct QuickViewPanel<'a> {
    item: &'a ExplorerItem,
    theme: &'a Theme,
}

impl<'a> QuickViewPanel<'a> {
    #[must_use]
    pub const fn new(item: &'a ExplorerItem, theme: &'a Theme) -> Self {
        Self { item, theme }
    }

    fn field(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:>10}: "), self.theme.dimmed_style()),
            Span::raw(value),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let item = self.item;
        let mut lines = vec![
            Line::styled(
                format!("{} {}", item_glyph(item), item.display_name()),
                self.theme
                    .item_style(item.directory().is_some())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            self.field("Kind", kind_label(item)),
        ];

        if let Some(size) = format_size(item) {
            lines.push(self.field("Size", size));
        }
        if let Some(path) = item.file_path() {
            lines.push(self.field("Location", path.materialized_path.clone()));
        }
        if let Some(object_id) = item.object_id() {
            lines.push(self.field("Object", format!("#{object_id}")));
        }
        if let ItemKind::Object(object) = &item.kind
            && object.file_paths.len() > 1
        {
            lines.push(self.field("Copies", object.file_paths.len().to_string()));
        }
        lines
    }
}

impl Widget for QuickViewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .border_style(self.theme.border_style())
            .title(" Quick view ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
