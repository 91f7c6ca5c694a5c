//! Context menu popup for one entry

use super::centered_rect;
use crate::ui::theme::Theme;
use crate::view::ContextMenu;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Popup listing the entries of a context menu
pub struct ContextMenuPopup<'a> {
    menu: &'a ContextMenu,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> ContextMenuPopup<'a> {
    #[must_use]
    pub const fn new(menu: &'a ContextMenu, title: &'a str, theme: &'a Theme) -> Self {
        Self { menu, title, theme }
    }

    /// Width needed to show every label with its shortcut
    #[allow(clippy::cast_possible_truncation)]
    fn content_width(&self) -> u16 {
        let widest = self
            .menu
            .entries
            .iter()
            .map(|entry| {
                entry.label.chars().count()
                    + entry.shortcut.as_ref().map_or(0, |s| s.chars().count() + 2)
            })
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count() + 2);
        widest.min(usize::from(u16::MAX - 4)) as u16
    }
}

impl Widget for ContextMenuPopup<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.content_width() + 4;
        let height = self.menu.entries.len().min(usize::from(u16::MAX - 2)) as u16 + 2;
        let popup = centered_rect(width, height, area);

        Clear.render(popup, buf);
        let block = Block::bordered()
            .border_style(self.theme.border_style())
            .title(format!(" {} ", self.title));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = self
            .menu
            .entries
            .iter()
            .map(|entry| {
                let mut spans = vec![Span::raw(format!(" {}", entry.label))];
                if let Some(shortcut) = &entry.shortcut {
                    spans.push(Span::styled(
                        format!("  {shortcut}"),
                        self.theme.menu_shortcut_style(),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_text;
    use crate::view::MenuEntry;

    #[test]
    fn test_popup_lists_entries() {
        let menu = ContextMenu::new(vec![
            MenuEntry::new("Open").with_shortcut("enter"),
            MenuEntry::new("Quick view").with_shortcut("space"),
        ]);
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        ContextMenuPopup::new(&menu, "notes.md", &theme).render(area, &mut buf);

        let text = buffer_text(&buf).join("\n");
        assert!(text.contains("notes.md"));
        assert!(text.contains("Open  enter"));
        assert!(text.contains("Quick view  space"));
    }
}
