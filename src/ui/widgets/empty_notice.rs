//! Empty-state notice: an icon above a message, centered in the view

use super::centered_rect;
use crate::ui::theme::Theme;
use crate::view::EmptyIcon;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Notice shown when a view has no items
pub struct EmptyNotice<'a> {
    icon: &'a EmptyIcon,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> EmptyNotice<'a> {
    #[must_use]
    pub const fn new(icon: &'a EmptyIcon, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            icon,
            message,
            theme,
        }
    }
}

impl Widget for EmptyNotice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Icon, blank line, message
        let block = centered_rect(area.width, 3, area);
        let [icon_area, _, message_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block);

        Paragraph::new(Line::styled(self.icon.glyph(), self.theme.empty_icon_style()))
            .alignment(Alignment::Center)
            .render(icon_area, buf);
        Paragraph::new(Line::styled(self.message, self.theme.dimmed_style()))
            .alignment(Alignment::Center)
            .render(message_area, buf);
    }
}
