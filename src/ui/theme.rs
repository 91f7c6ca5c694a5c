//! Color theme definitions for the explorer renderers
//!
//! Defines colors and styles used throughout the terminal views.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for selected items
    pub selection_bg: Color,
    /// Foreground color for selected items
    pub selection_fg: Color,
    /// Background for selected items while selection is frozen
    pub frozen_selection_bg: Color,
    /// Color for directories
    pub directory: Color,
    /// Color for files
    pub file: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for the empty-state icon
    pub empty_icon: Color,
    /// Color for highlighted menu entries
    pub menu_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            frozen_selection_bg: Color::DarkGray,
            directory: Color::Cyan,
            file: Color::White,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            empty_icon: Color::Gray,
            menu_highlight: Color::Yellow,
        }
    }

    /// Style for a selected item; muted while the view is not selectable
    #[must_use]
    pub fn selected_style(&self, selectable: bool) -> Style {
        let bg = if selectable {
            self.selection_bg
        } else {
            self.frozen_selection_bg
        };
        Style::default()
            .bg(bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an item name
    #[must_use]
    pub fn item_style(&self, is_dir: bool) -> Style {
        if is_dir {
            Style::default()
                .fg(self.directory)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.file)
        }
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the empty-state icon
    #[must_use]
    pub fn empty_icon_style(&self) -> Style {
        Style::default()
            .fg(self.empty_icon)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for menu shortcuts
    #[must_use]
    pub fn menu_shortcut_style(&self) -> Style {
        Style::default().fg(self.menu_highlight)
    }
}
