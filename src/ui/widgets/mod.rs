//! Widgets drawn around the item renderers

pub mod context_menu;
pub mod empty_notice;
pub mod quick_view;

pub use context_menu::ContextMenuPopup;
pub use empty_notice::EmptyNotice;
pub use quick_view::QuickViewPanel;

use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height` centered in `area`
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
