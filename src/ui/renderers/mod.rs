//! Terminal renderers for the explorer layouts
//!
//! One renderer per wired layout. Each one only knows how to draw the items
//! of the bound view context; which one is mounted is the dispatcher's call.

mod grid;
mod media;
mod rows;

pub use grid::GridRenderer;
pub use media::MediaRenderer;
pub use rows::RowsRenderer;

use crate::items::{ExplorerItem, ItemKind};
use byte_unit::{Byte, UnitType};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Glyph drawn for an item
#[must_use]
pub fn item_glyph(item: &ExplorerItem) -> &'static str {
    match &item.kind {
        ItemKind::Path(path) if path.is_dir => "▣",
        ItemKind::Path(_) => "▤",
        ItemKind::Object(_) => "◆",
    }
}

/// Kind column text for an item
#[must_use]
pub fn kind_label(item: &ExplorerItem) -> String {
    match &item.kind {
        ItemKind::Path(path) if path.is_dir => "Folder".to_string(),
        ItemKind::Path(path) => path
            .extension
            .as_deref()
            .filter(|ext| !ext.is_empty())
            .map_or_else(|| "File".to_string(), str::to_uppercase),
        ItemKind::Object(object) => object
            .kind_label
            .clone()
            .unwrap_or_else(|| "Object".to_string()),
    }
}

/// Human-readable size of the item's file path, if known
#[must_use]
pub fn format_size(item: &ExplorerItem) -> Option<String> {
    let bytes = item.file_path()?.size_in_bytes?;
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    Some(format!("{adjusted:.1}"))
}

/// Draw `text` centered on the first line of `area`, truncated to its width
pub(crate) fn draw_centered(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, area.y, text, usize::from(area.width), style);
}
