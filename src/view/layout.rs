//! Layout modes and their empty-state icons

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout the explorer view renders its items with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Icon grid
    #[default]
    Grid,
    /// Square media tiles
    Media,
    /// Miller columns (no renderer is wired to this layout)
    Columns,
    /// Detail rows
    Rows,
}

impl LayoutMode {
    /// All layout modes, in menu order
    pub const ALL: [Self; 4] = [Self::Grid, Self::Media, Self::Columns, Self::Rows];

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Media => "media",
            Self::Columns => "columns",
            Self::Rows => "rows",
        }
    }

    /// Icon shown by the default empty notice for this layout
    #[must_use]
    pub const fn empty_icon(&self) -> EmptyIcon {
        match self {
            Self::Grid => EmptyIcon::GridFour,
            Self::Media => EmptyIcon::MonitorPlay,
            Self::Columns => EmptyIcon::Columns,
            Self::Rows => EmptyIcon::Rows,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "media" => Ok(Self::Media),
            "columns" => Ok(Self::Columns),
            "rows" | "list" => Ok(Self::Rows),
            other => Err(format!("unknown layout mode '{other}'")),
        }
    }
}

/// Icon shown above an empty-state message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyIcon {
    GridFour,
    MonitorPlay,
    Columns,
    Rows,
    /// Caller-supplied glyph
    Custom(String),
}

impl EmptyIcon {
    /// Terminal glyph for the icon
    #[must_use]
    pub fn glyph(&self) -> &str {
        match self {
            Self::GridFour => "▦",
            Self::MonitorPlay => "▶",
            Self::Columns => "▥",
            Self::Rows => "☰",
            Self::Custom(glyph) => glyph,
        }
    }
}
