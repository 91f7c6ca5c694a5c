//! Selection state
//!
//! The shape of the selection is the only thing that decides whether a view
//! is in multi-select mode: a list (even an empty one) is multi-select, a bare
//! id is not.

use super::types::ItemId;

/// Current selection of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-select: one id
    Single(ItemId),

    /// Multi-select: ordered list of ids
    Multiple(Vec<ItemId>),
}

impl Selection {
    /// Whether the selection is list-shaped
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// First selected id (the scalar itself for single selection)
    #[must_use]
    pub fn first(&self) -> Option<ItemId> {
        match self {
            Self::Single(id) => Some(*id),
            Self::Multiple(ids) => ids.first().copied(),
        }
    }

    /// Whether `id` is part of the selection
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        match self {
            Self::Single(selected) => *selected == id,
            Self::Multiple(ids) => ids.contains(&id),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Multiple(Vec::new())
    }
}

impl From<ItemId> for Selection {
    fn from(id: ItemId) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<ItemId>> for Selection {
    fn from(ids: Vec<ItemId>) -> Self {
        Self::Multiple(ids)
    }
}
