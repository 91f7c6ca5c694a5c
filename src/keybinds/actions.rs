//! Commands that can be bound to keys in the explorer view.

/// View-wide commands triggered by global keybinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCommand {
    /// Open the quick view on the selection, or close it - Space
    ToggleQuickView,
}

/// Result of offering a key event to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was bound; when `prevent_default` is set the host must not
    /// apply its own default handling (scrolling, typing, ...)
    Handled { prevent_default: bool },
    /// The key is not bound by the view
    Ignored,
}

impl KeyOutcome {
    /// Whether the view consumed the key.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}
