//! Shared view context
//!
//! One value, rebuilt on every render pass by the dispatcher, that carries the
//! items, selection and scroll/pagination knobs to whichever renderer is
//! mounted. Renderers never talk to the dispatcher directly; they read the
//! context through a [`ContextScope`] and report back through its callbacks.
//!
//! Reading a scope that has no context bound is a wiring defect and fails
//! with [`ViewError::ContextUnbound`] instead of falling back to defaults.

use super::error::{Result, ViewError};
use crate::items::{ExplorerItem, Selection};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the new selection
pub type SelectionCallback = Rc<dyn Fn(Selection)>;

/// Callback invoked when an entry's context menu opens or closes
pub type ContextMenuCallback = Rc<dyn Fn(bool)>;

/// Shared scroll offset (in rows) between the host and the mounted renderer
#[derive(Debug, Clone, Default)]
pub struct ScrollHandle {
    offset: Rc<Cell<usize>>,
}

impl ScrollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset.get()
    }

    pub fn scroll_to(&self, row: usize) {
        self.offset.set(row);
    }

    /// Scroll by `delta` rows, clamping at the top
    pub fn scroll_by(&self, delta: isize) {
        self.offset.set(self.offset.get().saturating_add_signed(delta));
    }
}

/// Load-more trigger for paginated item collections
#[derive(Clone)]
pub struct LoadMore {
    /// Called when the visible window nears the end of the items
    pub callback: Rc<dyn Fn()>,
    /// Rows remaining before the callback fires
    pub rows_before: usize,
}

impl LoadMore {
    #[must_use]
    pub fn new(rows_before: usize, callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
            rows_before,
        }
    }

    /// Fire the callback when `last_visible_row` is within range of `total_rows`
    ///
    /// Returns whether the callback fired.
    pub fn maybe_fire(&self, last_visible_row: usize, total_rows: usize) -> bool {
        if total_rows == 0 || last_visible_row.saturating_add(self.rows_before) < total_rows {
            return false;
        }
        (self.callback)();
        true
    }
}

impl fmt::Debug for LoadMore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadMore")
            .field("rows_before", &self.rows_before)
            .finish_non_exhaustive()
    }
}

/// Padding around the rendered items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Same padding on every side
    Uniform(u16),
    /// Horizontal and vertical padding
    Axis { x: u16, y: u16 },
}

impl Padding {
    /// Horizontal padding
    #[must_use]
    pub const fn x(&self) -> u16 {
        match self {
            Self::Uniform(p) => *p,
            Self::Axis { x, .. } => *x,
        }
    }

    /// Vertical padding
    #[must_use]
    pub const fn y(&self) -> u16 {
        match self {
            Self::Uniform(p) => *p,
            Self::Axis { y, .. } => *y,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

/// One entry of an item's context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub shortcut: Option<String>,
}

impl MenuEntry {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shortcut: None,
        }
    }

    #[must_use]
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Context menu content attached to every entry of a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    pub entries: Vec<MenuEntry>,
}

impl ContextMenu {
    #[must_use]
    pub const fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }
}

/// Configuration and selection surface shared with the mounted renderer
#[derive(Clone)]
pub struct ViewContext {
    /// Items to render; `None` while the collection is not known yet
    pub items: Option<Rc<[ExplorerItem]>>,
    pub selected: Selection,
    pub on_selected_change: SelectionCallback,
    pub scroll: ScrollHandle,
    pub overscan: Option<usize>,
    pub load_more: Option<LoadMore>,
    /// Rows reserved above the first item
    pub top: Option<u16>,
    pub padding: Option<Padding>,
    /// Selection is list-shaped
    pub multi_select: bool,
    /// No context menu is open anywhere in the view
    pub selectable: bool,
    pub context_menu: Option<ContextMenu>,
    pub report_context_menu_open: ContextMenuCallback,
}

impl ViewContext {
    /// Whether `item` is part of the current selection
    #[must_use]
    pub fn is_selected(&self, item: &ExplorerItem) -> bool {
        self.selected.contains(item.id)
    }

    /// Request a selection change, ignored while the view is not selectable
    ///
    /// Returns whether the change was forwarded to the owner.
    pub fn select(&self, selection: Selection) -> bool {
        if !self.selectable {
            log::debug!("selection change ignored while a context menu is open");
            return false;
        }
        (self.on_selected_change)(selection);
        true
    }

    /// Items, or an empty slice while they are still loading
    #[must_use]
    pub fn items_or_empty(&self) -> &[ExplorerItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("items", &self.items.as_ref().map(|items| items.len()))
            .field("selected", &self.selected)
            .field("scroll", &self.scroll.offset())
            .field("overscan", &self.overscan)
            .field("load_more", &self.load_more)
            .field("top", &self.top)
            .field("padding", &self.padding)
            .field("multi_select", &self.multi_select)
            .field("selectable", &self.selectable)
            .field("context_menu", &self.context_menu)
            .finish_non_exhaustive()
    }
}

/// Binding through which renderers read the view context
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextScope<'a> {
    bound: Option<&'a ViewContext>,
}

impl<'a> ContextScope<'a> {
    /// Scope with a context bound for the current render pass
    #[must_use]
    pub const fn bound(context: &'a ViewContext) -> Self {
        Self {
            bound: Some(context),
        }
    }

    /// Scope outside of any mounted view
    #[must_use]
    pub const fn unbound() -> Self {
        Self { bound: None }
    }

    /// Read the bound context
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ContextUnbound` when no view has bound a context.
    pub fn get(&self) -> Result<&'a ViewContext> {
        self.bound.ok_or_else(|| {
            log::error!("explorer view context read while unbound");
            ViewError::ContextUnbound
        })
    }
}
