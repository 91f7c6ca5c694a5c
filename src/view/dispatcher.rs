//! View dispatcher
//!
//! Top-level orchestrator of one explorer view. It owns the flag recording
//! whether any entry's context menu is open, derives `selectable` and
//! `multi_select` into a fresh [`ViewContext`] on every render pass, handles
//! the quick view key, resolves the empty state and mounts exactly one
//! renderer for the current layout.

use super::context::{
    ContextMenu, ContextScope, LoadMore, Padding, ScrollHandle, SelectionCallback, ViewContext,
};
use super::error::Result;
use super::layout::{EmptyIcon, LayoutMode};
use crate::config::ExplorerConfig;
use crate::items::{ExplorerItem, Selection};
use crate::keybinds::{KeyBindings, KeyOutcome, ViewCommand};
use crate::quick_view::QuickViewStore;
use crate::ui::{EmptyNotice, GridRenderer, ItemRenderer, MediaRenderer, RowsRenderer, Theme};
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget},
};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Message shown for an empty item list when none is supplied
pub const DEFAULT_EMPTY_MESSAGE: &str = "This list is empty";

/// Key bound to the quick view when the configured key is invalid
const DEFAULT_QUICK_VIEW_KEY: &str = "space";

/// What to show when the item list is known to be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmptyState {
    /// Layout icon above the default message
    #[default]
    Default,
    /// Render nothing
    Hidden,
    /// Notice with optional icon and message overrides
    Notice {
        icon: Option<EmptyIcon>,
        message: Option<String>,
    },
    /// Caller-supplied content, rendered verbatim
    Custom(Text<'static>),
}

/// What a render pass put on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The renderer for this layout was mounted
    Mounted(LayoutMode),
    /// The layout has no renderer; nothing was drawn
    Blank,
    /// The empty notice was drawn
    EmptyNotice { icon: EmptyIcon, message: String },
    /// Custom empty-state content was drawn
    EmptyCustom,
    /// Empty state suppressed; nothing was drawn
    EmptyHidden,
}

/// Caller-supplied inputs of one render pass
#[derive(Clone)]
pub struct ViewProps {
    pub layout: LayoutMode,
    /// `None` while the items are not known yet
    pub items: Option<Rc<[ExplorerItem]>>,
    pub selected: Selection,
    pub on_selected_change: SelectionCallback,
    pub scroll: ScrollHandle,
    pub overscan: Option<usize>,
    pub load_more: Option<LoadMore>,
    pub top: Option<u16>,
    pub padding: Option<Padding>,
    pub context_menu: Option<ContextMenu>,
    pub empty_state: EmptyState,
}

impl ViewProps {
    /// Props for `layout` with unknown items and an empty multi-selection
    #[must_use]
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            layout,
            items: None,
            selected: Selection::default(),
            on_selected_change: Rc::new(|_: Selection| {}),
            scroll: ScrollHandle::new(),
            overscan: None,
            load_more: None,
            top: None,
            padding: None,
            context_menu: None,
            empty_state: EmptyState::Default,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: impl Into<Rc<[ExplorerItem]>>) -> Self {
        self.items = Some(items.into());
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selected: impl Into<Selection>) -> Self {
        self.selected = selected.into();
        self
    }

    #[must_use]
    pub fn on_selected_change(mut self, callback: impl Fn(Selection) + 'static) -> Self {
        self.on_selected_change = Rc::new(callback);
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollHandle) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub const fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = Some(overscan);
        self
    }

    #[must_use]
    pub fn with_load_more(mut self, load_more: LoadMore) -> Self {
        self.load_more = Some(load_more);
        self
    }

    #[must_use]
    pub const fn with_top(mut self, top: u16) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_context_menu(mut self, menu: ContextMenu) -> Self {
        self.context_menu = Some(menu);
        self
    }

    #[must_use]
    pub fn with_empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }
}

impl fmt::Debug for ViewProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewProps")
            .field("layout", &self.layout)
            .field("items", &self.items.as_ref().map(|items| items.len()))
            .field("selected", &self.selected)
            .field("empty_state", &self.empty_state)
            .finish_non_exhaustive()
    }
}

/// The renderers a dispatcher can mount
pub struct Renderers {
    pub grid: Box<dyn ItemRenderer>,
    pub rows: Box<dyn ItemRenderer>,
    pub media: Box<dyn ItemRenderer>,
}

impl Renderers {
    /// Terminal renderers configured from the explorer settings
    #[must_use]
    pub fn from_config(config: &ExplorerConfig, theme: &Theme) -> Self {
        Self {
            grid: Box::new(GridRenderer::new(
                theme.clone(),
                config.grid_item_size,
                config.show_bytes_in_grid_view,
            )),
            rows: Box::new(RowsRenderer::new(theme.clone())),
            media: Box::new(MediaRenderer::new(theme.clone(), config.media_columns)),
        }
    }

    /// Renderer mounted for `layout`; the columns layout has none
    #[must_use]
    pub fn for_layout(&self, layout: LayoutMode) -> Option<&dyn ItemRenderer> {
        match layout {
            LayoutMode::Grid => Some(self.grid.as_ref()),
            LayoutMode::Rows => Some(self.rows.as_ref()),
            LayoutMode::Media => Some(self.media.as_ref()),
            LayoutMode::Columns => None,
        }
    }
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers").finish_non_exhaustive()
    }
}

/// Orchestrator of one mounted explorer view
pub struct ViewDispatcher {
    context_menu_open: Rc<Cell<bool>>,
    quick_view: QuickViewStore,
    renderers: Renderers,
    bindings: KeyBindings<ViewCommand>,
    quick_view_key: String,
    theme: Theme,
}

impl ViewDispatcher {
    /// Create a dispatcher and register the quick view key binding
    #[must_use]
    pub fn new(quick_view: QuickViewStore, renderers: Renderers, config: &ExplorerConfig) -> Self {
        let mut bindings = KeyBindings::new();
        let quick_view_key = bindings.bind_str(
            &config.quick_view_key,
            DEFAULT_QUICK_VIEW_KEY,
            ViewCommand::ToggleQuickView,
        );
        log::debug!("quick view bound to '{quick_view_key}'");

        Self {
            context_menu_open: Rc::new(Cell::new(false)),
            quick_view,
            renderers,
            bindings,
            quick_view_key,
            theme: Theme::default(),
        }
    }

    /// Use `theme` for the widgets the dispatcher draws itself
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether entries may currently be selected
    #[must_use]
    pub fn selectable(&self) -> bool {
        !self.context_menu_open.get()
    }

    #[must_use]
    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu_open.get()
    }

    pub fn set_context_menu_open(&self, open: bool) {
        set_menu_flag(&self.context_menu_open, open);
    }

    /// Key string the quick view toggle is bound to
    #[must_use]
    pub fn quick_view_key(&self) -> &str {
        &self.quick_view_key
    }

    #[must_use]
    pub const fn quick_view(&self) -> &QuickViewStore {
        &self.quick_view
    }

    /// Build the shared context for one render pass
    #[must_use]
    pub fn build_context(&self, props: &ViewProps) -> ViewContext {
        let flag = Rc::clone(&self.context_menu_open);

        ViewContext {
            items: props.items.clone(),
            selected: props.selected.clone(),
            on_selected_change: Rc::clone(&props.on_selected_change),
            scroll: props.scroll.clone(),
            overscan: props.overscan,
            load_more: props.load_more.clone(),
            top: props.top,
            padding: props.padding,
            multi_select: props.selected.is_multi(),
            selectable: self.selectable(),
            context_menu: props.context_menu.clone(),
            report_context_menu_open: Rc::new(move |open: bool| set_menu_flag(&flag, open)),
        }
    }

    /// Render the view into `area`
    ///
    /// A known-empty item list resolves the empty state; anything else,
    /// including items that are not known yet, mounts the layout's renderer.
    ///
    /// # Errors
    ///
    /// Propagates errors of the mounted renderer.
    pub fn render(&self, props: &ViewProps, area: Rect, buf: &mut Buffer) -> Result<ViewOutcome> {
        if props.items.as_deref().is_some_and(<[ExplorerItem]>::is_empty) {
            return Ok(self.render_empty(props, area, buf));
        }

        let Some(renderer) = self.renderers.for_layout(props.layout) else {
            return Ok(ViewOutcome::Blank);
        };

        let ctx = self.build_context(props);
        renderer.render(ContextScope::bound(&ctx), area, buf)?;
        Ok(ViewOutcome::Mounted(props.layout))
    }

    fn render_empty(&self, props: &ViewProps, area: Rect, buf: &mut Buffer) -> ViewOutcome {
        let (icon, message) = match &props.empty_state {
            EmptyState::Hidden => return ViewOutcome::EmptyHidden,
            EmptyState::Custom(text) => {
                Paragraph::new(text.clone()).render(area, buf);
                return ViewOutcome::EmptyCustom;
            }
            EmptyState::Default => (None, None),
            EmptyState::Notice { icon, message } => (icon.clone(), message.clone()),
        };

        let icon = icon.unwrap_or_else(|| props.layout.empty_icon());
        let message = message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
        EmptyNotice::new(&icon, &message, &self.theme).render(area, buf);
        ViewOutcome::EmptyNotice { icon, message }
    }

    /// Offer a key press to the view's global bindings
    pub fn handle_key(&self, key: &KeyEvent, props: &ViewProps) -> KeyOutcome {
        match self.bindings.lookup(key) {
            Some(ViewCommand::ToggleQuickView) => {
                self.toggle_quick_view(props);
                KeyOutcome::Handled {
                    prevent_default: true,
                }
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Close the quick view if it is open, otherwise open it on the first
    /// selected item. Selecting nothing that matches an item is a no-op.
    pub fn toggle_quick_view(&self, props: &ViewProps) {
        if self.quick_view.is_open() {
            self.quick_view.clear();
            return;
        }

        let target = props.selected.first().and_then(|id| {
            props
                .items
                .as_deref()
                .and_then(|items| items.iter().find(|item| item.id == id))
        });

        match target {
            Some(item) => self.quick_view.set(item.clone()),
            None => log::debug!("quick view toggle ignored: no item matches the selection"),
        }
    }
}

impl fmt::Debug for ViewDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDispatcher")
            .field("context_menu_open", &self.context_menu_open.get())
            .field("quick_view_key", &self.quick_view_key)
            .finish_non_exhaustive()
    }
}

fn set_menu_flag(flag: &Cell<bool>, open: bool) {
    if flag.replace(open) != open {
        log::debug!("context menu {}", if open { "opened" } else { "closed" });
    }
}
