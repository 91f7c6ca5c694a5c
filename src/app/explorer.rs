//! Interactive explorer state
//!
//! Wires an [`FsLibrary`] to a [`ViewDispatcher`] and turns key presses into
//! cursor moves, selection changes, activations and layout switches. Drawing
//! goes through the dispatcher; the overlays (context menu, quick view) and
//! the status bar are drawn on top.

use super::library::{FsLibrary, ROOT_LOCATION};
use crate::config::{ExplorerConfig, ExplorerStore};
use crate::items::{ExplorerItem, Selection};
use crate::quick_view::{QuickViewStore, SubscriptionId};
use crate::services::{ExplorerServices, FileOpener, Navigator};
use crate::ui::{
    ContextMenuPopup, GridRenderer, MediaRenderer, QuickViewPanel, Theme, widgets::centered_rect,
};
use crate::view::{
    Activation, ContextMenu, ExplorerEntry, IgnoreReason, LayoutMode, LoadMore, MenuEntry,
    Padding, Renderers, ScrollHandle, ViewDispatcher, ViewOutcome, ViewProps,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Items added to the view each time it asks for more
pub const PAGE_SIZE: usize = 200;

/// Horizontal padding around the items
const PADDING_X: u16 = 1;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Explorer over one library
pub struct ExplorerApp {
    library: Rc<FsLibrary>,
    services: ExplorerServices,
    dispatcher: ViewDispatcher,
    theme: Theme,
    layout: LayoutMode,
    listing: Vec<ExplorerItem>,
    shown: Rc<[ExplorerItem]>,
    page_limit: Rc<Cell<usize>>,
    selection: Rc<RefCell<Selection>>,
    cursor: usize,
    scroll: ScrollHandle,
    grid: GridRenderer,
    media: MediaRenderer,
    columns: usize,
    visible_rows: usize,
    menu: ContextMenu,
    status: Rc<RefCell<String>>,
    quick_view_subscription: SubscriptionId,
}

impl ExplorerApp {
    /// Create the explorer and list the library's top directory
    #[must_use]
    pub fn new(
        library: Rc<FsLibrary>,
        opener: Option<Rc<dyn FileOpener>>,
        config: &ExplorerConfig,
    ) -> Self {
        let theme = Theme::default();
        let quick_view = QuickViewStore::new();
        let status = Rc::new(RefCell::new(String::new()));

        let status_sink = Rc::clone(&status);
        let quick_view_subscription = quick_view.subscribe(move |item: Option<&ExplorerItem>| {
            *status_sink.borrow_mut() = match item {
                Some(item) => format!("Quick view: {}", item.display_name()),
                None => String::new(),
            };
        });

        let services = ExplorerServices {
            library_id: library.id().clone(),
            navigator: library.clone(),
            opener,
            mutations: library.clone(),
            store: Rc::new(ExplorerStore::new(config.clone())),
        };

        let dispatcher = ViewDispatcher::new(
            quick_view,
            Renderers::from_config(config, &theme),
            config,
        )
        .with_theme(theme.clone());

        let menu = ContextMenu::new(vec![
            MenuEntry::new("Open").with_shortcut("enter"),
            MenuEntry::new("Quick view").with_shortcut(dispatcher.quick_view_key()),
            MenuEntry::new("Close menu").with_shortcut("m"),
        ]);

        let mut app = Self {
            library,
            services,
            dispatcher,
            theme: theme.clone(),
            layout: config.layout_mode,
            listing: Vec::new(),
            shown: Rc::from(Vec::new()),
            page_limit: Rc::new(Cell::new(PAGE_SIZE)),
            selection: Rc::new(RefCell::new(Selection::default())),
            cursor: 0,
            scroll: ScrollHandle::new(),
            grid: GridRenderer::new(
                theme.clone(),
                config.grid_item_size,
                config.show_bytes_in_grid_view,
            ),
            media: MediaRenderer::new(theme, config.media_columns),
            columns: 1,
            visible_rows: 1,
            menu,
            status,
            quick_view_subscription,
        };
        app.reload();
        app
    }

    #[must_use]
    pub const fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    #[must_use]
    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &ViewDispatcher {
        &self.dispatcher
    }

    #[cfg(test)]
    const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Items currently handed to the view
    #[must_use]
    pub fn shown(&self) -> &[ExplorerItem] {
        &self.shown
    }

    /// Re-list the current directory and reset cursor, selection and scroll
    pub fn reload(&mut self) {
        match self.library.list() {
            Ok(items) => self.listing = items,
            Err(e) => {
                log::warn!("Failed to list {}: {e}", self.library.current());
                *self.status.borrow_mut() = format!("Cannot list {}: {e}", self.library.current());
                self.listing.clear();
            }
        }
        self.page_limit.set(PAGE_SIZE);
        self.shown = Rc::from(Vec::new());
        self.refresh_page();
        self.cursor = 0;
        self.scroll.scroll_to(0);
        *self.selection.borrow_mut() = Selection::Multiple(Vec::new());
    }

    /// Grow the shown items when the view asked for more
    fn refresh_page(&mut self) {
        let limit = self.page_limit.get().min(self.listing.len());
        if limit != self.shown.len() {
            self.shown = Rc::from(&self.listing[..limit]);
        }
    }

    /// Props for the next render pass
    pub fn props(&mut self) -> ViewProps {
        self.refresh_page();

        let selection = Rc::clone(&self.selection);
        let page_limit = Rc::clone(&self.page_limit);
        let total = self.listing.len();
        let settings = self.services.store.settings();

        let mut props = ViewProps::new(self.layout)
            .with_items(Rc::clone(&self.shown))
            .with_selection(self.selection())
            .on_selected_change(move |s: Selection| *selection.borrow_mut() = s)
            .with_scroll(self.scroll.clone())
            .with_overscan(settings.overscan)
            .with_padding(Padding::Axis { x: PADDING_X, y: 0 })
            .with_context_menu(self.menu.clone());

        if self.shown.len() < total {
            props = props.with_load_more(LoadMore::new(settings.rows_before_load_more, move || {
                page_limit.set(page_limit.get() + PAGE_SIZE);
            }));
        }
        props
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: &KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        if self.dispatcher.is_context_menu_open() {
            self.handle_menu_key(key);
            return AppAction::Continue;
        }

        let props = self.props();
        if self.dispatcher.handle_key(key, &props).is_handled() {
            return AppAction::Continue;
        }

        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc if self.dispatcher.quick_view().is_open() => {
                self.dispatcher.quick_view().clear();
            }
            KeyCode::Left => self.move_cursor(-1, extend),
            KeyCode::Right => self.move_cursor(1, extend),
            KeyCode::Up => self.move_cursor(-self.step(), extend),
            KeyCode::Down => self.move_cursor(self.step(), extend),
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => self.go_up(),
            KeyCode::Char('m') => self.set_menu_open(true),
            KeyCode::Char('r') => {
                let renaming = !self.services.store.is_renaming();
                self.services.store.set_renaming(renaming);
                *self.status.borrow_mut() = if renaming {
                    "Rename mode: opening is paused".to_string()
                } else {
                    String::new()
                };
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = usize::from(c as u8 - b'1');
                self.layout = LayoutMode::ALL[index];
                self.scroll.scroll_to(self.cursor / self.columns_for(self.layout));
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_menu_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.set_menu_open(false),
            KeyCode::Enter => {
                self.set_menu_open(false);
                self.activate();
            }
            KeyCode::Left => self.move_cursor(-1, false),
            KeyCode::Right => self.move_cursor(1, false),
            KeyCode::Up => self.move_cursor(-self.step(), false),
            KeyCode::Down => self.move_cursor(self.step(), false),
            _ => {}
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        let props = self.props();
        let shown = Rc::clone(&self.shown);
        let Some(item) = shown.get(self.cursor) else {
            return;
        };
        let ctx = self.dispatcher.build_context(&props);
        ExplorerEntry::new(item, &ctx, &self.services).set_context_menu_open(open);
    }

    /// Cursor step for up/down in the current layout
    fn step(&self) -> isize {
        isize::try_from(self.columns_for(self.layout)).unwrap_or(1)
    }

    fn columns_for(&self, layout: LayoutMode) -> usize {
        match layout {
            LayoutMode::Grid | LayoutMode::Media => self.columns.max(1),
            LayoutMode::Rows | LayoutMode::Columns => 1,
        }
    }

    fn move_cursor(&mut self, delta: isize, extend: bool) {
        if self.shown.is_empty() {
            return;
        }
        let props = self.props();
        let ctx = self.dispatcher.build_context(&props);
        // The cursor stays on the entry whose menu is open
        if !ctx.selectable {
            return;
        }

        let last = self.shown.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        let entry = ExplorerEntry::new(&self.shown[self.cursor], &ctx, &self.services);
        entry.select(extend);

        // Keep the cursor row on screen
        let row = self.cursor / self.columns_for(self.layout);
        let offset = self.scroll.offset();
        if row < offset {
            self.scroll.scroll_to(row);
        } else if row >= offset + self.visible_rows.max(1) {
            self.scroll.scroll_to(row + 1 - self.visible_rows.max(1));
        }
    }

    fn activate(&mut self) {
        let props = self.props();
        let shown = Rc::clone(&self.shown);
        let Some(item) = shown.get(self.cursor) else {
            return;
        };
        let ctx = self.dispatcher.build_context(&props);
        let activation = ExplorerEntry::new(item, &ctx, &self.services).double_activate();

        match activation {
            Activation::Navigated { path, .. } => {
                log::info!("entering {path}");
                self.library.take_navigation();
                self.reload();
            }
            Activation::Opened { .. } => {
                *self.status.borrow_mut() = format!("Opened {}", item.display_name());
            }
            Activation::Ignored(reason) => {
                *self.status.borrow_mut() = ignore_message(reason).to_string();
            }
        }
    }

    fn go_up(&mut self) {
        if let Some(parent) = self.library.parent() {
            self.library.navigate(ROOT_LOCATION, &parent);
            self.library.take_navigation();
            self.reload();
        }
    }

    /// Draw the explorer into the frame
    pub fn draw(&mut self, frame: &mut Frame) {
        let [view_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        self.measure(view_area);
        let props = self.props();
        let outcome = match self.dispatcher.render(&props, view_area, frame.buffer_mut()) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log::error!("Failed to render {} view: {e}", self.layout);
                None
            }
        };

        if self.dispatcher.is_context_menu_open()
            && let Some(item) = self.shown.get(self.cursor)
        {
            let title = item.display_name();
            frame.render_widget(ContextMenuPopup::new(&self.menu, &title, &self.theme), view_area);
        }

        if let Some(item) = self.dispatcher.quick_view().get() {
            let area = centered_rect(
                view_area.width.saturating_sub(8),
                view_area.height.saturating_sub(4),
                view_area,
            );
            frame.render_widget(QuickViewPanel::new(&item, &self.theme), area);
        }

        frame.render_widget(self.status_line(outcome.as_ref()), status_area);
    }

    /// Record how many columns and rows the current layout shows in `area`
    fn measure(&mut self, area: Rect) {
        let width = area.width.saturating_sub(PADDING_X * 2);
        let (columns, row_height, header) = match self.layout {
            LayoutMode::Grid => (self.grid.columns(width), self.grid.row_height(), 0),
            LayoutMode::Media => {
                let columns = usize::from(self.services.store.settings().media_columns.max(1));
                (columns, self.media.tile_size(width).1, 0)
            }
            LayoutMode::Rows => (1, 1, 1),
            LayoutMode::Columns => (1, 1, 0),
        };
        self.columns = columns;
        self.visible_rows =
            usize::from(area.height.saturating_sub(header) / row_height.max(1)).max(1);
    }

    fn status_line(&self, outcome: Option<&ViewOutcome>) -> Paragraph<'static> {
        let selected = match &*self.selection.borrow() {
            Selection::Single(_) => 1,
            Selection::Multiple(ids) => ids.len(),
        };
        let view = match outcome {
            Some(ViewOutcome::Blank) => "no renderer".to_string(),
            Some(ViewOutcome::Mounted(_)) => {
                format!("{}/{} items", self.shown.len(), self.listing.len())
            }
            Some(_) => "empty".to_string(),
            None => "render failed".to_string(),
        };

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", self.library.current()),
                self.theme.item_style(true),
            ),
            Span::styled(
                format!("│ {} │ {view} │ {selected} selected ", self.layout),
                self.theme.dimmed_style(),
            ),
            Span::raw(self.status()),
        ]))
    }
}

impl Drop for ExplorerApp {
    fn drop(&mut self) {
        self.dispatcher
            .quick_view()
            .unsubscribe(self.quick_view_subscription);
    }
}

const fn ignore_message(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::NoOpener => "This host cannot open files",
        IgnoreReason::NoFilePath => "Nothing to open",
        IgnoreReason::OpenDisabled => "Opening on double-activation is turned off",
        IgnoreReason::Renaming => "Finish renaming first",
    }
}
