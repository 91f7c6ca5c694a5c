//! Entry activation wrapper
//!
//! Per-item behaviour shared by every renderer: the double-activation
//! protocol (navigate into directories, open files with the host platform)
//! and the hookup between an entry's context menu and the view-wide
//! selectable flag.

use super::context::{ContextMenu, ViewContext};
use crate::items::{ExplorerItem, FilePathId, LocationId, ObjectId, Selection};
use crate::services::ExplorerServices;

/// Result of a double-activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A navigation request was issued for a directory
    Navigated { location_id: LocationId, path: String },
    /// An open request was issued, preceded by an access-time update when
    /// the item references an object
    Opened {
        file_path_id: FilePathId,
        touched_object: Option<ObjectId>,
    },
    /// Nothing was issued
    Ignored(IgnoreReason),
}

/// First open gate that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The host cannot open files
    NoOpener,
    /// The item has no file path record to open
    NoFilePath,
    /// Opening on double-activation is turned off
    OpenDisabled,
    /// An entry is being renamed
    Renaming,
}

/// One rendered entry of an explorer view
#[derive(Debug, Clone, Copy)]
pub struct ExplorerEntry<'a> {
    item: &'a ExplorerItem,
    ctx: &'a ViewContext,
    services: &'a ExplorerServices,
}

impl<'a> ExplorerEntry<'a> {
    #[must_use]
    pub const fn new(
        item: &'a ExplorerItem,
        ctx: &'a ViewContext,
        services: &'a ExplorerServices,
    ) -> Self {
        Self {
            item,
            ctx,
            services,
        }
    }

    #[must_use]
    pub const fn item(&self) -> &'a ExplorerItem {
        self.item
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.ctx.is_selected(self.item)
    }

    /// Handle a double-activation of the entry
    ///
    /// Directories navigate. Files open only when every gate passes;
    /// otherwise the gesture does nothing and reports which gate failed.
    /// Requests are detached: this returns as soon as they are issued.
    pub fn double_activate(&self) -> Activation {
        if let Some(dir) = self.item.directory() {
            let path = dir.navigation_path();
            log::debug!("navigating to location {} at '{path}'", dir.location_id);
            self.services.navigator.navigate(dir.location_id, &path);
            return Activation::Navigated {
                location_id: dir.location_id,
                path,
            };
        }

        let Some(opener) = self.services.opener.as_ref() else {
            return Activation::Ignored(IgnoreReason::NoOpener);
        };
        let Some(file_path) = self.item.file_path() else {
            return Activation::Ignored(IgnoreReason::NoFilePath);
        };
        if !self.services.store.open_on_double_click() {
            return Activation::Ignored(IgnoreReason::OpenDisabled);
        }
        if self.services.store.is_renaming() {
            return Activation::Ignored(IgnoreReason::Renaming);
        }

        // Access time is issued before the open request
        let touched_object = self.item.object_id();
        if let Some(object_id) = touched_object {
            self.services.mutations.update_access_time(object_id);
        }

        log::debug!(
            "opening file path {} of library {}",
            file_path.id,
            self.services.library_id
        );
        opener.open_file_path(&self.services.library_id, file_path.id);

        Activation::Opened {
            file_path_id: file_path.id,
            touched_object,
        }
    }

    /// Select this entry; with `extend` on a multi-selection view the entry
    /// is added to the current selection instead of replacing it.
    ///
    /// Returns whether the change was forwarded (it is not while a context
    /// menu is open).
    pub fn select(&self, extend: bool) -> bool {
        let id = self.item.id;
        let selection = match &self.ctx.selected {
            Selection::Multiple(ids) if extend => {
                let mut ids = ids.clone();
                if !ids.contains(&id) {
                    ids.push(id);
                }
                Selection::Multiple(ids)
            }
            Selection::Multiple(_) => Selection::Multiple(vec![id]),
            Selection::Single(_) => Selection::Single(id),
        };
        self.ctx.select(selection)
    }

    /// Menu content for this entry, if the view supplies any
    #[must_use]
    pub fn context_menu(&self) -> Option<&'a ContextMenu> {
        self.ctx.context_menu.as_ref()
    }

    /// The menu trigger is disabled when the view supplies no menu
    #[must_use]
    pub const fn context_menu_enabled(&self) -> bool {
        self.ctx.context_menu.is_some()
    }

    /// Report the entry's menu opening or closing to the view
    ///
    /// Returns whether the report was made.
    pub fn set_context_menu_open(&self, open: bool) -> bool {
        if !self.context_menu_enabled() {
            return false;
        }
        (self.ctx.report_context_menu_open)(open);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExplorerConfig, ExplorerStore};
    use crate::items::{FilePathData, ObjectData};
    use crate::testing::{Event, RecordingServices, bare_context, path_item};
    use crate::view::{MenuEntry, ViewContext};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn file_with_object(object_id: Option<ObjectId>) -> ExplorerItem {
        let mut item = path_item(11, "/docs/", "notes.md", false);
        if let crate::items::ItemKind::Path(path) = &mut item.kind {
            path.object_id = object_id;
        }
        item
    }

    #[test]
    fn test_directory_navigates() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        let ctx = bare_context(None);
        let item = ExplorerItem::path(FilePathData {
            id: 5,
            is_dir: true,
            materialized_path: "/docs/".into(),
            name: "reports".into(),
            extension: None,
            location_id: 7,
            object_id: Some(3),
            size_in_bytes: None,
        });

        let activation = ExplorerEntry::new(&item, &ctx, &services).double_activate();

        assert_eq!(
            activation,
            Activation::Navigated {
                location_id: 7,
                path: "/docs/reports/".into()
            }
        );
        assert_eq!(
            recorder.events(),
            vec![Event::Navigate(7, "/docs/reports/".into())]
        );
    }

    #[test]
    fn test_file_touches_object_before_opening() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        let ctx = bare_context(None);
        let item = file_with_object(Some(42));

        let activation = ExplorerEntry::new(&item, &ctx, &services).double_activate();

        assert_eq!(
            activation,
            Activation::Opened {
                file_path_id: 11,
                touched_object: Some(42)
            }
        );
        assert_eq!(
            recorder.events(),
            vec![
                Event::UpdateAccessTime(42),
                Event::Open(services.library_id.clone(), 11),
            ]
        );
    }

    #[test]
    fn test_file_without_object_only_opens() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        let ctx = bare_context(None);
        let item = file_with_object(None);

        ExplorerEntry::new(&item, &ctx, &services).double_activate();

        assert_eq!(
            recorder.events(),
            vec![Event::Open(services.library_id.clone(), 11)]
        );
    }

    #[test]
    fn test_object_opens_first_file_path() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        let ctx = bare_context(None);
        let first = match path_item(20, "/", "a.jpg", false).kind {
            crate::items::ItemKind::Path(path) => path,
            crate::items::ItemKind::Object(_) => unreachable!(),
        };
        let item = ExplorerItem::object(ObjectData {
            id: 9,
            kind_label: Some("Image".into()),
            file_paths: vec![first],
        });

        ExplorerEntry::new(&item, &ctx, &services).double_activate();

        assert_eq!(
            recorder.events(),
            vec![
                Event::UpdateAccessTime(9),
                Event::Open(services.library_id.clone(), 20),
            ]
        );
    }

    #[test]
    fn test_open_disabled_issues_nothing() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        services.store.update(|config| config.open_on_double_click = false);
        let ctx = bare_context(None);
        let item = file_with_object(Some(42));

        let activation = ExplorerEntry::new(&item, &ctx, &services).double_activate();

        assert_eq!(activation, Activation::Ignored(IgnoreReason::OpenDisabled));
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_gates_checked_in_order() {
        let recorder = RecordingServices::new();
        let mut services = recorder.services();
        let ctx = bare_context(None);
        let item = file_with_object(Some(42));

        services.store.set_renaming(true);
        assert_eq!(
            ExplorerEntry::new(&item, &ctx, &services).double_activate(),
            Activation::Ignored(IgnoreReason::Renaming)
        );

        services.store = Rc::new(ExplorerStore::new(ExplorerConfig {
            open_on_double_click: false,
            ..ExplorerConfig::default()
        }));
        services.store.set_renaming(true);
        assert_eq!(
            ExplorerEntry::new(&item, &ctx, &services).double_activate(),
            Activation::Ignored(IgnoreReason::OpenDisabled)
        );

        let orphan = ExplorerItem::object(ObjectData {
            id: 50,
            kind_label: None,
            file_paths: vec![],
        });
        assert_eq!(
            ExplorerEntry::new(&orphan, &ctx, &services).double_activate(),
            Activation::Ignored(IgnoreReason::NoFilePath)
        );

        services.opener = None;
        assert_eq!(
            ExplorerEntry::new(&orphan, &ctx, &services).double_activate(),
            Activation::Ignored(IgnoreReason::NoOpener)
        );
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_repeated_activation_issues_independent_requests() {
        let recorder = RecordingServices::new();
        let services = recorder.services();
        let ctx = bare_context(None);
        let item = file_with_object(Some(1));
        let entry = ExplorerEntry::new(&item, &ctx, &services);

        entry.double_activate();
        entry.double_activate();

        assert_eq!(recorder.events().len(), 4);
    }

    #[test]
    fn test_context_menu_disabled_without_content() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let mut ctx = bare_context(None);
        ctx.report_context_menu_open = Rc::new(move |open: bool| sink.borrow_mut().push(open));
        let services = RecordingServices::new().services();
        let item = path_item(1, "/", "a.txt", false);

        let entry = ExplorerEntry::new(&item, &ctx, &services);
        assert!(!entry.context_menu_enabled());
        assert!(!entry.set_context_menu_open(true));
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_context_menu_reports_open_state() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let mut ctx = bare_context(None);
        ctx.context_menu = Some(ContextMenu::new(vec![MenuEntry::new("Open")]));
        ctx.report_context_menu_open = Rc::new(move |open: bool| sink.borrow_mut().push(open));
        let services = RecordingServices::new().services();
        let item = path_item(1, "/", "a.txt", false);

        let entry = ExplorerEntry::new(&item, &ctx, &services);
        assert!(entry.set_context_menu_open(true));
        assert!(entry.set_context_menu_open(false));
        assert_eq!(*reports.borrow(), vec![true, false]);
    }

    fn selecting_context(
        selected: Selection,
        selectable: bool,
    ) -> (ViewContext, Rc<Cell<Option<Selection>>>) {
        let last = Rc::new(Cell::new(None));
        let sink = last.clone();
        let mut ctx = bare_context(None);
        ctx.selected = selected;
        ctx.selectable = selectable;
        ctx.on_selected_change = Rc::new(move |s: Selection| sink.set(Some(s)));
        (ctx, last)
    }

    #[test]
    fn test_select_extends_multi_selection() {
        let services = RecordingServices::new().services();
        let item = path_item(4, "/", "d.txt", false);

        let (ctx, last) = selecting_context(Selection::Multiple(vec![1]), true);
        assert!(ExplorerEntry::new(&item, &ctx, &services).select(true));
        assert_eq!(last.take(), Some(Selection::Multiple(vec![1, 4])));

        assert!(ExplorerEntry::new(&item, &ctx, &services).select(false));
        assert_eq!(last.take(), Some(Selection::Multiple(vec![4])));

        let (ctx, last) = selecting_context(Selection::Single(1), true);
        assert!(ExplorerEntry::new(&item, &ctx, &services).select(true));
        assert_eq!(last.take(), Some(Selection::Single(4)));
    }

    #[test]
    fn test_select_blocked_while_menu_open() {
        let services = RecordingServices::new().services();
        let item = path_item(4, "/", "d.txt", false);
        let (ctx, last) = selecting_context(Selection::Multiple(vec![]), false);

        assert!(!ExplorerEntry::new(&item, &ctx, &services).select(false));
        assert_eq!(last.take(), None);
    }
}
