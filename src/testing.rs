//! Testing utilities for explorer-view
//!
//! Item builders, a bare view context, recording collaborators that share
//! one ordered event log, and a renderer that records what it was mounted
//! with instead of drawing.
//!
//! Only available when compiled with `cfg(test)`.

use crate::config::ExplorerStore;
use crate::items::{
    ExplorerItem, FilePathData, FilePathId, ItemId, LibraryId, LocationId, ObjectId, Selection,
};
use crate::services::{ExplorerServices, FileOpener, LibraryMutations, Navigator};
use crate::ui::ItemRenderer;
use crate::view::{ContextScope, Renderers, Result, ScrollHandle, ViewContext};
use ratatui::{buffer::Buffer, layout::Rect};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Library id used by [`RecordingServices`]
pub const TEST_LIBRARY: &str = "test-library";

/// Build a path item; a dotted `name` is split into name and extension
///
/// The item id doubles as the file path id, and the location is always 1.
#[must_use]
pub fn path_item(id: ItemId, materialized_path: &str, name: &str, is_dir: bool) -> ExplorerItem {
    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) if !is_dir && !stem.is_empty() => (stem, Some(ext.to_string())),
        _ => (name, None),
    };

    ExplorerItem::path(FilePathData {
        id,
        is_dir,
        materialized_path: materialized_path.to_string(),
        name: stem.to_string(),
        extension,
        location_id: 1,
        object_id: None,
        size_in_bytes: None,
    })
}

/// A selectable, multi-select context with no-op callbacks
#[must_use]
pub fn bare_context(items: Option<Vec<ExplorerItem>>) -> ViewContext {
    ViewContext {
        items: items.map(Rc::from),
        selected: Selection::default(),
        on_selected_change: Rc::new(|_: Selection| {}),
        scroll: ScrollHandle::new(),
        overscan: None,
        load_more: None,
        top: None,
        padding: None,
        multi_select: true,
        selectable: true,
        context_menu: None,
        report_context_menu_open: Rc::new(|_: bool| {}),
    }
}

/// Rows of a buffer as plain strings
#[must_use]
pub fn buffer_text(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Create a test file with the given content, creating parent directories
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_test_file(path: impl AsRef<Path>, content: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

/// Request issued to a recording collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(LocationId, String),
    Open(LibraryId, FilePathId),
    UpdateAccessTime(ObjectId),
}

type EventLog = Rc<RefCell<Vec<Event>>>;

struct RecordingNavigator(EventLog);

impl Navigator for RecordingNavigator {
    fn navigate(&self, location_id: LocationId, path: &str) {
        self.0
            .borrow_mut()
            .push(Event::Navigate(location_id, path.to_string()));
    }
}

struct RecordingOpener(EventLog);

impl FileOpener for RecordingOpener {
    fn open_file_path(&self, library_id: &LibraryId, file_path_id: FilePathId) {
        self.0
            .borrow_mut()
            .push(Event::Open(library_id.clone(), file_path_id));
    }
}

struct RecordingMutations(EventLog);

impl LibraryMutations for RecordingMutations {
    fn update_access_time(&self, object_id: ObjectId) {
        self.0
            .borrow_mut()
            .push(Event::UpdateAccessTime(object_id));
    }
}

/// Collaborators that record every request in issue order
#[derive(Default)]
pub struct RecordingServices {
    log: EventLog,
}

impl RecordingServices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Services wired to this recorder, with an opener and default settings
    #[must_use]
    pub fn services(&self) -> ExplorerServices {
        ExplorerServices {
            library_id: TEST_LIBRARY.to_string(),
            navigator: Rc::new(RecordingNavigator(Rc::clone(&self.log))),
            opener: Some(Rc::new(RecordingOpener(Rc::clone(&self.log)))),
            mutations: Rc::new(RecordingMutations(Rc::clone(&self.log))),
            store: Rc::new(ExplorerStore::default()),
        }
    }

    /// Requests issued so far
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }
}

/// What a [`RecordingRenderer`] was mounted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    pub layout: &'static str,
    pub item_count: Option<usize>,
    pub selectable: bool,
    pub multi_select: bool,
}

/// Renderer that records its mounts and draws nothing
pub struct RecordingRenderer {
    layout: &'static str,
    calls: Rc<RefCell<Vec<RenderCall>>>,
}

impl ItemRenderer for RecordingRenderer {
    fn render(&self, scope: ContextScope<'_>, _area: Rect, _buf: &mut Buffer) -> Result<()> {
        let ctx = scope.get()?;
        self.calls.borrow_mut().push(RenderCall {
            layout: self.layout,
            item_count: ctx.items.as_ref().map(|items| items.len()),
            selectable: ctx.selectable,
            multi_select: ctx.multi_select,
        });
        Ok(())
    }
}

/// Recording renderers for every layout, sharing one call log
#[must_use]
pub fn recording_renderers() -> (Renderers, Rc<RefCell<Vec<RenderCall>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let renderer = |layout| {
        Box::new(RecordingRenderer {
            layout,
            calls: Rc::clone(&calls),
        }) as Box<dyn ItemRenderer>
    };
    let renderers = Renderers {
        grid: renderer("grid"),
        rows: renderer("rows"),
        media: renderer("media"),
    };
    (renderers, calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;
    use tempfile::TempDir;

    #[test]
    fn test_path_item_splits_extension() {
        let item = path_item(1, "/", "notes.md", false);
        let ItemKind::Path(path) = item.kind else {
            panic!("expected a path item");
        };
        assert_eq!(path.name, "notes");
        assert_eq!(path.extension.as_deref(), Some("md"));
    }

    #[test]
    fn test_path_item_keeps_dotted_directories_and_dotfiles() {
        let ItemKind::Path(dir) = path_item(1, "/", "v1.2", true).kind else {
            panic!("expected a path item");
        };
        assert_eq!(dir.name, "v1.2");

        let ItemKind::Path(dotfile) = path_item(2, "/", ".bashrc", false).kind else {
            panic!("expected a path item");
        };
        assert_eq!(dotfile.name, ".bashrc");
        assert!(dotfile.extension.is_none());
    }

    #[test]
    fn test_recording_services_share_one_log() {
        let recorder = RecordingServices::new();
        let services = recorder.services();

        services.mutations.update_access_time(3);
        services.navigator.navigate(1, "/a/");

        assert_eq!(
            recorder.events(),
            vec![Event::UpdateAccessTime(3), Event::Navigate(1, "/a/".into())]
        );
    }

    #[test]
    fn test_create_test_file_makes_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/file.txt");

        create_test_file(&path, b"content").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"content");
    }
}
