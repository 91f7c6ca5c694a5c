//! In-memory library over a directory on disk
//!
//! Lists one directory at a time as `Path` items. Every file is paired with
//! an object record of the same id so that opening it bumps an access time.
//! Navigation requests only record the target; the event loop re-lists.

use crate::items::{
    ExplorerItem, FilePathData, FilePathId, LibraryId, LocationId, ObjectId, PATH_SEPARATOR,
};
use crate::services::{LibraryMutations, Navigator};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Location id of the single location the demo library exposes
pub const ROOT_LOCATION: LocationId = 1;

/// Library backed by a directory tree
#[derive(Debug)]
pub struct FsLibrary {
    id: LibraryId,
    root: PathBuf,
    current: RefCell<String>,
    pending_navigation: RefCell<Option<String>>,
    paths: RefCell<HashMap<FilePathId, PathBuf>>,
    access_times: RefCell<HashMap<ObjectId, DateTime<Utc>>>,
    next_id: Cell<FilePathId>,
}

impl FsLibrary {
    /// Library rooted at `root`, positioned at its top directory
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let id = root
            .file_name()
            .map_or_else(|| "root".to_string(), |name| name.to_string_lossy().into_owned());

        Self {
            id,
            root,
            current: RefCell::new(PATH_SEPARATOR.to_string()),
            pending_navigation: RefCell::new(None),
            paths: RefCell::new(HashMap::new()),
            access_times: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    #[must_use]
    pub fn id(&self) -> &LibraryId {
        &self.id
    }

    /// Materialized path of the directory currently listed
    #[must_use]
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Take the last navigation request, making it the current directory
    pub fn take_navigation(&self) -> Option<String> {
        let target = self.pending_navigation.borrow_mut().take()?;
        self.current.replace(target.clone());
        Some(target)
    }

    /// Navigation path of the parent of the current directory, if any
    #[must_use]
    pub fn parent(&self) -> Option<String> {
        let current = self.current.borrow();
        let trimmed = current.trim_end_matches(PATH_SEPARATOR);
        if trimmed.is_empty() {
            return None;
        }
        let cut = trimmed.rfind(PATH_SEPARATOR)?;
        Some(trimmed[..=cut].to_string())
    }

    /// List the current directory: directories first, then files, by name
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn list(&self) -> io::Result<Vec<ExplorerItem>> {
        let materialized = self.current();
        let dir = self.resolve_materialized(&materialized)?;

        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", entry.path().display());
                    continue;
                }
            };
            entries.push((entry, metadata));
        }
        entries.sort_by(|(a, a_meta), (b, b_meta)| {
            b_meta
                .is_dir()
                .cmp(&a_meta.is_dir())
                .then_with(|| a.file_name().cmp(&b.file_name()))
        });

        let mut paths = self.paths.borrow_mut();
        paths.clear();

        let items = entries
            .into_iter()
            .map(|(entry, metadata)| {
                let id = self.next_id.get();
                self.next_id.set(id + 1);

                let is_dir = metadata.is_dir();
                let path = entry.path();
                let (name, extension) = split_name(&entry.file_name().to_string_lossy(), is_dir);
                paths.insert(id, path);

                ExplorerItem::path(FilePathData {
                    id,
                    is_dir,
                    materialized_path: materialized.clone(),
                    name,
                    extension,
                    location_id: ROOT_LOCATION,
                    object_id: (!is_dir).then_some(id),
                    size_in_bytes: (!is_dir).then_some(metadata.len()),
                })
            })
            .collect();

        log::debug!("listed '{materialized}' in {}", self.root.display());
        Ok(items)
    }

    /// Path on disk of a listed file path
    #[must_use]
    pub fn resolve(&self, file_path_id: FilePathId) -> Option<PathBuf> {
        self.paths.borrow().get(&file_path_id).cloned()
    }

    /// When an object was last opened
    #[must_use]
    pub fn accessed_at(&self, object_id: ObjectId) -> Option<DateTime<Utc>> {
        self.access_times.borrow().get(&object_id).copied()
    }

    /// Directory on disk for a materialized path; never escapes the root
    fn resolve_materialized(&self, materialized: &str) -> io::Result<PathBuf> {
        let relative = Path::new(materialized.trim_start_matches(PATH_SEPARATOR));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path '{materialized}' leaves the library root"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl Navigator for FsLibrary {
    fn navigate(&self, location_id: LocationId, path: &str) {
        if location_id != ROOT_LOCATION {
            log::warn!("Unknown location {location_id}, staying in {}", self.current());
            return;
        }
        self.pending_navigation.replace(Some(path.to_string()));
    }
}

impl LibraryMutations for FsLibrary {
    fn update_access_time(&self, object_id: ObjectId) {
        let now = Utc::now();
        log::debug!("object {object_id} accessed at {}", now.to_rfc3339());
        self.access_times.borrow_mut().insert(object_id, now);
    }
}

/// Split a file name into name and extension; directories and dotfiles keep
/// their whole name
fn split_name(file_name: &str, is_dir: bool) -> (String, Option<String>) {
    if is_dir {
        return (file_name.to_string(), None);
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), Some(ext.to_string())),
        _ => (file_name.to_string(), None),
    }
}
