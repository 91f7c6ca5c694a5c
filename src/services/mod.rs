//! External collaborators of the explorer view
//!
//! The view core issues requests to these traits and never waits on them.
//! Every request is a detached task: implementations return immediately,
//! run the work elsewhere, and report failures through their own channel
//! (logging, a status bar, ...). A second request issued before the first
//! completes is simply another independent request.
//!
//! # Core Traits
//!
//! - **`Navigator`** - Route navigation into a directory of a location
//! - **`FileOpener`** - Optional host-platform "open file" capability
//! - **`LibraryMutations`** - Library writes, like bumping an object's access time

mod opener;

pub use opener::SystemOpener;

use crate::config::ExplorerStore;
use crate::items::{FilePathId, LibraryId, LocationId, ObjectId};
use std::fmt;
use std::rc::Rc;

/// Route navigation capability
pub trait Navigator {
    /// Navigate to `location_id` with the `path` query parameter
    fn navigate(&self, location_id: LocationId, path: &str);
}

/// Host-platform file opening capability
///
/// Not every host can open files; the explorer treats a missing opener as
/// "double-activation does nothing" for files.
pub trait FileOpener {
    /// Open a file path of a library with the host's default handler.
    /// Must not block the caller.
    fn open_file_path(&self, library_id: &LibraryId, file_path_id: FilePathId);
}

/// Library mutation capability
pub trait LibraryMutations {
    /// Record that an object was just accessed. Must not block the caller.
    fn update_access_time(&self, object_id: ObjectId);
}

/// Bundle of collaborators an entry needs to handle activation
#[derive(Clone)]
pub struct ExplorerServices {
    /// Library the shown items belong to
    pub library_id: LibraryId,
    pub navigator: Rc<dyn Navigator>,
    pub opener: Option<Rc<dyn FileOpener>>,
    pub mutations: Rc<dyn LibraryMutations>,
    /// Settings and transient flags (open-on-double-click, renaming)
    pub store: Rc<ExplorerStore>,
}

impl fmt::Debug for ExplorerServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerServices")
            .field("library_id", &self.library_id)
            .field("has_opener", &self.opener.is_some())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
