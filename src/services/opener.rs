//! Host-platform file opener
//!
//! Resolves a file path id to a path on disk and hands it to the system's
//! default application handler without waiting for it.

use super::FileOpener;
use crate::items::{FilePathId, LibraryId};
use std::io;
use std::path::{Path, PathBuf};

type Resolver = Box<dyn Fn(&LibraryId, FilePathId) -> Option<PathBuf>>;
type Launcher = Box<dyn Fn(&Path) -> io::Result<()>>;

/// Opens files with the system's default application (xdg-open/open/start)
pub struct SystemOpener {
    resolve: Resolver,
    launch: Launcher,
}

impl SystemOpener {
    /// Create an opener that looks up paths with `resolve`
    #[must_use]
    pub fn new(resolve: impl Fn(&LibraryId, FilePathId) -> Option<PathBuf> + 'static) -> Self {
        Self {
            resolve: Box::new(resolve),
            launch: Box::new(|path: &Path| open::that_detached(path)),
        }
    }

    /// Replace the launcher used to open resolved paths
    ///
    /// The launcher must return as soon as the open request is issued.
    #[must_use]
    pub fn with_launcher(mut self, launch: impl Fn(&Path) -> io::Result<()> + 'static) -> Self {
        self.launch = Box::new(launch);
        self
    }
}

impl FileOpener for SystemOpener {
    fn open_file_path(&self, library_id: &LibraryId, file_path_id: FilePathId) {
        let Some(path) = (self.resolve)(library_id, file_path_id) else {
            log::warn!("No path on disk for file path {file_path_id} in library {library_id}");
            return;
        };
        log::debug!("Opening {} with the default application", path.display());
        if let Err(e) = (self.launch)(&path) {
            log::warn!("Failed to open {}: {e}", path.display());
        }
    }
}
