//! Item and selection model shared by the view and its renderers
//!
//! - `types`: the explorer item sum type and its records
//! - `selection`: single vs. multi selection

mod selection;
mod types;

pub use selection::Selection;
pub use types::{
    ExplorerItem, FilePathData, FilePathId, ItemId, ItemKind, LibraryId, LocationId, ObjectData,
    ObjectId, PATH_SEPARATOR,
};
