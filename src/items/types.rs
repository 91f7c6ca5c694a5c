//! Explorer item model
//!
//! Items are owned by whoever supplies the collection to the view; the view
//! core only ever reads them.

use serde::{Deserialize, Serialize};

/// Identity shared by every item kind (file path id or object id)
pub type ItemId = i32;

/// Id of an indexed location
pub type LocationId = i32;

/// Id of a file path record
pub type FilePathId = i32;

/// Id of a persisted object
pub type ObjectId = i32;

/// Id of the library that owns the items being shown
pub type LibraryId = String;

/// Separator appended to directory navigation paths
pub const PATH_SEPARATOR: char = '/';

/// One entry in the explorer: a filesystem path or an object record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerItem {
    /// Stable identity used by selection
    pub id: ItemId,

    /// Kind-specific data
    pub kind: ItemKind,
}

/// Kind-specific item data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item")]
pub enum ItemKind {
    /// A file path record inside a location
    Path(FilePathData),

    /// An object record, possibly backed by several file paths
    Object(ObjectData),
}

/// File path record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePathData {
    pub id: FilePathId,
    pub is_dir: bool,
    /// Parent directory path, with leading and trailing separators (`/docs/`)
    pub materialized_path: String,
    pub name: String,
    #[serde(default)]
    pub extension: Option<String>,
    pub location_id: LocationId,
    #[serde(default)]
    pub object_id: Option<ObjectId>,
    #[serde(default)]
    pub size_in_bytes: Option<u64>,
}

/// Object record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectData {
    pub id: ObjectId,
    /// Human-readable kind (e.g. "Image", "Document")
    #[serde(default)]
    pub kind_label: Option<String>,
    /// File paths backing this object, in database order
    #[serde(default)]
    pub file_paths: Vec<FilePathData>,
}

impl ExplorerItem {
    /// Create a path item; its identity is the file path id
    #[must_use]
    pub fn path(data: FilePathData) -> Self {
        Self {
            id: data.id,
            kind: ItemKind::Path(data),
        }
    }

    /// Create an object item; its identity is the object id
    #[must_use]
    pub fn object(data: ObjectData) -> Self {
        Self {
            id: data.id,
            kind: ItemKind::Object(data),
        }
    }

    /// The file path record that should be opened for this item
    ///
    /// Objects resolve to their first file path; an object without any file
    /// path has nothing to open.
    #[must_use]
    pub fn file_path(&self) -> Option<&FilePathData> {
        match &self.kind {
            ItemKind::Path(path) => Some(path),
            ItemKind::Object(object) => object.file_paths.first(),
        }
    }

    /// Id of the persisted object this item refers to, if any
    #[must_use]
    pub const fn object_id(&self) -> Option<ObjectId> {
        match &self.kind {
            ItemKind::Path(path) => path.object_id,
            ItemKind::Object(object) => Some(object.id),
        }
    }

    /// The directory record when this item is a directory path
    #[must_use]
    pub const fn directory(&self) -> Option<&FilePathData> {
        match &self.kind {
            ItemKind::Path(path) if path.is_dir => Some(path),
            _ => None,
        }
    }

    /// Name shown to the user
    #[must_use]
    pub fn display_name(&self) -> String {
        self.file_path()
            .map_or_else(|| format!("object #{}", self.id), FilePathData::full_name)
    }
}

impl FilePathData {
    /// Name including the extension, when there is one
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.extension.as_deref() {
            Some(ext) if !ext.is_empty() && !self.is_dir => format!("{}.{ext}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Path parameter used to navigate into this directory
    ///
    /// Concatenates the parent materialized path, the name and a trailing
    /// separator, so `/docs/` + `reports` becomes `/docs/reports/`.
    #[must_use]
    pub fn navigation_path(&self) -> String {
        let mut path =
            String::with_capacity(self.materialized_path.len() + self.name.len() + 1);
        path.push_str(&self.materialized_path);
        path.push_str(&self.name);
        path.push(PATH_SEPARATOR);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: FilePathId, name: &str, is_dir: bool) -> FilePathData {
        FilePathData {
            id,
            is_dir,
            materialized_path: "/docs/".into(),
            name: name.into(),
            extension: None,
            location_id: 7,
            object_id: None,
            size_in_bytes: None,
        }
    }

    #[test]
    fn test_navigation_path_appends_name_and_separator() {
        assert_eq!(file(1, "reports", true).navigation_path(), "/docs/reports/");
    }

    #[test]
    fn test_navigation_path_from_root() {
        let mut dir = file(1, "home", true);
        dir.materialized_path = "/".into();
        assert_eq!(dir.navigation_path(), "/home/");
    }

    #[test]
    fn test_object_resolves_first_file_path() {
        let item = ExplorerItem::object(ObjectData {
            id: 40,
            kind_label: Some("Image".into()),
            file_paths: vec![file(2, "a", false), file(3, "b", false)],
        });

        assert_eq!(item.id, 40);
        assert_eq!(item.file_path().map(|p| p.id), Some(2));
        assert_eq!(item.object_id(), Some(40));
        assert!(item.directory().is_none());
    }

    #[test]
    fn test_object_without_file_paths_has_nothing_to_open() {
        let item = ExplorerItem::object(ObjectData {
            id: 41,
            kind_label: None,
            file_paths: vec![],
        });

        assert!(item.file_path().is_none());
        assert_eq!(item.display_name(), "object #41");
    }

    #[test]
    fn test_path_object_id_is_optional() {
        let mut data = file(5, "notes", false);
        assert_eq!(ExplorerItem::path(data.clone()).object_id(), None);

        data.object_id = Some(9);
        assert_eq!(ExplorerItem::path(data).object_id(), Some(9));
    }

    #[test]
    fn test_directory_only_for_dir_paths() {
        assert!(ExplorerItem::path(file(1, "reports", true)).directory().is_some());
        assert!(ExplorerItem::path(file(2, "notes", false)).directory().is_none());
    }

    #[test]
    fn test_full_name_with_extension() {
        let mut data = file(1, "notes", false);
        data.extension = Some("md".into());
        assert_eq!(data.full_name(), "notes.md");

        data.is_dir = true;
        assert_eq!(data.full_name(), "notes");
    }
}
