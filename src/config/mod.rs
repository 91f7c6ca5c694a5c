//! Configuration module for explorer-view
//!
//! Manages the explorer's persisted settings (layout, double-click behaviour,
//! quick view key, renderer knobs) and the runtime store that adds transient
//! interaction flags on top of them.
//! Configuration is stored in the user's config directory.

use crate::view::LayoutMode;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, Ref, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted explorer settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Layout the explorer opens with
    pub layout_mode: LayoutMode,

    /// Open files with the host platform when an entry is double-activated
    pub open_on_double_click: bool,

    /// Key that toggles the quick view overlay
    pub quick_view_key: String,

    /// Width of a grid cell, in terminal columns
    pub grid_item_size: u16,

    /// Number of tiles per row in the media layout
    pub media_columns: u16,

    /// Show file sizes under grid items
    pub show_bytes_in_grid_view: bool,

    /// Rows rendered beyond the visible window
    pub overscan: usize,

    /// Rows remaining before the load-more callback fires
    pub rows_before_load_more: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::Grid,
            open_on_double_click: true,
            quick_view_key: default_quick_view_key(),
            grid_item_size: 18,
            media_columns: 6,
            show_bytes_in_grid_view: true,
            overscan: 5,
            rows_before_load_more: 10,
        }
    }
}

fn default_quick_view_key() -> String {
    "space".to_string()
}

impl ExplorerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("explorer-view").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, writing defaults", path.display());
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

/// Runtime accessor over the explorer configuration
///
/// Holds the loaded settings plus state that only lives while the explorer is
/// mounted, like whether an entry is currently being renamed.
#[derive(Debug, Default)]
pub struct ExplorerStore {
    settings: RefCell<ExplorerConfig>,
    renaming: Cell<bool>,
}

impl ExplorerStore {
    /// Create a store over loaded settings
    #[must_use]
    pub const fn new(settings: ExplorerConfig) -> Self {
        Self {
            settings: RefCell::new(settings),
            renaming: Cell::new(false),
        }
    }

    /// Current settings
    #[must_use]
    pub fn settings(&self) -> Ref<'_, ExplorerConfig> {
        self.settings.borrow()
    }

    /// Apply a change to the settings
    pub fn update(&self, change: impl FnOnce(&mut ExplorerConfig)) {
        change(&mut self.settings.borrow_mut());
    }

    /// Whether double-activating a file opens it
    #[must_use]
    pub fn open_on_double_click(&self) -> bool {
        self.settings.borrow().open_on_double_click
    }

    /// Whether a rename is in progress somewhere in the explorer
    #[must_use]
    pub fn is_renaming(&self) -> bool {
        self.renaming.get()
    }

    /// Mark a rename as started or finished
    pub fn set_renaming(&self, renaming: bool) {
        log::debug!("rename in progress: {renaming}");
        self.renaming.set(renaming);
    }
}
