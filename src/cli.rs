//! Command-line interface definitions and parsing
//!
//! The binary takes the directory to explore plus a few overrides:
//!
//! ```text
//! explorer-view [DIR] [--layout grid|media|columns|rows] [--config FILE] [--log-file FILE] [-v]
//! ```

use crate::view::LayoutMode;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log file used when none is given
pub const DEFAULT_LOG_FILE: &str = "explorer-view.log";

/// Layout selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Icon grid
    Grid,
    /// Square media tiles
    Media,
    /// Miller columns (renders nothing yet)
    Columns,
    /// Detail rows
    #[value(alias = "list")]
    Rows,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => Self::Grid,
            LayoutArg::Media => Self::Media,
            LayoutArg::Columns => Self::Columns,
            LayoutArg::Rows => Self::Rows,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "explorer-view")]
#[command(about = "Browse a directory with grid, rows and media layouts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to explore (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Layout to start with (overrides config)
    #[arg(short = 'l', long = "layout", value_enum)]
    pub layout: Option<LayoutArg>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Directory to explore
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Layout override, if any
    #[must_use]
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout.map(LayoutMode::from)
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
