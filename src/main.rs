//! Explorer view application entry point
//!
//! Opens a directory in a terminal file explorer with switchable layouts.
//!
//! # Usage
//!
//! ```bash
//! # Explore the current directory
//! explorer-view
//!
//! # Start in the rows layout with debug logs
//! explorer-view ~/Documents --layout rows -v
//! ```
//!
//! # Keys
//!
//! Arrows move, shift+arrows extend the selection, Enter opens or enters,
//! Backspace goes up, `m` opens the context menu, space toggles the quick
//! view, `r` toggles rename mode, `1`-`4` switch layout and `q` quits.
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/explorer-view/config.toml` on Linux) and are created with
//! defaults on first run. Logs go to a file since the terminal is in use.

use explorer_view::{ExplorerError, app, cli::Cli, config::ExplorerConfig};
use simplelog::{Config, WriteLogger};
use std::fs::File;

type Result<T> = std::result::Result<T, ExplorerError>;

fn init_logging(cli: &Cli) {
    let path = cli.log_file();
    match File::create(&path) {
        Ok(log_file) => {
            if WriteLogger::init(cli.log_level(), Config::default(), log_file).is_err() {
                eprintln!("Logger already initialized");
            }
        }
        Err(e) => eprintln!("Cannot write log file {}: {e}", path.display()),
    }
}

fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load_from(path)?,
        None => ExplorerConfig::load()?,
    };
    if let Some(layout) = cli.layout_mode() {
        config.layout_mode = layout;
    }
    Ok(config)
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let config = load_config(&cli)?;
    let root = cli.root().canonicalize()?;
    log::info!("exploring {}", root.display());

    app::run(root, &config)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
