//! Terminal explorer application
//!
//! Lists a directory as explorer items and drives the view dispatcher in a
//! `ratatui`/`crossterm` event loop.

mod explorer;
mod library;

pub use explorer::{AppAction, ExplorerApp, PAGE_SIZE};
pub use library::{FsLibrary, ROOT_LOCATION};

use crate::ExplorerError;
use crate::config::ExplorerConfig;
use crate::services::{FileOpener, SystemOpener};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

type Result<T> = std::result::Result<T, ExplorerError>;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Setup terminal for TUI
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the explorer on `root` until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to, or if
/// input cannot be read.
pub fn run(root: PathBuf, config: &ExplorerConfig) -> Result<()> {
    let library = Rc::new(FsLibrary::new(root));

    let resolver = Rc::clone(&library);
    let opener: Rc<dyn FileOpener> =
        Rc::new(SystemOpener::new(move |_library_id, file_path_id| {
            resolver.resolve(file_path_id)
        }));

    let mut app = ExplorerApp::new(library, Some(opener), config);
    log::info!("explorer started in {} layout", app.layout());

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    cleanup_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut ExplorerApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && app.handle_key(&key) == AppAction::Quit
        {
            return Ok(());
        }
    }
}
