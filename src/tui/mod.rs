// TUI module for the interactive podcast browser
mod app;
mod events;
mod layout;
mod rendering;

use std::io;

use anyhow::Result;
pub use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::ShowCatalog;
use crate::filters::sync::FilterSync;
use crate::models::show::ShowSummary;

/// Run the interactive browser over an already-fetched show list
pub fn run_interactive(
    catalog: impl ShowCatalog,
    shows: Vec<ShowSummary>,
    filter: FilterSync,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(catalog, shows, filter);

    // Run event loop
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
