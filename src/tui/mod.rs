//! Interactive terminal UI
//!
//! A tick-driven ratatui front end: search bar on top, result cards below,
//! status bar with key hints. All state lives in [`app::App`] and is only
//! mutated by its own event handlers.

pub mod app;
pub mod colors;
pub mod effects;
pub mod results;
pub mod search;
pub mod ui;

use crate::api::SearchClient;

/// Run the interactive UI until the user quits.
pub fn run(client: SearchClient, max_results: usize) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    let result = app::App::new(client, max_results).run(&mut terminal);
    ratatui::restore();
    result
}
