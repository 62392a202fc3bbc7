use crate::api::{SearchClient, SearchResult};
use crate::error::{DocSeekError, SEARCH_FAILED_MESSAGE};
use crate::logging;
use crate::tui::effects::Effects;
use crate::tui::results::{duplicate_ids, ListState};
use crate::tui::search::SearchState;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Messages from the request worker thread
pub enum BgMessage {
    SearchComplete(u64, Vec<SearchResult>),
    SearchFailed(u64, DocSeekError),
}

/// The mutually exclusive view states. `Idle` only ever holds before the
/// first submission; afterwards the page cycles Loading → Loaded/Failed.
#[derive(Debug, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Loaded(Vec<SearchResult>),
    Failed(String),
}

impl SearchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchPhase::Loading)
    }

    pub fn results(&self) -> Option<&[SearchResult]> {
        match self {
            SearchPhase::Loaded(results) => Some(results),
            _ => None,
        }
    }

    pub fn result_count(&self) -> usize {
        self.results().map_or(0, |results| results.len())
    }
}

pub struct App {
    client: SearchClient,
    max_results: usize,

    // Sub-states
    pub search: SearchState,
    pub list: ListState,

    // Interaction state machine
    pub phase: SearchPhase,
    pub search_performed: bool,

    pub effects: Effects,
    pub status_message: String,

    // Stamp for the current request; stale completions are discarded
    request_seq: u64,

    // Channel
    bg_receiver: Receiver<BgMessage>,
    bg_sender: Sender<BgMessage>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(client: SearchClient, max_results: usize) -> Self {
        let (bg_sender, bg_receiver) = channel();

        Self {
            client,
            max_results,
            search: SearchState::default(),
            list: ListState::default(),
            phase: SearchPhase::Idle,
            search_performed: false,
            effects: Effects::default(),
            status_message: "Ready".to_string(),
            request_seq: 0,
            bg_receiver,
            bg_sender,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend<Error = std::io::Error>>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                self.effects.tick();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Submit the current query. A no-op while a request is in flight
    /// (the disabled-submit rule) and for blank queries.
    pub fn submit_search(&mut self) {
        if self.phase.is_loading() {
            return;
        }
        let Some(query) = self.search.submission().map(str::to_string) else {
            return;
        };

        let seq = self.begin_search(&query);
        let client = self.client.clone();
        let tx = self.bg_sender.clone();
        let max_results = self.max_results;

        thread::spawn(move || match client.search(&query, max_results) {
            Ok(results) => {
                let _ = tx.send(BgMessage::SearchComplete(seq, results));
            }
            Err(error) => {
                let _ = tx.send(BgMessage::SearchFailed(seq, error));
            }
        });
    }

    /// Enter Loading: clear the previous outcome, mark the page as having
    /// searched, and stamp the request. Returns the stamp the worker must
    /// echo back.
    fn begin_search(&mut self, query: &str) -> u64 {
        self.request_seq += 1;
        self.phase = SearchPhase::Loading;
        self.search_performed = true;
        self.list.reset(0);
        self.status_message = format!("Searching for '{}'...", query);
        logging::info(
            "APP",
            &format!("search #{} submitted: '{}'", self.request_seq, query),
        );
        self.request_seq
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            self.apply_message(msg);
        }
    }

    fn apply_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::SearchComplete(seq, results) => {
                if seq != self.request_seq {
                    logging::debug("APP", &format!("discarding stale completion #{}", seq));
                    return;
                }

                let duplicates = duplicate_ids(&results);
                if !duplicates.is_empty() {
                    logging::warn(
                        "APP",
                        &format!(
                            "backend returned duplicate result ids: {}",
                            duplicates.join(", ")
                        ),
                    );
                }

                self.list.reset(results.len());
                self.status_message = match results.len() {
                    0 => "No matches".to_string(),
                    n => format!("{} results", n),
                };
                self.effects.begin_reveal();
                self.phase = SearchPhase::Loaded(results);
            }
            BgMessage::SearchFailed(seq, error) => {
                if seq != self.request_seq {
                    logging::debug("APP", &format!("discarding stale failure #{}", seq));
                    return;
                }

                // The real status/detail stays in the log; the user sees
                // one fixed message for every request failure.
                logging::error("APP", &format!("search #{} failed: {}", seq, error));
                self.list.reset(0);
                self.effects.clear_reveal();
                self.status_message = "Search failed".to_string();
                self.phase = SearchPhase::Failed(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Char(c) => {
                self.search.query.insert(self.search.cursor_pos, c);
                self.search.cursor_pos += c.len_utf8();
            }
            KeyCode::Backspace => {
                if self.search.cursor_pos > 0 {
                    let prev = self.search.prev_boundary();
                    self.search.query.remove(prev);
                    self.search.cursor_pos = prev;
                }
            }
            KeyCode::Delete => {
                if self.search.cursor_pos < self.search.query.len() {
                    self.search.query.remove(self.search.cursor_pos);
                }
            }
            KeyCode::Left => {
                if self.search.cursor_pos > 0 {
                    self.search.cursor_pos = self.search.prev_boundary();
                }
            }
            KeyCode::Right => {
                if self.search.cursor_pos < self.search.query.len() {
                    self.search.cursor_pos = self.search.next_boundary();
                }
            }
            KeyCode::Home => {
                self.search.cursor_pos = 0;
            }
            KeyCode::End => {
                self.search.cursor_pos = self.search.query.len();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let total = self.phase.result_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(total),
            KeyCode::PageUp => self.list.page_up(),
            KeyCode::PageDown => self.list.page_down(total),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(total),

            // Re-run the current query from the list
            KeyCode::Enter => self.submit_search(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.query.push(c);
                self.search.cursor_pos = self.search.query.len();
            }

            _ => {}
        }
    }
}
