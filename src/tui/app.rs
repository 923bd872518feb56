//! TUI application state and event handling.
//!
//! The [`App`] struct owns all application state and runs the main event
//! loop via `run()`. It manages:
//!
//! - **Filter synchronization**: every edit to the search term or genre
//!   selection re-encodes the shareable query string and re-derives the
//!   visible show list
//! - **View switching**: the listing and the show detail screen, with the
//!   filter state kept intact across the round trip
//! - **Season expansion**: at most one season open at a time in the detail
//!   screen
//! - **Status messages**: transient feedback for clipboard operations and
//!   fetch errors
//! - **Dirty state tracking**: rendering only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{DetailState, ListingState, render_detail, render_listing};
use crate::api::ShowCatalog;
use crate::clipboard::copy_share_link;
use crate::filters::sync::FilterSync;
use crate::models::genre::GENRES;
use crate::models::show::{Show, ShowSummary};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Cap on the typed search term
const MAX_SEARCH_LEN: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which screen is on display
enum View {
    Listing,
    Detail(DetailView),
}

/// Local state of the show detail screen
struct DetailView {
    show: Show,
    selected_idx: usize,
    /// Season currently open, by season number; at most one at a time
    expanded: Option<u32>,
}

impl DetailView {
    fn toggle_selected_season(&mut self) {
        let Some(season) = self.show.seasons.get(self.selected_idx) else {
            return;
        };
        self.expanded = if self.expanded == Some(season.season) { None } else { Some(season.season) };
    }
}

pub struct App<C: ShowCatalog> {
    catalog: C,
    all_shows: Vec<ShowSummary>,
    visible: Vec<ShowSummary>,
    filter: FilterSync,
    selected_idx: usize,
    view: View,
    should_quit: bool,
    // Status message (clipboard feedback, fetch errors)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<C: ShowCatalog> App<C> {
    pub fn new(catalog: C, shows: Vec<ShowSummary>, filter: FilterSync) -> Self {
        let visible = filter.visible(&shows);

        Self {
            catalog,
            all_shows: shows,
            visible,
            filter,
            selected_idx: 0,
            view: View::Listing,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| match &self.view {
                    View::Listing => {
                        render_listing(
                            f,
                            &ListingState {
                                visible: &self.visible,
                                selected_idx: self.selected_idx,
                                total_count: self.all_shows.len(),
                                search: &self.filter.state().search,
                                genre: self.filter.state().genre,
                                share_link: &self.filter.share_link(),
                                status_message: self.status_message.as_ref(),
                            },
                        );
                    }
                    View::Detail(detail) => {
                        render_detail(
                            f,
                            &DetailState {
                                show: &detail.show,
                                selected_idx: detail.selected_idx,
                                expanded: detail.expanded,
                                status_message: self.status_message.as_ref(),
                            },
                        );
                    }
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => self.go_back(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::Select => self.select(),
            Action::NextGenre => {
                if matches!(self.view, View::Listing) {
                    self.on_genre_changed(next_genre(self.filter.state().genre));
                }
            }
            Action::PrevGenre => {
                if matches!(self.view, View::Listing) {
                    self.on_genre_changed(prev_genre(self.filter.state().genre));
                }
            }
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::CopyLink => self.copy_link(),
            Action::None => {}
        }
    }

    /// Mutation entry point: the search term changed.
    ///
    /// Re-encodes the query string and re-derives the visible list in the
    /// same step, so both are consistent before the next event is handled.
    fn on_search_changed(&mut self, search: String) {
        self.filter.set_search(search);
        self.refresh_visible();
    }

    /// Mutation entry point: the genre selection changed.
    fn on_genre_changed(&mut self, genre: Option<u32>) {
        self.filter.set_genre(genre);
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = self.filter.visible(&self.all_shows);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn go_back(&mut self) {
        match self.view {
            View::Detail(_) => {
                // The filter state survived the detail visit untouched, so
                // the listing comes back exactly as it was left
                self.view = View::Listing;
                self.needs_redraw = true;
            }
            View::Listing => {
                if self.filter.state().search.is_empty() {
                    self.should_quit = true;
                } else {
                    self.on_search_changed(String::new());
                }
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (selected, total) = match &mut self.view {
            View::Listing => (&mut self.selected_idx, self.visible.len()),
            View::Detail(detail) => (&mut detail.selected_idx, detail.show.seasons.len()),
        };

        if total == 0 {
            *selected = 0;
            return;
        }

        let old_idx = *selected;
        let new_idx = (*selected as isize + delta).max(0) as usize;
        *selected = new_idx.min(total - 1);

        if old_idx != *selected {
            self.needs_redraw = true;
        }
    }

    fn select(&mut self) {
        if let View::Detail(detail) = &mut self.view {
            detail.toggle_selected_season();
            self.needs_redraw = true;
        } else {
            self.open_selected_show();
        }
    }

    /// One-shot detail fetch; failures surface as a status message with no
    /// automatic retry
    fn open_selected_show(&mut self) {
        let Some(show) = self.visible.get(self.selected_idx) else {
            return;
        };

        match self.catalog.fetch_show(show.id) {
            Ok(show) => {
                self.view = View::Detail(DetailView { show, selected_idx: 0, expanded: None });
                self.needs_redraw = true;
            }
            Err(e) => {
                self.set_status(format!("✗ {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }

    fn update_search(&mut self, c: char) {
        if !matches!(self.view, View::Listing) {
            return;
        }
        let search = &self.filter.state().search;
        if search.len() < MAX_SEARCH_LEN {
            let mut search = search.clone();
            search.push(c);
            self.on_search_changed(search);
        }
    }

    fn delete_char(&mut self) {
        if !matches!(self.view, View::Listing) {
            return;
        }
        let mut search = self.filter.state().search.clone();
        if search.pop().is_some() {
            self.on_search_changed(search);
        }
    }

    fn copy_link(&mut self) {
        match copy_share_link(&self.filter.share_link()) {
            Ok(()) => {
                self.set_status(
                    "✓ Share link copied",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }
}

/// Cycle the genre selection forward: all genres, then 1..9, then back
fn next_genre(current: Option<u32>) -> Option<u32> {
    match current {
        None => Some(GENRES[0].0),
        Some(id) => match GENRES.iter().position(|(genre_id, _)| *genre_id == id) {
            Some(pos) if pos + 1 < GENRES.len() => Some(GENRES[pos + 1].0),
            // Last known genre, or an unknown ID from a deep link
            _ => None,
        },
    }
}

/// Cycle the genre selection backward
fn prev_genre(current: Option<u32>) -> Option<u32> {
    match current {
        None => Some(GENRES[GENRES.len() - 1].0),
        Some(id) => match GENRES.iter().position(|(genre_id, _)| *genre_id == id) {
            Some(0) | None => None,
            Some(pos) => Some(GENRES[pos - 1].0),
        },
    }
}
