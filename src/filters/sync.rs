//! Bidirectional synchronization between filter state and its query string.
//!
//! [`FilterSync`] is the single owner of a [`FilterState`] plus the query
//! string derived from it. The two mutation entry points ([`set_search`] and
//! [`set_genre`]) re-encode the query eagerly, so the pair is consistent
//! after every user-initiated change completes. The query string is a pure
//! derived encoding of the state; it acts as an input only on initial load,
//! when a deep link seeds the state via [`FilterSync::from_query`].
//!
//! [`set_search`]: FilterSync::set_search
//! [`set_genre`]: FilterSync::set_genre

use super::apply::apply_filter;
use super::query::{encode_query, parse_query};
use super::state::FilterState;
use crate::models::show::ShowSummary;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSync {
    state: FilterState,
    query: String,
}

impl FilterSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the state from a deep-link query string.
    ///
    /// Never fails; malformed parameters degrade to the defaults, and the
    /// stored query is re-encoded into canonical form immediately.
    pub fn from_query(query: &str) -> Self {
        let state = parse_query(query);
        let query = encode_query(&state);
        Self { state, query }
    }

    /// Read access for views; mutation goes through the entry points below
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Canonical query string for the current state
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Shareable listing link: `/` plus the query string when one is set
    pub fn share_link(&self) -> String {
        if self.query.is_empty() { "/".to_string() } else { format!("/?{}", self.query) }
    }

    /// Replace the search term and re-encode the query
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.query = encode_query(&self.state);
    }

    /// Replace the genre selection and re-encode the query
    pub fn set_genre(&mut self, genre: Option<u32>) {
        self.state.genre = genre;
        self.query = encode_query(&self.state);
    }

    /// Derive the visible subset of `shows` for the current state
    pub fn visible(&self, shows: &[ShowSummary]) -> Vec<ShowSummary> {
        apply_filter(shows, &self.state)
    }
}
