//! Query-string codec for filter state.
//!
//! The listing view mirrors its filter state into a shareable query string
//! (`search=...&genre=...`). Parsing is total: missing or malformed
//! parameters degrade to the defaults rather than failing, so any string a
//! user pastes yields a usable [`FilterState`].
//!
//! # Examples
//!
//! ```rust
//! use podcast_browser::filters::query::{encode_query, parse_query};
//!
//! let state = parse_query("search=daily%20tech&genre=6");
//! assert_eq!(state.search, "daily tech");
//! assert_eq!(state.genre, Some(6));
//!
//! // Encoding is minimal: empty parameters are omitted entirely
//! assert_eq!(encode_query(&state), "search=daily%20tech&genre=6");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::state::FilterState;

// Characters that cannot appear raw inside a query value
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Parse a query string into a [`FilterState`].
///
/// Accepts an optional leading `?`. Unknown parameters are ignored, a
/// non-numeric `genre` value degrades to no-genre-selected, and genre IDs
/// outside the catalog are preserved (they match nothing downstream).
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "search" => state.search = decode_component(value),
            "genre" => state.genre = decode_component(value).parse::<u32>().ok(),
            _ => {}
        }
    }

    state
}

/// Encode a [`FilterState`] as the canonical minimal query string.
///
/// Empty search and unset genre are omitted entirely; an empty state encodes
/// to the empty string. Left inverse of [`parse_query`] for every state this
/// function can produce.
pub fn encode_query(state: &FilterState) -> String {
    let mut parts = Vec::new();

    if !state.search.is_empty() {
        parts.push(format!("search={}", utf8_percent_encode(&state.search, QUERY_ENCODE_SET)));
    }
    if let Some(genre) = state.genre {
        parts.push(format!("genre={}", genre));
    }

    parts.join("&")
}

/// Percent-decode one query value, treating `+` as a space (the legacy form
/// encoding some serializers still emit)
fn decode_component(raw: &str) -> String {
    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed).decode_utf8_lossy().into_owned()
}
