use super::state::FilterState;
use crate::models::show::ShowSummary;

/// Derive the visible subset of `shows` for the given filter state.
///
/// Order-preserving and non-destructive: matching shows come back cloned, in
/// their original order, and the input is left untouched. A show matches when
/// its title contains the search term case-insensitively and, if a genre is
/// selected, that genre appears in its genre list.
pub fn apply_filter(shows: &[ShowSummary], state: &FilterState) -> Vec<ShowSummary> {
    shows.iter().filter(|show| matches(show, state)).cloned().collect()
}

/// Evaluate the filter predicate against a single show
fn matches(show: &ShowSummary, state: &FilterState) -> bool {
    let matches_search = show.title.to_lowercase().contains(&state.search.to_lowercase());
    let matches_genre = match state.genre {
        Some(genre) => show.genres.contains(&genre),
        None => true,
    };
    matches_search && matches_genre
}
