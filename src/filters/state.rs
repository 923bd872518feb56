/// Search term and genre selection for the listing view.
///
/// Mutable with a single owner (the listing view); mirrored bidirectionally
/// with the query string via [`super::sync::FilterSync`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search term, possibly empty
    pub search: String,
    /// Selected genre ID, if any. IDs outside the genre catalog are kept
    /// verbatim; they simply match nothing.
    pub genre: Option<u32>,
}

impl FilterState {
    pub fn new(search: impl Into<String>, genre: Option<u32>) -> Self {
        Self { search: search.into(), genre }
    }

    /// True when neither a search term nor a genre is set
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.genre.is_none()
    }
}
