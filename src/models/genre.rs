/// The catalog's fixed genre set: ID to display title.
///
/// Read-only and process-wide. IDs outside this table are valid-but-unknown;
/// display code falls back to [`UNKNOWN_GENRE`] instead of failing.
pub const GENRES: [(u32, &str); 9] = [
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Label rendered for genre IDs the catalog does not know about
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Look up the display title for a genre ID
pub fn genre_title(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|(genre_id, _)| *genre_id == id).map(|(_, title)| *title)
}

/// Display label for a genre ID, falling back to "Unknown"
pub fn genre_label(id: u32) -> &'static str {
    genre_title(id).unwrap_or(UNKNOWN_GENRE)
}

/// Render a show's genre list as a single comma-separated line
pub fn genre_line(ids: &[u32]) -> String {
    ids.iter().map(|&id| genre_label(id)).collect::<Vec<_>>().join(", ")
}
