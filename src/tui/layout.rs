use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split-pane layout for the listing view
pub struct ListingLayout {
    pub results_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl ListingLayout {
    /// Create split-pane layout:
    /// - Show list: 60% width (left)
    /// - Preview pane: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        // Vertical split: main area + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        // Horizontal split: results + preview
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Show list
                Constraint::Percentage(40), // Preview pane
            ])
            .split(vertical_chunks[0]);

        Self {
            results_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[1],
        }
    }
}

/// Stacked layout for the show detail view
pub struct DetailLayout {
    pub header_area: Rect,
    pub seasons_area: Rect,
    pub status_area: Rect,
}

impl DetailLayout {
    /// Create stacked layout:
    /// - Header (title, genres, description): fixed 7 rows
    /// - Seasons/episodes list: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Header
                Constraint::Min(3),    // Seasons list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { header_area: chunks[0], seasons_area: chunks[1], status_area: chunks[2] }
    }
}
