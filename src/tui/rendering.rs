use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::{DetailLayout, ListingLayout};
use crate::models::genre::{genre_label, genre_line};
use crate::models::show::{Show, ShowSummary};

/// Everything the listing view needs to draw one frame
pub struct ListingState<'a> {
    pub visible: &'a [ShowSummary],
    pub selected_idx: usize,
    pub total_count: usize,
    pub search: &'a str,
    pub genre: Option<u32>,
    pub share_link: &'a str,
    pub status_message: Option<&'a StatusMessage>,
}

/// Everything the detail view needs to draw one frame
pub struct DetailState<'a> {
    pub show: &'a Show,
    pub selected_idx: usize,
    pub expanded: Option<u32>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the listing view (show list + preview + status bar)
pub fn render_listing(frame: &mut Frame, state: &ListingState) {
    let layout = ListingLayout::new(frame.area());

    render_show_list(frame, layout.results_area, state.visible, state.selected_idx);
    render_preview(frame, layout.preview_area, state.visible.get(state.selected_idx));
    render_listing_status(frame, layout.status_area, state);
}

/// Render the detail view (header + seasons + status bar)
pub fn render_detail(frame: &mut Frame, state: &DetailState) {
    let layout = DetailLayout::new(frame.area());

    render_detail_header(frame, layout.header_area, state.show);
    render_seasons(frame, layout.seasons_area, state.show, state.selected_idx, state.expanded);
    render_detail_status(frame, layout.status_area, state.status_message);
}

fn render_show_list(frame: &mut Frame, area: Rect, shows: &[ShowSummary], selected_idx: usize) {
    let items: Vec<ListItem> = shows
        .iter()
        .enumerate()
        .map(|(idx, show)| {
            let genres = genre_line(&show.genres);
            let content = if genres.is_empty() {
                show.title.clone()
            } else {
                format!("{} | {}", show.title, genres)
            };

            let style = if idx == selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250)) // Bright text
                    .bg(Color::Rgb(16, 185, 129)) // Emerald background
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(113, 113, 122)) // Muted text
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Shows "),
    );

    frame.render_widget(list, area);
}

fn render_preview(frame: &mut Frame, area: Rect, show: Option<&ShowSummary>) {
    let content = if let Some(show) = show {
        let mut lines = vec![
            Line::from(Span::styled(
                show.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Genres: ", Style::default().fg(Color::Rgb(113, 113, 122))),
                Span::raw(genre_line(&show.genres)),
            ]),
            Line::from(vec![
                Span::styled("Updated: ", Style::default().fg(Color::Rgb(113, 113, 122))),
                Span::raw(format_updated(show.updated.as_ref())),
            ]),
            Line::from(""),
        ];

        for line in show.description.lines() {
            lines.push(Line::from(line.to_string()));
        }

        Text::from(lines)
    } else {
        Text::from("No show selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_listing_status(frame: &mut Frame, area: Rect, state: &ListingState) {
    if let Some(message) = state.status_message {
        render_status_message(frame, area, message);
        return;
    }

    let (status_text, style) = if state.visible.is_empty() {
        (
            " No shows match your filters | Esc: clear | Ctrl+C: quit ".to_string(),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    } else {
        let mut parts = vec![];

        if state.visible.len() < state.total_count {
            parts.push(format!("{}/{} shows", state.visible.len(), state.total_count));
        } else {
            parts.push(format!("{} shows", state.total_count));
        }

        if !state.search.is_empty() {
            parts.push(format!("search: {}", state.search));
        }
        if let Some(genre) = state.genre {
            parts.push(format!("genre: {}", genre_label(genre)));
        }

        parts.push(format!("link: {}", state.share_link));
        parts.push("Tab: genre".to_string());
        parts.push("Enter: open".to_string());
        parts.push("Ctrl+Y: copy link".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

fn render_detail_header(frame: &mut Frame, area: Rect, show: &Show) {
    let mut lines = vec![
        Line::from(Span::styled(show.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("Genres: ", Style::default().fg(Color::Rgb(113, 113, 122))),
            Span::raw(genre_line(&show.genres)),
        ]),
        Line::from(vec![
            Span::styled("Last updated: ", Style::default().fg(Color::Rgb(113, 113, 122))),
            Span::raw(format_updated(show.updated.as_ref())),
        ]),
        Line::from(""),
    ];

    for line in show.description.lines() {
        lines.push(Line::from(line.to_string()));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_seasons(
    frame: &mut Frame,
    area: Rect,
    show: &Show,
    selected_idx: usize,
    expanded: Option<u32>,
) {
    let mut items: Vec<ListItem> = Vec::new();

    for (idx, season) in show.seasons.iter().enumerate() {
        let is_expanded = expanded == Some(season.season);
        let marker = if is_expanded { "▾" } else { "▸" };
        let content = format!("{} {} ({} episodes)", marker, season.title, season.episodes.len());

        let style = if idx == selected_idx {
            Style::default()
                .fg(Color::Rgb(250, 250, 250))
                .bg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(250, 250, 250))
        };

        items.push(ListItem::new(content).style(style));

        if is_expanded {
            for (episode_idx, episode) in season.episodes.iter().enumerate() {
                let duration = episode
                    .duration
                    .map(|secs| format!(" [{}]", format_duration(secs)))
                    .unwrap_or_default();
                let line = format!("    {}. {}{}", episode_idx + 1, episode.title, duration);
                items.push(
                    ListItem::new(line).style(Style::default().fg(Color::Rgb(113, 113, 122))),
                );
            }
        }
    }

    if items.is_empty() {
        items.push(ListItem::new("No seasons available"));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Seasons "),
    );

    frame.render_widget(list, area);
}

fn render_detail_status(frame: &mut Frame, area: Rect, status_message: Option<&StatusMessage>) {
    if let Some(message) = status_message {
        render_status_message(frame, area, message);
        return;
    }

    let text = " Esc: back | Enter: expand season | Ctrl+C: quit ";
    let style = Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27));
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_status_message(frame: &mut Frame, area: Rect, message: &StatusMessage) {
    let style = match message.message_type {
        MessageType::Success => {
            Style::default().fg(Color::Rgb(16, 185, 129)).bg(Color::Rgb(24, 24, 27))
        }
        MessageType::Error => {
            Style::default().fg(Color::Rgb(239, 68, 68)).bg(Color::Rgb(24, 24, 27))
        }
    };
    frame.render_widget(Paragraph::new(format!(" {} ", message.text)).style(style), area);
}

/// Format the catalog's `updated` timestamp: "Nov 3, 2022" or "Unknown"
fn format_updated(updated: Option<&DateTime<Utc>>) -> String {
    match updated {
        Some(timestamp) => timestamp.format("%b %-d, %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Format an episode duration in seconds as "m:ss"
fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::show::{Episode, Season};

    fn create_test_show(title: &str) -> ShowSummary {
        ShowSummary {
            id: 1,
            title: title.to_string(),
            description: "A test show.".to_string(),
            image: String::new(),
            genres: vec![6],
            updated: Some(Utc.with_ymd_and_hms(2022, 11, 3, 7, 0, 0).unwrap()),
        }
    }

    fn create_test_detail() -> Show {
        Show {
            id: 1,
            title: "Daily Tech".to_string(),
            description: "A test show.".to_string(),
            image: String::new(),
            genres: vec![6, 99],
            updated: None,
            seasons: vec![Season {
                season: 1,
                title: "Season 1".to_string(),
                image: String::new(),
                episodes: vec![Episode {
                    episode: 1,
                    title: "Pilot".to_string(),
                    description: "The first one.".to_string(),
                    duration: Some(1800),
                }],
            }],
        }
    }

    #[test]
    fn test_render_listing_with_shows() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let shows = [create_test_show("First show"), create_test_show("Second show")];

        terminal
            .draw(|f| {
                render_listing(
                    f,
                    &ListingState {
                        visible: &shows,
                        selected_idx: 0,
                        total_count: 2,
                        search: "show",
                        genre: Some(6),
                        share_link: "/?search=show&genre=6",
                        status_message: None,
                    },
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_listing_empty() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                render_listing(
                    f,
                    &ListingState {
                        visible: &[],
                        selected_idx: 0,
                        total_count: 10,
                        search: "xyz",
                        genre: None,
                        share_link: "/?search=xyz",
                        status_message: None,
                    },
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_listing_with_status_message() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let shows = [create_test_show("A show")];
        let message = StatusMessage {
            text: "✓ Copied share link".to_string(),
            message_type: MessageType::Success,
            expires_at: std::time::Instant::now(),
        };

        terminal
            .draw(|f| {
                render_listing(
                    f,
                    &ListingState {
                        visible: &shows,
                        selected_idx: 0,
                        total_count: 1,
                        search: "",
                        genre: None,
                        share_link: "/",
                        status_message: Some(&message),
                    },
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_detail_collapsed_and_expanded() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let show = create_test_detail();

        terminal
            .draw(|f| {
                render_detail(
                    f,
                    &DetailState { show: &show, selected_idx: 0, expanded: None, status_message: None },
                );
            })
            .unwrap();

        terminal
            .draw(|f| {
                render_detail(
                    f,
                    &DetailState {
                        show: &show,
                        selected_idx: 0,
                        expanded: Some(1),
                        status_message: None,
                    },
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_detail_without_seasons() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut show = create_test_detail();
        show.seasons.clear();

        terminal
            .draw(|f| {
                render_detail(
                    f,
                    &DetailState { show: &show, selected_idx: 0, expanded: None, status_message: None },
                );
            })
            .unwrap();
    }

    #[test]
    fn test_format_updated() {
        let timestamp = Utc.with_ymd_and_hms(2022, 11, 3, 7, 0, 0).unwrap();
        assert_eq!(format_updated(Some(&timestamp)), "Nov 3, 2022");
        assert_eq!(format_updated(None), "Unknown");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1800), "30:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(5), "0:05");
    }
}
