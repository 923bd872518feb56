//! Podcast Browser - search and browse the public podcast directory
//!
//! This library provides the building blocks for a terminal podcast
//! directory client. It supports:
//!
//! - Fetching the show catalog and single-show details over HTTP
//! - Filtering shows by title substring and genre membership
//! - Mirroring filter state into a canonical, shareable query string
//! - An interactive TUI for browsing shows, seasons, and episodes
//!
//! # Example
//!
//! ```no_run
//! use podcast_browser::api::{HttpCatalog, ShowCatalog};
//! use podcast_browser::filters::FilterSync;
//!
//! let catalog = HttpCatalog::new();
//! let shows = catalog.fetch_previews()?;
//!
//! let filter = FilterSync::from_query("search=tech&genre=6");
//! let visible = filter.visible(&shows);
//! println!("{} of {} shows match", visible.len(), shows.len());
//! # Ok::<(), podcast_browser::api::CatalogError>(())
//! ```

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod models;
pub mod tui;

// Re-export commonly used types
pub use filters::apply::apply_filter;
pub use filters::query::{encode_query, parse_query};
pub use filters::state::FilterState;
pub use filters::sync::FilterSync;
pub use models::show::{Episode, Season, Show, ShowSummary};
