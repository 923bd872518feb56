//! Fetch collaborators for the public podcast catalog.
//!
//! The core filter logic never performs I/O; it is handed show lists by a
//! [`ShowCatalog`] implementation. The production implementation is
//! [`HttpCatalog`]; tests substitute in-memory catalogs.

mod http;

pub use http::HttpCatalog;

use thiserror::Error;

use crate::models::show::{Show, ShowSummary};

/// Errors surfaced by catalog fetches.
///
/// No automatic retry is attempted; callers render these as a single
/// user-visible message.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure reaching the catalog
    #[error("Failed to load shows: {0}")]
    Request(String),

    /// The catalog responded with something other than the expected JSON
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    /// The detail endpoint has no show for this ID
    #[error("Show {0} not found")]
    ShowNotFound(u32),
}

/// A source of podcast shows.
pub trait ShowCatalog {
    /// Fetch every show preview in the catalog.
    fn fetch_previews(&self) -> Result<Vec<ShowSummary>, CatalogError>;

    /// Fetch one show with its seasons and episodes.
    fn fetch_show(&self, id: u32) -> Result<Show, CatalogError>;
}
