/// HTTP client for the public podcast API.
use reqwest::blocking::Client;

use super::{CatalogError, ShowCatalog};
use crate::models::show::{Show, ShowSummary};

const DEFAULT_BASE_URL: &str = "https://podcast-api.netlify.app";

/// Catalog backed by the fixed public endpoints: the base URL returns the
/// full preview listing, `{base}/id/{id}` returns one show with seasons.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new() -> Self {
        Self { client: Client::new(), base_url: DEFAULT_BASE_URL.to_string() }
    }

    /// Point the client at a different base URL (test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    fn check_status(response: &reqwest::blocking::Response) -> Result<(), CatalogError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(CatalogError::Request(format!(
            "HTTP {} {}",
            response.status().as_u16(),
            response.status().canonical_reason().unwrap_or("Unknown")
        )))
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowCatalog for HttpCatalog {
    fn fetch_previews(&self) -> Result<Vec<ShowSummary>, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Self::check_status(&response)?;

        response.json().map_err(|e| CatalogError::Parse(e.to_string()))
    }

    fn fetch_show(&self, id: u32) -> Result<Show, CatalogError> {
        let url = format!("{}/id/{}", self.base_url, id);
        let response =
            self.client.get(&url).send().map_err(|e| CatalogError::Request(e.to_string()))?;

        if response.status() == 404 {
            return Err(CatalogError::ShowNotFound(id));
        }

        Self::check_status(&response)?;

        response.json().map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
