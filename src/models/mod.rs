//! Data models for the podcast catalog.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ShowSummary`] - One show as listed by the catalog endpoint
//! - [`Show`] - Full show detail with seasons and episodes
//! - [`genre`] - The fixed genre ID to title mapping
//!
//! These models use serde for JSON deserialization with a custom deserializer
//! for show IDs (feeds emit them as numbers or numeric strings) in the `de`
//! module.

pub(crate) mod de;
pub mod genre;
pub mod show;

pub use genre::{GENRES, genre_label, genre_line, genre_title};
pub use show::{Episode, Season, Show, ShowSummary};
