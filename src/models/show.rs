use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One show as it appears in the catalog listing.
///
/// Immutable once fetched; the listing view owns the full list for the
/// duration of one visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    #[serde(deserialize_with = "crate::models::de::deserialize_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub genres: Vec<u32>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// Full show detail: summary fields plus seasons in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(deserialize_with = "crate::models::de::deserialize_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub genres: Vec<u32>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// An ordered collection of episodes belonging to one show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season: u32,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Episode length in seconds, when the feed supplies one
    #[serde(default)]
    pub duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_summary_from_catalog_json() {
        let json = r#"{
            "id": 10716,
            "title": "Daily Tech",
            "description": "A show about tech.",
            "image": "https://example.com/cover.jpg",
            "genres": [6, 8],
            "updated": "2022-11-03T07:00:00.000Z"
        }"#;

        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 10716);
        assert_eq!(show.title, "Daily Tech");
        assert_eq!(show.genres, vec![6, 8]);
        assert!(show.updated.is_some());
    }

    #[test]
    fn test_show_summary_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "Bare Minimum"}"#;

        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 1);
        assert_eq!(show.description, "");
        assert!(show.genres.is_empty());
        assert!(show.updated.is_none());
    }

    #[test]
    fn test_show_detail_with_seasons() {
        let json = r#"{
            "id": 42,
            "title": "History Hour",
            "genres": [3],
            "seasons": [
                {
                    "season": 1,
                    "title": "Season 1",
                    "image": "https://example.com/s1.jpg",
                    "episodes": [
                        {"episode": 1, "title": "Origins", "description": "How it began."},
                        {"episode": 2, "title": "Aftermath", "duration": 1800}
                    ]
                }
            ]
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.seasons.len(), 1);
        assert_eq!(show.seasons[0].episodes.len(), 2);
        assert_eq!(show.seasons[0].episodes[0].title, "Origins");
        assert_eq!(show.seasons[0].episodes[1].duration, Some(1800));
    }

    #[test]
    fn test_seasons_and_episodes_keep_catalog_order() {
        let json = r#"{
            "id": 7,
            "title": "Out of Order",
            "seasons": [
                {"season": 2, "title": "Second", "episodes": []},
                {"season": 1, "title": "First", "episodes": []}
            ]
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        // Catalog order is preserved as-is, not re-sorted
        assert_eq!(show.seasons[0].season, 2);
        assert_eq!(show.seasons[1].season, 1);
    }
}
