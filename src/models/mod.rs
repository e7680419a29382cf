use serde::{Deserialize, Serialize};

pub mod mood;

pub use mood::{Mood, MoodResolution};

/// A persisted book review
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub rating: i64,
    pub comment: String,
}

/// A review as submitted through the form
///
/// Rating stays unvalidated text here; the INTEGER column's affinity does
/// the conversion on insert.
#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub title: String,
    pub author: String,
    pub rating: String,
    pub comment: String,
}

/// Display-ready recommendation derived from a catalog volume.
/// Produced transiently per request, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationItem {
    pub title: String,
    pub authors: String,
    pub description: String,
    pub cover_image_url: String,
    pub purchase_link: String,
}

// ============================================================================
// Catalog API Types
// ============================================================================

/// Volume list response from the catalog API
#[derive(Debug, Clone, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// A single catalog volume
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub volume_info: VolumeInfo,
    #[serde(default)]
    pub sale_info: SaleInfo,
}

/// Bibliographic half of a volume. `title` is required; a payload without
/// it is malformed and fails deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    #[serde(default)]
    pub buy_link: Option<String>,
}

impl From<Volume> for RecommendationItem {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;

        let authors = info
            .authors
            .unwrap_or_else(|| vec!["Unknown Author".to_string()])
            .join(", ");

        let cover_image_url = info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default();

        RecommendationItem {
            title: info.title,
            authors,
            description: info
                .description
                .unwrap_or_else(|| "No description available".to_string()),
            cover_image_url,
            purchase_link: volume.sale_info.buy_link.unwrap_or_else(|| "#".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_deserialization_full() {
        let json = r#"{
            "volumeInfo": {
                "title": "The Dispossessed",
                "authors": ["Ursula K. Le Guin"],
                "description": "An ambiguous utopia.",
                "imageLinks": {
                    "thumbnail": "http://books.example/covers/dispossessed.jpg"
                }
            },
            "saleInfo": {
                "buyLink": "http://books.example/buy/dispossessed"
            }
        }"#;

        let volume: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.volume_info.title, "The Dispossessed");
        assert_eq!(
            volume.volume_info.authors,
            Some(vec!["Ursula K. Le Guin".to_string()])
        );
        assert_eq!(
            volume.sale_info.buy_link,
            Some("http://books.example/buy/dispossessed".to_string())
        );
    }

    #[test]
    fn test_volume_deserialization_title_only() {
        let json = r#"{ "volumeInfo": { "title": "Untitled Draft" } }"#;

        let volume: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.volume_info.title, "Untitled Draft");
        assert_eq!(volume.volume_info.authors, None);
        assert_eq!(volume.volume_info.image_links, None);
        assert_eq!(volume.sale_info.buy_link, None);
    }

    #[test]
    fn test_volume_missing_title_is_malformed() {
        let json = r#"{ "volumeInfo": { "authors": ["Nobody"] } }"#;

        let result: Result<Volume, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_volumes_response_without_items_is_empty() {
        let response: VolumesResponse = serde_json::from_str(r#"{ "kind": "volumes" }"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_recommendation_item_applies_defaults() {
        let volume: Volume =
            serde_json::from_str(r#"{ "volumeInfo": { "title": "Bare Volume" } }"#).unwrap();

        let item = RecommendationItem::from(volume);
        assert_eq!(item.title, "Bare Volume");
        assert_eq!(item.authors, "Unknown Author");
        assert_eq!(item.description, "No description available");
        assert_eq!(item.cover_image_url, "");
        assert_eq!(item.purchase_link, "#");
    }

    #[test]
    fn test_recommendation_item_joins_authors() {
        let json = r#"{
            "volumeInfo": {
                "title": "Good Omens",
                "authors": ["Terry Pratchett", "Neil Gaiman"]
            }
        }"#;
        let volume: Volume = serde_json::from_str(json).unwrap();

        let item = RecommendationItem::from(volume);
        assert_eq!(item.authors, "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_recommendation_item_empty_image_links_means_empty_cover() {
        // imageLinks present but without a thumbnail still yields ""
        let json = r#"{
            "volumeInfo": {
                "title": "Coverless",
                "imageLinks": {}
            }
        }"#;
        let volume: Volume = serde_json::from_str(json).unwrap();

        let item = RecommendationItem::from(volume);
        assert_eq!(item.cover_image_url, "");
    }
}
