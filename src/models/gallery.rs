use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Grouping entity for gallery media; `slug` is the stable key used for
/// filtering from the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One media asset in the public gallery. `category` is embedded by the
/// joined read; a dangling `category_id` simply leaves it `None` and the
/// item renders as uncategorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub alt_text: String,
    #[serde(default)]
    pub description: String,
    pub featured: bool,
    pub sort_order: i32,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<GalleryCategory>,
}

impl GalleryItem {
    pub fn category_slug(&self) -> &str {
        self.category.as_ref().map(|c| c.slug.as_str()).unwrap_or("")
    }

    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

/// Insert payload for a new gallery item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGalleryItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub alt_text: String,
    pub description: String,
    pub uploaded_by: Option<Uuid>,
}

impl NewGalleryItem {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.url.trim().is_empty() {
            return Err(AppError::Validation("Media URL must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(category: &str) -> String {
        format!(
            r#"{{
                "id": "11111111-2222-3333-4444-555555555555",
                "type": "image",
                "url": "https://cdn.example.com/a.jpeg",
                "thumbnail_url": null,
                "category_id": null,
                "title": "Sunset",
                "alt_text": "Sunset over the lawn",
                "description": "",
                "featured": false,
                "sort_order": 0,
                "uploaded_by": null,
                "created_at": "2024-01-01T00:00:00Z",
                "category": {}
            }}"#,
            category
        )
    }

    #[test]
    fn missing_category_renders_uncategorized() {
        let item: GalleryItem = serde_json::from_str(&raw_item("null")).unwrap();
        assert_eq!(item.category_name(), "Uncategorized");
        assert_eq!(item.category_slug(), "");
    }

    #[test]
    fn embedded_category_is_used_when_present() {
        let category = r#"{
            "id": "99999999-8888-7777-6666-555555555555",
            "name": "Weddings",
            "slug": "weddings",
            "icon": "💍",
            "sort_order": 1,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let item: GalleryItem = serde_json::from_str(&raw_item(category)).unwrap();
        assert_eq!(item.category_slug(), "weddings");
    }

    #[test]
    fn media_kind_from_content_type() {
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_content_type("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type("application/pdf"), MediaKind::Image);
    }

    #[test]
    fn new_item_requires_url_and_title() {
        let item = NewGalleryItem {
            kind: MediaKind::Image,
            url: " ".to_string(),
            thumbnail_url: None,
            category_id: None,
            title: "T".to_string(),
            alt_text: "T".to_string(),
            description: String::new(),
            uploaded_by: None,
        };
        assert!(item.validate().is_err());
    }
}
