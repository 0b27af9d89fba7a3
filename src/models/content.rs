use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable event category shown on the public events page and offered
/// in the inquiry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Json,
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Json => "json",
        }
    }
}

/// One editable piece of site copy, addressed by `(section, key)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub value: String,
    pub content_type: ContentKind,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

/// Convenience lookup over a loaded content set.
pub fn content_value<'a>(items: &'a [SiteContent], key: &str) -> Option<&'a str> {
    items.iter().find(|c| c.key == key).map(|c| c.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_value_finds_by_key() {
        let items = vec![SiteContent {
            id: Uuid::nil(),
            section: "home".to_string(),
            key: "hero_title".to_string(),
            value: "Where Moments Bloom".to_string(),
            content_type: ContentKind::Text,
            updated_by: None,
            updated_at: Utc::now(),
        }];
        assert_eq!(content_value(&items, "hero_title"), Some("Where Moments Bloom"));
        assert_eq!(content_value(&items, "missing"), None);
    }
}
