use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Client testimonial. Created unapproved by public submission, approved by
/// an admin, optionally flagged featured afterwards. Unapproved rows must
/// never reach public pages regardless of the `featured` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    pub rating: i32,
    pub comment: String,
    pub photo_url: Option<String>,
    pub video_url: Option<String>,
    pub approved: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Public submission form payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTestimonial {
    pub client_name: String,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    pub rating: i32,
    pub comment: String,
}

impl NewTestimonial {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.client_name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if self.comment.trim().is_empty() {
            return Err(AppError::Validation("Comment must not be empty".to_string()));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    /// Insert body. Moderation flags are set here, not taken from the
    /// submission: every new testimonial starts unapproved and unfeatured.
    pub fn insert_body(&self) -> serde_json::Value {
        json!({
            "client_name": self.client_name,
            "event_type": self.event_type,
            "event_date": self.event_date,
            "rating": self.rating,
            "comment": self.comment,
            "approved": false,
            "featured": false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewTestimonial {
        NewTestimonial {
            client_name: "Amina".to_string(),
            event_type: "Wedding".to_string(),
            event_date: None,
            rating: 5,
            comment: "A magical day.".to_string(),
        }
    }

    #[test]
    fn submissions_always_start_unapproved() {
        let body = submission().insert_body();
        assert_eq!(body["approved"], json!(false));
        assert_eq!(body["featured"], json!(false));
    }

    #[test]
    fn rating_is_bounded() {
        let mut t = submission();
        t.rating = 0;
        assert!(t.validate().is_err());
        t.rating = 6;
        assert!(t.validate().is_err());
        t.rating = 3;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut t = submission();
        t.comment = "  ".to_string();
        assert!(t.validate().is_err());
    }
}
