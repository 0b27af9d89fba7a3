use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Booking inquiry from the public contact form. Status is advanced
/// manually by staff; `notes` is staff-only annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub preferred_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub message: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Booked,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Booked => "booked",
            InquiryStatus::Closed => "closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(InquiryStatus::New),
            "contacted" => Some(InquiryStatus::Contacted),
            "booked" => Some(InquiryStatus::Booked),
            "closed" => Some(InquiryStatus::Closed),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::Contacted => "Contacted",
            InquiryStatus::Booked => "Booked",
            InquiryStatus::Closed => "Closed",
        }
    }

    pub fn all() -> &'static [InquiryStatus] {
        static ALL: [InquiryStatus; 4] = [
            InquiryStatus::New,
            InquiryStatus::Contacted,
            InquiryStatus::Booked,
            InquiryStatus::Closed,
        ];
        &ALL
    }
}

/// Public submission form payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub preferred_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub message: String,
}

impl NewInquiry {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation(
                "A valid email address is required".to_string(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::Validation("Message must not be empty".to_string()));
        }
        Ok(())
    }

    /// Insert body. Every inquiry enters the pipeline at status `new`.
    pub fn insert_body(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "event_type": self.event_type,
            "preferred_date": self.preferred_date,
            "guest_count": self.guest_count,
            "message": self.message,
            "status": InquiryStatus::New.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewInquiry {
        NewInquiry {
            name: "Joseph".to_string(),
            email: "joseph@example.com".to_string(),
            phone: "+254700000000".to_string(),
            event_type: "Corporate".to_string(),
            preferred_date: None,
            guest_count: Some(80),
            message: "Looking for a December date.".to_string(),
        }
    }

    #[test]
    fn submissions_always_start_new() {
        let body = submission().insert_body();
        assert_eq!(body["status"], json!("new"));
    }

    #[test]
    fn status_round_trip() {
        for status in InquiryStatus::all() {
            assert_eq!(InquiryStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(InquiryStatus::from_str("archived"), None);
    }

    #[test]
    fn email_must_look_like_an_address() {
        let mut inquiry = submission();
        inquiry.email = "not-an-email".to_string();
        assert!(inquiry.validate().is_err());
    }
}
