use std::fmt;

/// Error type for remote store operations
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Request never produced a usable response (DNS, TLS, timeout, ...)
    Network(String),
    /// Response arrived but its body could not be parsed
    Decode(String),
    /// The backend rejected the request
    Server { status: u16, message: String },
    /// Authentication failure (bad credentials, missing session)
    Auth(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {}", msg),
            StoreError::Decode(msg) => write!(f, "Decode error: {}", msg),
            StoreError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            StoreError::Auth(msg) => write!(f, "Authentication error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Network(e.to_string())
        }
    }
}

/// Pulls a human-readable message out of a backend error body. The backend
/// is not consistent about the field name across its REST, auth and storage
/// surfaces, so several are tried before falling back to the raw body.
pub(crate) fn message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error detail provided".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_structured_fields() {
        assert_eq!(
            message_from_body(r#"{"message":"row not found"}"#),
            "row not found"
        );
        assert_eq!(
            message_from_body(r#"{"error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
    }

    #[test]
    fn message_falls_back_to_raw_body() {
        assert_eq!(message_from_body("service unavailable"), "service unavailable");
        assert_eq!(message_from_body("   "), "no error detail provided");
    }
}
