use std::time::Duration;

use serde_json::json;

use crate::config::ConciergeConfig;
use crate::error::AppError;

/// Whatever goes wrong with the concierge, the visitor sees this instead
/// of an error. The concierge is decoration, never a hard dependency.
pub const FALLBACK_REPLY: &str = "Thank you for your interest in Eva's Garden. \
    Please reach out to us via WhatsApp for personalized assistance with your event planning.";

fn prompt_for(preferences: &str) -> String {
    format!(
        "You are a concierge for Eva's Garden, a premium outdoor garden venue in Redhill, Kenya. \
         The venue features expansive lawns, mature trees, and a serene atmosphere for weddings, \
         celebrations, corporate events, and photoshoots. Capacity is flexible. Parking is \
         available. The venue supports both tented and open-air setups.\n\n\
         A potential client has the following request:\n\"{}\"\n\n\
         Provide a warm, personalized response (2-3 paragraphs max) that:\n\
         1. Acknowledges their vision\n\
         2. Suggests how Eva's Garden can bring it to life\n\
         3. Encourages them to schedule a site visit or WhatsApp for availability\n\n\
         Keep the tone elegant, warm, and professional.",
        preferences
    )
}

/// One-shot generative reply for the event-planning widget. Any failure -
/// missing key, network, decode, empty candidates - degrades to the canned
/// fallback. No retry.
pub async fn event_reply(config: &ConciergeConfig, preferences: &str) -> String {
    match try_generate(config, preferences).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => FALLBACK_REPLY.to_string(),
        Err(e) => {
            log::warn!("concierge reply unavailable: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

async fn try_generate(config: &ConciergeConfig, preferences: &str) -> Result<String, AppError> {
    let api_key = config
        .api_key
        .as_ref()
        .ok_or_else(|| AppError::Config("concierge api key not configured".to_string()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Config(format!("http client build failed: {}", e)))?;

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        config.model
    );
    let response = client
        .post(url)
        .query(&[("key", api_key.as_str())])
        .json(&json!({
            "contents": [{ "parts": [{ "text": prompt_for(preferences) }] }]
        }))
        .send()
        .await
        .map_err(|e| AppError::Config(format!("concierge request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::Config(format!(
            "concierge returned status {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Config(format!("concierge response unreadable: {}", e)))?;
    let text = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string();
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_client_request() {
        let prompt = prompt_for("an evening wedding for 120 guests");
        assert!(prompt.contains("an evening wedding for 120 guests"));
        assert!(prompt.contains("Eva's Garden"));
    }

    #[test]
    fn fallback_is_usable_copy() {
        assert!(!FALLBACK_REPLY.trim().is_empty());
    }

    #[tokio::test]
    async fn missing_key_degrades_to_fallback() {
        let config = ConciergeConfig {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
        };
        assert_eq!(event_reply(&config, "anything").await, FALLBACK_REPLY);
    }
}
