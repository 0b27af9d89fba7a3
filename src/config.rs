use serde::Deserialize;

/// Boot configuration: the remote backend endpoint plus the optional
/// concierge credentials. Read from `evas-garden.toml` in the working
/// directory, with environment variables taking precedence so deployments
/// can override the file without touching it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store_url: String,
    #[serde(default)]
    pub store_anon_key: String,
    #[serde(default)]
    pub concierge: ConciergeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConciergeConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_concierge_model")]
    pub model: String,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_concierge_model(),
        }
    }
}

fn default_concierge_model() -> String {
    "gemini-2.0-flash".to_string()
}

const CONFIG_FILE: &str = "evas-garden.toml";

impl AppConfig {
    /// Never fails: missing configuration degrades to a client whose remote
    /// calls error out, and every screen already renders those as fallback
    /// states. The gaps are logged loudly instead.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(raw) => match toml::from_str::<AppConfig>(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("could not parse {}: {}", CONFIG_FILE, e);
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        };

        if let Ok(url) = std::env::var("EVAS_GARDEN_STORE_URL") {
            config.store_url = url;
        }
        if let Ok(key) = std::env::var("EVAS_GARDEN_STORE_ANON_KEY") {
            config.store_anon_key = key;
        }
        if let Ok(key) = std::env::var("EVAS_GARDEN_CONCIERGE_KEY") {
            config.concierge.api_key = Some(key);
        }

        if config.store_url.is_empty() || config.store_anon_key.is_empty() {
            log::warn!(
                "remote store endpoint not configured; set store_url/store_anon_key in {} or the EVAS_GARDEN_STORE_* environment variables",
                CONFIG_FILE
            );
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            store_url = "https://backend.example.com"
            store_anon_key = "anon"

            [concierge]
            api_key = "secret"
            model = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert_eq!(config.store_url, "https://backend.example.com");
        assert_eq!(config.concierge.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn concierge_section_is_optional() {
        let config: AppConfig =
            toml::from_str("store_url = \"u\"\nstore_anon_key = \"k\"\n").unwrap();
        assert!(config.concierge.api_key.is_none());
        assert_eq!(config.concierge.model, "gemini-2.0-flash");
    }
}
