use std::env;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// API credential, read once at startup and injected into the client.
/// A missing key is not fatal: lookups degrade to empty results and the
/// weather pane surfaces a configuration error instead.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    api_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self { api_key }
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn explicit_key_is_exposed() {
        let config = ApiConfig::with_key("abc123");
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn default_config_has_no_key() {
        assert_eq!(ApiConfig::default().api_key(), None);
    }
}
