use crate::config::ApiConfig;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key is not configured")]
    MissingCredential,
    #[error("City not found")]
    CityNotFound,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Shared blocking HTTP client. Lives behind an `Arc` and is only ever
/// called from network worker threads, never from the event loop.
pub struct ApiClient {
    agent: ureq::Agent,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .build();
        Self {
            agent,
            api_key: config.api_key().map(str::to_string),
        }
    }

    pub(crate) fn api_key(&self) -> Result<&str, ApiError> {
        self.api_key.as_deref().ok_or(ApiError::MissingCredential)
    }

    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.agent.get(url);
        for (name, value) in query {
            request = request.query(name, value);
        }

        let response = request.call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ApiError::Status(code),
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        })?;

        response
            .into_json::<T>()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
