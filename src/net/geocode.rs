use crate::net::client::{ApiClient, ApiError};
use serde::Deserialize;

const GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";

/// Upper bound on suggestions per lookup; results replace the previous
/// list wholesale.
pub const SUGGEST_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationSuggestion {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Geocoding collaborator seam. The event loop never calls this directly;
/// worker threads do, and tests substitute mocks.
pub trait GeocodeLookup: Send + Sync {
    fn lookup(&self, query: &str, limit: usize) -> Result<Vec<LocationSuggestion>, ApiError>;
}

impl GeocodeLookup for ApiClient {
    fn lookup(&self, query: &str, limit: usize) -> Result<Vec<LocationSuggestion>, ApiError> {
        let key = self.api_key()?;
        let limit = limit.to_string();
        self.get_json(
            GEOCODE_URL,
            &[("q", query), ("limit", limit.as_str()), ("appid", key)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::LocationSuggestion;

    #[test]
    fn decodes_geocoding_response() {
        let body = r#"[
            {"name":"London","lat":51.5073,"lon":-0.1276,"country":"GB","state":"England"},
            {"name":"London","lat":42.9836,"lon":-81.2497,"country":"CA"}
        ]"#;
        let suggestions: Vec<LocationSuggestion> = serde_json::from_str(body).expect("decode");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "London");
        assert_eq!(suggestions[0].state.as_deref(), Some("England"));
        assert_eq!(suggestions[1].country, "CA");
        assert_eq!(suggestions[1].state, None);
    }
}
