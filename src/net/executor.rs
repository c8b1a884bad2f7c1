use crate::net::client::{ApiClient, ApiError};
use crate::net::geocode::{GeocodeLookup, LocationSuggestion, SUGGEST_LIMIT};
use crate::net::weather::{CurrentConditions, WeatherLookup};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Result of a background request, tagged with the sequence number it was
/// issued under so the reducer can reject stale completions.
#[derive(Debug)]
pub enum NetCompletion {
    Suggestions {
        seq: u64,
        suggestions: Vec<LocationSuggestion>,
    },
    Weather {
        seq: u64,
        result: Result<CurrentConditions, ApiError>,
    },
}

/// Runs network lookups on detached worker threads and hands completions
/// back to the event loop over a channel. Dropping the executor drops the
/// receiver; late workers then send into the void, which is exactly the
/// teardown behavior the loop wants.
pub struct NetExecutor {
    client: Arc<ApiClient>,
    completion_tx: Sender<NetCompletion>,
    completion_rx: Receiver<NetCompletion>,
}

impl NetExecutor {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<NetCompletion>();
        Self {
            client,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn_suggest(&self, seq: u64, query: String) {
        let client = Arc::clone(&self.client);
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let suggestions = suggestions_or_empty(client.lookup(&query, SUGGEST_LIMIT));
            let _ = completion_tx.send(NetCompletion::Suggestions { seq, suggestions });
        });
    }

    pub fn spawn_weather(&self, seq: u64, city: String) {
        let client = Arc::clone(&self.client);
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let result = client.current(&city);
            let _ = completion_tx.send(NetCompletion::Weather { seq, result });
        });
    }

    pub fn drain_ready(&self) -> Vec<NetCompletion> {
        let mut out = Vec::<NetCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

/// Autocomplete is a convenience feature: every lookup failure collapses
/// to "no suggestions" and nothing is surfaced to the user.
pub fn suggestions_or_empty(
    result: Result<Vec<LocationSuggestion>, ApiError>,
) -> Vec<LocationSuggestion> {
    result.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::suggestions_or_empty;
    use crate::net::client::ApiError;
    use crate::net::geocode::LocationSuggestion;

    #[test]
    fn lookup_failures_become_empty_lists() {
        assert!(suggestions_or_empty(Err(ApiError::MissingCredential)).is_empty());
        assert!(suggestions_or_empty(Err(ApiError::Transport("down".into()))).is_empty());
        assert!(suggestions_or_empty(Err(ApiError::Status(500))).is_empty());
    }

    #[test]
    fn lookup_success_passes_through() {
        let suggestions = vec![LocationSuggestion {
            name: "London".into(),
            country: "GB".into(),
            state: None,
            lat: 51.5,
            lon: -0.12,
        }];
        assert_eq!(suggestions_or_empty(Ok(suggestions.clone())), suggestions);
    }
}
