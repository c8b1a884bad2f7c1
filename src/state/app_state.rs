use crate::net::client::ApiError;
use crate::net::weather::CurrentConditions;
use crate::search::SearchController;
use crate::suggest::SuggestionFetcher;
use crate::ui::spinner::Spinner;

/// Weather pane: the host side of the commit callback. Fetches carry the
/// same issue-order sequence discipline as suggestion lookups so a slow
/// older fetch cannot clobber a newer one.
#[derive(Debug, Default)]
pub struct WeatherPane {
    next_seq: u64,
    in_flight: Option<u64>,
    pub requested_city: Option<String>,
    pub conditions: Option<CurrentConditions>,
    pub error: Option<String>,
}

impl WeatherPane {
    pub fn begin(&mut self, city: &str) -> u64 {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.requested_city = Some(city.to_string());
        self.error = None;
        self.next_seq
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
            return true;
        }
        false
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn resolve(&mut self, result: Result<CurrentConditions, ApiError>) {
        match result {
            Ok(conditions) => {
                self.conditions = Some(conditions);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub search: SearchController,
    pub fetcher: SuggestionFetcher,
    pub weather: WeatherPane,
    pub spinner: Spinner,
    pub should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_loading(&self) -> bool {
        self.fetcher.is_loading() || self.weather.is_loading()
    }
}
