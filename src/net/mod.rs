pub mod client;
pub mod executor;
pub mod format;
pub mod geocode;
pub mod weather;

pub use client::{ApiClient, ApiError};
pub use executor::{NetCompletion, NetExecutor};
pub use geocode::{GeocodeLookup, LocationSuggestion, SUGGEST_LIMIT};
pub use weather::{CurrentConditions, WeatherLookup};
