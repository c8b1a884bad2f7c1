use crate::net::client::{ApiClient, ApiError};
use serde::Deserialize;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Current conditions for one city, flattened from the OpenWeather
/// response into what the weather pane renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub description: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_deg: u16,
    pub sunrise: i64,
    pub sunset: i64,
    /// Seconds east of UTC, as reported by the API.
    pub timezone_offset: i64,
    pub observed_at: i64,
}

pub trait WeatherLookup: Send + Sync {
    fn current(&self, city: &str) -> Result<CurrentConditions, ApiError>;
}

impl WeatherLookup for ApiClient {
    fn current(&self, city: &str) -> Result<CurrentConditions, ApiError> {
        let key = self.api_key()?;
        let response: WeatherResponse = self
            .get_json(
                WEATHER_URL,
                &[("q", city), ("units", "metric"), ("appid", key)],
            )
            .map_err(|err| match err {
                ApiError::Status(404) => ApiError::CityNotFound,
                other => other,
            })?;
        Ok(response.into_conditions())
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    dt: i64,
    timezone: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: WindBlock,
    #[serde(default)]
    sys: SysBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

impl WeatherResponse {
    fn into_conditions(self) -> CurrentConditions {
        let description = self
            .weather
            .into_iter()
            .next()
            .map(|block| block.description)
            .unwrap_or_default();
        CurrentConditions {
            city: self.name,
            country: self.sys.country,
            description,
            temp_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed_mps: self.wind.speed,
            wind_deg: self.wind.deg,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            timezone_offset: self.timezone,
            observed_at: self.dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeatherResponse;

    #[test]
    fn decodes_and_flattens_weather_response() {
        let body = r#"{
            "name": "London",
            "dt": 1756200000,
            "timezone": 3600,
            "main": {"temp": 18.4, "feels_like": 17.9, "humidity": 63, "pressure": 1014},
            "weather": [{"description": "scattered clouds"}],
            "wind": {"speed": 4.6, "deg": 250},
            "sys": {"country": "GB", "sunrise": 1756181580, "sunset": 1756231500}
        }"#;
        let response: WeatherResponse = serde_json::from_str(body).expect("decode");
        let conditions = response.into_conditions();
        assert_eq!(conditions.city, "London");
        assert_eq!(conditions.country.as_deref(), Some("GB"));
        assert_eq!(conditions.description, "scattered clouds");
        assert_eq!(conditions.humidity_pct, 63);
        assert_eq!(conditions.wind_deg, 250);
        assert_eq!(conditions.timezone_offset, 3600);
    }

    #[test]
    fn tolerates_missing_optional_blocks() {
        let body = r#"{
            "name": "Testville",
            "dt": 0,
            "timezone": 0,
            "main": {"temp": 1.0, "feels_like": 0.0, "humidity": 50, "pressure": 1000}
        }"#;
        let response: WeatherResponse = serde_json::from_str(body).expect("decode");
        let conditions = response.into_conditions();
        assert_eq!(conditions.description, "");
        assert_eq!(conditions.wind_speed_mps, 0.0);
        assert_eq!(conditions.country, None);
    }
}
