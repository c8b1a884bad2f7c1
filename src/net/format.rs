use crate::net::geocode::LocationSuggestion;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass rose, 22.5° per sector.
pub fn wind_direction(degrees: u16) -> &'static str {
    let sector = ((f64::from(degrees) / 22.5).round() as usize) % 16;
    COMPASS[sector]
}

pub fn condition_symbol(description: &str) -> &'static str {
    let desc = description.to_lowercase();

    if desc.contains("thunderstorm") {
        return "⛈";
    }
    if desc.contains("rain") || desc.contains("drizzle") {
        return "🌧";
    }
    if desc.contains("snow") {
        return "❄";
    }
    if desc.contains("cloud") {
        return "☁";
    }
    if desc.contains("clear") || desc.contains("sunny") {
        return "☀";
    }
    if desc.contains("mist") || desc.contains("fog") || desc.contains("haze") {
        return "🌫";
    }

    "🌤"
}

/// Regional-indicator flag for a two-letter ISO country code.
pub fn country_flag(country_code: &str) -> String {
    country_code
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(|ch| {
            let offset = ch.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(0x1F1E6 + offset).unwrap_or(ch)
        })
        .collect()
}

/// HH:MM in the city's local time. `offset` is seconds east of UTC as
/// reported by the weather API, so no timezone database is involved.
pub fn format_local_time(unix_ts: i64, offset: i64) -> String {
    let local = unix_ts + offset;
    let seconds_of_day = local.rem_euclid(86_400);
    let hours = seconds_of_day / 3_600;
    let minutes = (seconds_of_day % 3_600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// "name, state, country" when the region is known, "name, country"
/// otherwise. Display only — commits always carry the bare name.
pub fn display_label(suggestion: &LocationSuggestion) -> String {
    match suggestion.state.as_deref() {
        Some(state) => format!("{}, {}, {}", suggestion.name, state, suggestion.country),
        None => format!("{}, {}", suggestion.name, suggestion.country),
    }
}
