use crate::net::format::{
    condition_symbol, country_flag, display_label, format_local_time, wind_direction,
};
use crate::state::AppState;
use crate::ui::span::{Span, SpanLine, plain_line};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

pub const SEARCH_ROW: u16 = 2;
pub const QUERY_COL: u16 = 8; // after "Search: "
pub const SUGGEST_ROW_START: u16 = 3;

/// What a pointer event at a given row lands on. Row geometry is owned
/// here so rendering and hit-testing can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SearchBox,
    Suggestion(usize),
    Outside,
}

pub fn hit_test(state: &AppState, row: u16) -> HitTarget {
    if row == SEARCH_ROW {
        return HitTarget::SearchBox;
    }
    if state.search.is_showing() {
        let count = state.search.suggestions().len() as u16;
        if row >= SUGGEST_ROW_START && row < SUGGEST_ROW_START + count {
            return HitTarget::Suggestion((row - SUGGEST_ROW_START) as usize);
        }
    }
    HitTarget::Outside
}

#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<(u16, u16)>,
}

pub fn render(state: &AppState) -> Frame {
    let mut lines = Vec::<SpanLine>::new();

    lines.push(vec![
        Span::styled("skycast", Style::new().color(Color::Cyan).bold()),
        Span::styled("  Ctrl+C to quit", Style::new().color(Color::DarkGrey)),
    ]);
    lines.push(Vec::new());

    lines.push(vec![
        Span::styled("Search: ", Style::new().color(Color::DarkGrey)),
        Span::new(state.search.query()),
    ]);

    if state.search.is_showing() {
        for (index, suggestion) in state.search.suggestions().iter().enumerate() {
            let active = state.search.highlight() == Some(index);
            let cursor = if active { "❯" } else { " " };
            let label_style = if active {
                Style::new().color(Color::Cyan).bold()
            } else {
                Style::new().color(Color::DarkGrey)
            };
            lines.push(vec![
                Span::styled(format!("  {cursor} "), Style::new().color(Color::Yellow)),
                Span::styled(display_label(suggestion), label_style),
            ]);
        }
    }

    if state.fetcher.is_loading() {
        lines.push(vec![Span::styled(
            format!("  {} searching…", state.spinner.frame()),
            Style::new().color(Color::DarkGrey),
        )]);
    }

    lines.push(Vec::new());
    render_weather(state, &mut lines);

    Frame {
        cursor: Some((cursor_column(state), SEARCH_ROW)),
        lines,
    }
}

fn render_weather(state: &AppState, lines: &mut Vec<SpanLine>) {
    if state.weather.is_loading() {
        let city = state.weather.requested_city.as_deref().unwrap_or("");
        lines.push(vec![Span::styled(
            format!("{} fetching weather for {city}…", state.spinner.frame()),
            Style::new().color(Color::DarkGrey),
        )]);
        return;
    }

    if let Some(error) = &state.weather.error {
        lines.push(vec![Span::styled(
            format!("✗ {error}"),
            Style::new().color(Color::Red),
        )]);
        lines.push(Vec::new());
    }

    let Some(conditions) = &state.weather.conditions else {
        if state.weather.error.is_none() {
            lines.push(vec![Span::styled(
                "Type a city name and press Enter.",
                Style::new().color(Color::DarkGrey),
            )]);
        }
        return;
    };

    let mut header = conditions.city.clone();
    if let Some(country) = &conditions.country {
        header.push_str(&format!(", {country} {}", country_flag(country)));
    }
    lines.push(vec![Span::styled(header, Style::new().bold())]);

    lines.push(plain_line(format!(
        "{} {}",
        condition_symbol(&conditions.description),
        conditions.description
    )));
    lines.push(plain_line(format!(
        "Temp      {:.1}°C  (feels like {:.1}°C)",
        conditions.temp_c, conditions.feels_like_c
    )));
    lines.push(plain_line(format!(
        "Humidity  {}%   Pressure {} hPa",
        conditions.humidity_pct, conditions.pressure_hpa
    )));
    lines.push(plain_line(format!(
        "Wind      {:.1} m/s {}",
        conditions.wind_speed_mps,
        wind_direction(conditions.wind_deg)
    )));
    lines.push(plain_line(format!(
        "Sunrise   {}   Sunset {}",
        format_local_time(conditions.sunrise, conditions.timezone_offset),
        format_local_time(conditions.sunset, conditions.timezone_offset)
    )));
    lines.push(vec![Span::styled(
        format!(
            "Updated   {} local time",
            format_local_time(conditions.observed_at, conditions.timezone_offset)
        ),
        Style::new().color(Color::DarkGrey),
    )]);
}

fn cursor_column(state: &AppState) -> u16 {
    let query = state.search.query();
    let upto: String = query.chars().take(state.search.cursor()).collect();
    QUERY_COL + upto.as_str().width() as u16
}
