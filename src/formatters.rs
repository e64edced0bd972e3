use std::cmp::Ordering;

use crate::models::WeatherSnapshot;
use crate::units::TemperatureUnit;

/// Formats current conditions into a human-readable string
pub fn format_current_weather(location: &str, snapshot: &WeatherSnapshot) -> String {
    let current = &snapshot.current;
    format!(
        "Weather in {}:\nTemperature: {}\u{00b0}C ({}\u{00b0}F)\nConditions: {}\nFeels like: {}\u{00b0}C\nHumidity: {}%\nWind: {} km/h",
        location,
        current.temperature_c,
        current.temperature_f,
        current.description,
        current.feels_like_c,
        current.humidity_pct,
        current.wind_speed_kmh
    )
}

/// Formats the first `days` forecast entries into a human-readable string
pub fn format_forecast(location: &str, snapshot: &WeatherSnapshot, days: usize) -> String {
    let mut output = format!("Forecast for {}:\n\n", location);
    for day in snapshot.daily_forecast.iter().take(days) {
        output.push_str(&format!(
            "{}:\n  High: {}\u{00b0}C, Low: {}\u{00b0}C\n",
            day.date, day.max_temp_c, day.min_temp_c
        ));
        if let Some(hour) = day.representative_hour() {
            output.push_str(&format!(
                "  Conditions: {}\n  Precipitation: {:.1}mm\n",
                hour.description, hour.precipitation_mm
            ));
        }
        output.push('\n');
    }
    output
}

/// Outcome of comparing two whole-degree Celsius readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureComparison {
    /// First reading, truncated toward zero
    pub first: i64,
    /// Second reading, truncated toward zero
    pub second: i64,
    pub ordering: Ordering,
    pub difference: i64,
}

impl TemperatureComparison {
    /// Compares after truncating both readings toward zero
    pub fn between(first_c: f64, second_c: f64) -> Self {
        let first = first_c.trunc() as i64;
        let second = second_c.trunc() as i64;
        Self {
            first,
            second,
            ordering: first.cmp(&second),
            difference: (first - second).abs(),
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self.ordering {
            Ordering::Greater => "warmer",
            Ordering::Less => "cooler",
            Ordering::Equal => "the same temperature as",
        }
    }
}

/// Formats a side-by-side comparison of two locations
pub fn format_comparison(
    location1: &str,
    snapshot1: &WeatherSnapshot,
    location2: &str,
    snapshot2: &WeatherSnapshot,
) -> String {
    let comparison = TemperatureComparison::between(
        snapshot1.current.temperature_c,
        snapshot2.current.temperature_c,
    );

    format!(
        "{}: {}\u{00b0}C, {}\n{}: {}\u{00b0}C, {}\n\n{} is {} {} ({}\u{00b0}C difference)",
        location1,
        comparison.first,
        snapshot1.current.description,
        location2,
        comparison.second,
        snapshot2.current.description,
        location1,
        comparison.phrase(),
        location2,
        comparison.difference
    )
}

/// Renders an input reading the way it was received as a float: whole
/// values keep one decimal (`100.0`), others print in full (`36.6`)
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Formats a unit conversion, rounding the result to one decimal
pub fn format_conversion(
    temp: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
    result: f64,
) -> String {
    format!(
        "{}\u{00b0}{} = {:.1}\u{00b0}{}",
        format_reading(temp),
        from,
        result,
        to
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainLevel {
    High,
    Moderate,
    Low,
}

impl RainLevel {
    /// Classifies a mean chance of rain (percent)
    pub fn from_mean(mean: f64) -> Self {
        if mean > 70.0 {
            RainLevel::High
        } else if mean > 40.0 {
            RainLevel::Moderate
        } else {
            RainLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RainLevel::High => "High",
            RainLevel::Moderate => "Moderate",
            RainLevel::Low => "Low",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RainLevel::High => "Bring an umbrella!",
            RainLevel::Moderate => "Maybe bring an umbrella",
            RainLevel::Low => "You should be fine without an umbrella",
        }
    }
}

/// Arithmetic mean of hourly chances; a day with no samples counts as 0
pub fn mean_chance_of_rain(chances: &[u32]) -> f64 {
    if chances.is_empty() {
        return 0.0;
    }
    let total: u64 = chances.iter().map(|&c| u64::from(c)).sum();
    total as f64 / chances.len() as f64
}

/// Formats today's rain outlook for a location
pub fn format_rain_probability(location: &str, snapshot: &WeatherSnapshot) -> String {
    let chances = snapshot
        .daily_forecast
        .first()
        .map(|today| today.chances_of_rain())
        .unwrap_or_default();
    let mean = mean_chance_of_rain(&chances);
    let level = RainLevel::from_mean(mean);

    // `{:.0}` rounds exact halves to even (80.5 -> 80)
    format!(
        "{} chance of rain in {} today ({:.0}%)\n{}",
        level.label(),
        location,
        mean,
        level.advice()
    )
}
