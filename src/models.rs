use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_FORECAST_DAYS, REPRESENTATIVE_HOUR_INDEX};
use crate::error::{Result, WeatherError};
use crate::units::TemperatureUnit;

// ============================================================================
// wttr.in API Models
// ============================================================================

/// wttr.in sends numbers as strings; accept both
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Number(f64),
    Text(String),
}

impl WireNumber {
    fn parse<T: FromStr>(&self, field: &str) -> Result<T>
    where
        T: TryFromF64,
    {
        match self {
            WireNumber::Number(n) => T::try_from_f64(*n)
                .ok_or_else(|| WeatherError::Parse(format!("{field}: {n} is out of range"))),
            WireNumber::Text(s) => s
                .trim()
                .parse::<T>()
                .map_err(|_| WeatherError::Parse(format!("{field}: '{s}' is not a number"))),
        }
    }
}

/// Lossless-enough narrowing from a JSON number
pub trait TryFromF64: Sized {
    fn try_from_f64(n: f64) -> Option<Self>;
}

impl TryFromF64 for f64 {
    fn try_from_f64(n: f64) -> Option<Self> {
        Some(n)
    }
}

impl TryFromF64 for u32 {
    fn try_from_f64(n: f64) -> Option<Self> {
        (n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64).then_some(n as u32)
    }
}

#[derive(Debug, Deserialize)]
pub struct WttrResponse {
    pub current_condition: Vec<CurrentConditionWire>,
    pub weather: Vec<DailyWire>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentConditionWire {
    #[serde(rename = "temp_C")]
    pub temp_c: WireNumber,
    #[serde(rename = "temp_F")]
    pub temp_f: WireNumber,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: WireNumber,
    pub humidity: WireNumber,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: WireNumber,
    #[serde(rename = "weatherDesc", default, deserialize_with = "null_as_empty")]
    pub weather_desc: Vec<DescriptionWire>,
}

#[derive(Debug, Deserialize)]
pub struct DailyWire {
    pub date: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: WireNumber,
    #[serde(rename = "mintempC")]
    pub min_temp_c: WireNumber,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hourly: Vec<HourlyWire>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyWire {
    #[serde(rename = "chanceofrain")]
    pub chance_of_rain: WireNumber,
    #[serde(rename = "precipMM")]
    pub precip_mm: WireNumber,
    #[serde(rename = "weatherDesc", default, deserialize_with = "null_as_empty")]
    pub weather_desc: Vec<DescriptionWire>,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionWire {
    pub value: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_description(descriptions: &[DescriptionWire]) -> String {
    descriptions
        .first()
        .map(|d| d.value.trim().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Weather Snapshot
// ============================================================================

/// One parsed wttr.in response, used for the duration of a single tool call
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentCondition,
    pub daily_forecast: Vec<DayForecast>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCondition {
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub date: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub hourly: Vec<HourlySample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub chance_of_rain: u32,
    pub precipitation_mm: f64,
    pub description: String,
}

impl DayForecast {
    /// Hourly sample reported as the day's conditions, if the day has one
    pub fn representative_hour(&self) -> Option<&HourlySample> {
        self.hourly.get(REPRESENTATIVE_HOUR_INDEX)
    }

    pub fn chances_of_rain(&self) -> Vec<u32> {
        self.hourly.iter().map(|h| h.chance_of_rain).collect()
    }
}

impl TryFrom<WttrResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(response: WttrResponse) -> Result<Self> {
        let current = response
            .current_condition
            .first()
            .ok_or_else(|| WeatherError::Parse("current_condition is empty".to_string()))?;

        if response.weather.is_empty() {
            return Err(WeatherError::Parse("weather is empty".to_string()));
        }

        let current = CurrentCondition {
            temperature_c: current.temp_c.parse("temp_C")?,
            temperature_f: current.temp_f.parse("temp_F")?,
            feels_like_c: current.feels_like_c.parse("FeelsLikeC")?,
            humidity_pct: current.humidity.parse("humidity")?,
            wind_speed_kmh: current.windspeed_kmph.parse("windspeedKmph")?,
            description: first_description(&current.weather_desc),
        };

        let daily_forecast = response
            .weather
            .iter()
            .map(|day| -> Result<DayForecast> {
                let hourly = day
                    .hourly
                    .iter()
                    .map(|hour| -> Result<HourlySample> {
                        Ok(HourlySample {
                            chance_of_rain: hour.chance_of_rain.parse("chanceofrain")?,
                            precipitation_mm: hour.precip_mm.parse("precipMM")?,
                            description: first_description(&hour.weather_desc),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(DayForecast {
                    date: day.date.clone(),
                    max_temp_c: day.max_temp_c.parse("maxtempC")?,
                    min_temp_c: day.min_temp_c.parse("mintempC")?,
                    hourly,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            current,
            daily_forecast,
        })
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    #[schemars(description = "City name, airport code, or coordinates")]
    pub location: String,
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    #[schemars(description = "City name, airport code, or coordinates")]
    pub location: String,
    #[serde(default = "default_forecast_days")]
    #[schemars(description = "Number of days for forecast (1-3)", range(min = 1, max = 3))]
    pub days: u32,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompareWeatherRequest {
    #[schemars(description = "First location to compare")]
    pub location1: String,
    #[schemars(description = "Second location to compare")]
    pub location2: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ConvertTemperatureRequest {
    #[schemars(description = "Temperature value to convert")]
    pub temp: f64,
    #[schemars(description = "Source unit: C, F, or K")]
    pub from_unit: TemperatureUnit,
    #[schemars(description = "Target unit: C, F, or K")]
    pub to_unit: TemperatureUnit,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CheckRainProbabilityRequest {
    #[schemars(description = "City name or coordinates")]
    pub location: String,
}
