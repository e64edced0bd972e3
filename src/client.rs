use reqwest::Client;

use crate::config::WeatherConfig;
use crate::constants::WTTR_FORMAT;
use crate::error::{Result, WeatherError};
use crate::models::{WeatherSnapshot, WttrResponse};

/// Thin wttr.in client: one GET per lookup, no caching or retries
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_base: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.api_base.clone(),
        })
    }

    /// URL for a location lookup, with the location percent-encoded as a path segment
    pub fn weather_url(&self, location: &str) -> String {
        format!(
            "{}/{}?format={}",
            self.api_base,
            urlencoding::encode(location),
            WTTR_FORMAT
        )
    }

    /// Fetches and parses the current conditions and forecast for `location`
    pub async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot> {
        let url = self.weather_url(location);
        tracing::debug!("Fetching weather: {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, location, "Weather API returned non-success status");
            return Err(WeatherError::Upstream { status });
        }

        let body = response.text().await?;
        let wire: WttrResponse = serde_json::from_str(&body)?;

        WeatherSnapshot::try_from(wire)
    }
}
