#![allow(dead_code)]

use rmcp::model::CallToolResult;
use serde_json::{json, Value};
use weather_tools_mcp::{Weather, WeatherClient, WeatherConfig};
use wiremock::MockServer;

/// wttr.in-shaped body with string-encoded numbers
pub fn wttr_body(temp_c: &str, description: &str, chances: &[u32]) -> Value {
    let hourly: Vec<Value> = chances
        .iter()
        .enumerate()
        .map(|(i, chance)| {
            json!({
                "chanceofrain": chance.to_string(),
                "precipMM": format!("{}.{}", i / 10, i % 10),
                "weatherDesc": [{ "value": format!("{description} at {}00", i * 3) }]
            })
        })
        .collect();

    json!({
        "current_condition": [{
            "temp_C": temp_c,
            "temp_F": "68",
            "FeelsLikeC": "19",
            "humidity": "55",
            "windspeedKmph": "11",
            "weatherDesc": [{ "value": description }]
        }],
        "weather": [
            { "date": "2026-10-16", "maxtempC": "22", "mintempC": "12", "hourly": hourly },
            { "date": "2026-10-17", "maxtempC": "21", "mintempC": "11", "hourly": hourly },
            { "date": "2026-10-18", "maxtempC": "19", "mintempC": "10", "hourly": hourly }
        ]
    })
}

pub fn config_for(server: &MockServer) -> WeatherConfig {
    WeatherConfig::default().with_api_base(server.uri())
}

pub fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(&config_for(server)).unwrap()
}

pub fn weather_for(server: &MockServer) -> Weather {
    Weather::with_config(&config_for(server)).unwrap()
}

pub fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.clone())
        .collect::<Vec<_>>()
        .join("\n")
}
