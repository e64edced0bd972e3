use reqwest::StatusCode;
use rmcp::{model::ErrorCode, ErrorData as McpError};
use thiserror::Error;

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Arguments violate the tool's input schema
    #[error("invalid arguments: {0}")]
    Validation(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("unknown prompt: {0}")]
    UnknownPrompt(String),

    /// Weather endpoint answered with a non-success status
    #[error("weather API returned status {status}")]
    Upstream { status: StatusCode },

    #[error("malformed weather data: {0}")]
    Parse(String),

    #[error("weather API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

impl From<WeatherError> for McpError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Validation(_) | WeatherError::UnknownPrompt(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            WeatherError::UnknownTool(_) => {
                McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
            }
            WeatherError::Upstream { .. } | WeatherError::Parse(_) | WeatherError::Http(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_and_validation_map_to_different_codes() {
        let unknown: McpError = WeatherError::UnknownTool("nope".into()).into();
        let invalid: McpError = WeatherError::Validation("days".into()).into();

        assert_eq!(unknown.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn upstream_status_is_reported() {
        let err = WeatherError::Upstream {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "weather API returned status 404 Not Found");

        let mcp: McpError = err.into();
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}
