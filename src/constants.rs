/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-tools-mcp/0.1.0";

/// wttr.in API base URL
pub const WTTR_API_BASE: &str = "https://wttr.in";

/// Response format requested from wttr.in (structured JSON)
pub const WTTR_FORMAT: &str = "j1";

/// Hourly sample used as a stand-in for midday conditions
pub const REPRESENTATIVE_HOUR_INDEX: usize = 4;

/// Forecast days returned when the caller does not ask for a count
pub const DEFAULT_FORECAST_DAYS: u32 = 3;

pub const SUPPORTED_FORMATS_URI: &str = "weather://supported-formats";
pub const WEATHER_CODES_URI: &str = "weather://weather-codes";
pub const TEMPERATURE_GUIDE_URI: &str = "weather://temperature-guide";

/// MIME type for every static resource
pub const RESOURCE_MIME_TYPE: &str = "text/plain";

/// Text returned for an unknown resource URI
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
