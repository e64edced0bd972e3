use std::sync::Arc;

use rmcp::{
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
        ServerHandler,
    },
    model::{
        CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
        Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool, tool_router, ErrorData as McpError, RoleServer,
};

use crate::client::WeatherClient;
use crate::config::WeatherConfig;
use crate::error::Result;
use crate::formatters::{
    format_comparison, format_conversion, format_current_weather, format_forecast,
    format_rain_probability,
};
use crate::models::{
    CheckRainProbabilityRequest, CompareWeatherRequest, ConvertTemperatureRequest,
    GetCurrentWeatherRequest, GetForecastRequest,
};
use crate::prompts;
use crate::registry::ToolRegistry;
use crate::resources::ResourceProvider;
use crate::units;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: WeatherClient,
    registry: Arc<ToolRegistry>,
    resources: Arc<ResourceProvider>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service talking to wttr.in with the built-in resources
    pub fn new() -> Result<Self> {
        Self::with_config(&WeatherConfig::default())
    }

    pub fn with_config(config: &WeatherConfig) -> Result<Self> {
        Self::with_parts(WeatherClient::new(config)?, ResourceProvider::default())
    }

    pub fn with_parts(client: WeatherClient, resources: ResourceProvider) -> Result<Self> {
        let tool_router = Self::tool_router();
        let registry = ToolRegistry::new(tool_router.list_all())?;

        Ok(Self {
            client,
            registry: Arc::new(registry),
            resources: Arc::new(resources),
            tool_router,
        })
    }

    /// Descriptors for every tool this service exposes
    pub fn tool_descriptors() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

#[tool_router]
impl Weather {
    /// Gets current conditions for a location
    #[tool(description = "Get current weather conditions for a location")]
    pub async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current weather for: {}", request.location);

        let snapshot = self.client.fetch_weather(&request.location).await?;
        let formatted = format_current_weather(&request.location, &snapshot);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets a multi-day forecast for a location
    #[tool(description = "Get weather forecast for upcoming days")]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting {}-day forecast for: {}",
            request.days,
            request.location
        );

        let snapshot = self.client.fetch_weather(&request.location).await?;
        let formatted = format_forecast(&request.location, &snapshot, request.days as usize);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Compares current temperatures of two locations
    #[tool(description = "Compare current weather between two locations")]
    pub async fn compare_weather(
        &self,
        Parameters(request): Parameters<CompareWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Comparing weather: {} vs {}",
            request.location1,
            request.location2
        );

        let (first, second) = tokio::try_join!(
            self.client.fetch_weather(&request.location1),
            self.client.fetch_weather(&request.location2),
        )?;
        let formatted = format_comparison(&request.location1, &first, &request.location2, &second);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Converts a temperature between Celsius, Fahrenheit and Kelvin
    #[tool(description = "Convert temperature between Celsius, Fahrenheit, and Kelvin")]
    pub async fn convert_temperature(
        &self,
        Parameters(request): Parameters<ConvertTemperatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Converting {} from {} to {}",
            request.temp,
            request.from_unit,
            request.to_unit
        );

        let result = units::convert(request.temp, request.from_unit, request.to_unit);
        let formatted = format_conversion(request.temp, request.from_unit, request.to_unit, result);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Estimates today's chance of rain for a location
    #[tool(description = "Check if it's likely to rain today")]
    pub async fn check_rain_probability(
        &self,
        Parameters(request): Parameters<CheckRainProbabilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Checking rain probability for: {}", request.location);

        let snapshot = self.client.fetch_weather(&request.location).await?;
        let formatted = format_rain_probability(&request.location, &snapshot);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}

impl Weather {
    /// Validates a call against the registry, then runs the matching handler.
    ///
    /// Unknown names and schema violations are rejected here, before any
    /// handler (and therefore any network request) runs.
    pub async fn dispatch(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .check(&request.name, request.arguments.as_ref())
            .inspect_err(|e| tracing::warn!("Rejected call to '{}': {}", request.name, e))?;

        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }
}

impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by wttr.in. \
                Provides current conditions, 1-3 day forecasts, location comparisons, \
                rain outlooks and temperature unit conversion. Locations may be city names, \
                airport codes or 'latitude,longitude' pairs; see weather://supported-formats."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.tools().to_vec()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request, context).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            self.resources.descriptors(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::info!("Reading resource: {}", request.uri);

        Ok(ReadResourceResult {
            contents: vec![self.resources.contents(&request.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult::with_all_items(prompts::list_prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(prompts::get_prompt(&request.name)?)
    }
}
