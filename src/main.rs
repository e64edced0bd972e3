use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_tools_mcp::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_tools_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather tools server");

    let weather = Weather::new()?;
    tracing::debug!(tools = ?weather.registry().names(), "Registered tools");

    let server = weather.serve(rmcp::transport::stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
