//! MCP server exposing wttr.in weather lookups, temperature conversion and
//! a few static reference documents.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod service;
pub mod units;

pub use client::WeatherClient;
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use service::Weather;
