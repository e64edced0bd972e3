use std::collections::HashMap;

use jsonschema::Validator;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

use crate::error::{Result, WeatherError};

/// Fixed set of tool descriptors plus a compiled validator for each input schema.
///
/// Built once at startup and read-only afterwards. Every call is checked here
/// before it reaches a handler, so an unknown name or a schema violation never
/// costs a network round-trip.
pub struct ToolRegistry {
    tools: Vec<Tool>,
    validators: HashMap<String, Validator>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut validators = HashMap::with_capacity(tools.len());
        for tool in &tools {
            let schema = Value::Object(tool.input_schema.as_ref().clone());
            let validator = jsonschema::validator_for(&schema).map_err(|e| {
                WeatherError::Validation(format!("schema for '{}' is invalid: {}", tool.name, e))
            })?;
            validators.insert(tool.name.to_string(), validator);
        }

        Ok(Self { tools, validators })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_ref()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Resolves `name` and checks `arguments` against its input schema
    pub fn check(&self, name: &str, arguments: Option<&JsonObject>) -> Result<&Tool> {
        let tool = self
            .get(name)
            .ok_or_else(|| WeatherError::UnknownTool(name.to_string()))?;
        let validator = self
            .validators
            .get(name)
            .ok_or_else(|| WeatherError::UnknownTool(name.to_string()))?;

        let instance = Value::Object(arguments.cloned().unwrap_or_default());
        let violations: Vec<String> = validator
            .iter_errors(&instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{}: {}", path, e)
                }
            })
            .collect();

        if violations.is_empty() {
            tracing::debug!(tool = name, "Arguments passed schema validation");
            Ok(tool)
        } else {
            Err(WeatherError::Validation(violations.join("; ")))
        }
    }
}
