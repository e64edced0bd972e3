use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Temperature scale accepted by `convert_temperature`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum TemperatureUnit {
    C,
    F,
    K,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            TemperatureUnit::C => "C",
            TemperatureUnit::F => "F",
            TemperatureUnit::K => "K",
        };
        f.write_str(symbol)
    }
}

/// Converts `value` between scales at full precision, going through Celsius.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::C => value,
        TemperatureUnit::F => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::K => value - 273.15,
    };

    match to {
        TemperatureUnit::C => celsius,
        TemperatureUnit::F => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::K => celsius + 273.15,
    }
}
