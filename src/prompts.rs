use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};

use crate::error::{Result, WeatherError};

struct PromptTemplate {
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

const PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        name: "weather_planning_assistant",
        description: "Help plan activities based on weather forecast",
        text: "You are a weather planning assistant. When given a location:\n\
               1. Get the 3-day forecast\n\
               2. Check rain probability\n\
               3. Suggest outdoor vs indoor activities\n\
               4. Recommend what to pack (umbrella, sunscreen, jacket)\n\
               Be specific and practical.",
    },
    PromptTemplate {
        name: "travel_weather_comparison",
        description: "Compare weather between two cities for travel planning",
        text: "You are a travel weather advisor. When comparing two locations:\n\
               1. Use compare_weather to get current conditions\n\
               2. Get forecasts for both cities\n\
               3. Recommend which has better weather for the next 3 days\n\
               4. Mention any weather alerts or concerns\n\
               Be concise but helpful.",
    },
    PromptTemplate {
        name: "temperature_context",
        description: "Explain temperatures in multiple units with context",
        text: "When given a temperature:\n\
               1. Convert it to Celsius, Fahrenheit, and Kelvin\n\
               2. Reference the temperature guide resource\n\
               3. Provide context (e.g., \"warmer than room temperature\", \"freezing point\")\n\
               4. Suggest appropriate clothing\n\
               Use the weather://temperature-guide resource.",
    },
];

pub fn list_prompts() -> Vec<Prompt> {
    PROMPTS
        .iter()
        .map(|p| Prompt::new(p.name, Some(p.description), None))
        .collect()
}

pub fn get_prompt(name: &str) -> Result<GetPromptResult> {
    let prompt = PROMPTS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| WeatherError::UnknownPrompt(name.to_string()))?;

    Ok(GetPromptResult {
        description: Some(prompt.description.to_string()),
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            prompt.text,
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    #[test]
    fn lists_three_prompts() {
        let names: Vec<_> = list_prompts().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "weather_planning_assistant",
                "travel_weather_comparison",
                "temperature_context",
            ]
        );
    }

    #[test]
    fn prompt_has_single_user_message() {
        let result = get_prompt("temperature_context").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => {
                assert!(text.contains("weather://temperature-guide"));
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn unknown_prompt_fails() {
        assert!(matches!(
            get_prompt("packing_list"),
            Err(WeatherError::UnknownPrompt(_))
        ));
    }
}
