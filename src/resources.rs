use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

use crate::constants::{
    RESOURCE_MIME_TYPE, RESOURCE_NOT_FOUND, SUPPORTED_FORMATS_URI, TEMPERATURE_GUIDE_URI,
    WEATHER_CODES_URI,
};

/// A static, URI-addressed text document
#[derive(Debug, Clone)]
pub struct ResourceDocument {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

/// Read-only set of reference documents served alongside the tools
#[derive(Debug, Clone)]
pub struct ResourceProvider {
    documents: Vec<ResourceDocument>,
}

impl Default for ResourceProvider {
    fn default() -> Self {
        Self::new(builtin_documents())
    }
}

impl ResourceProvider {
    pub fn new(documents: Vec<ResourceDocument>) -> Self {
        Self { documents }
    }

    pub fn descriptors(&self) -> Vec<Resource> {
        self.documents
            .iter()
            .map(|doc| {
                let mut raw = RawResource::new(doc.uri, doc.name);
                raw.description = Some(doc.description.to_string());
                raw.mime_type = Some(RESOURCE_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Text for `uri`, or the literal "Resource not found" for anything unregistered
    pub fn read(&self, uri: &str) -> &str {
        match self.documents.iter().find(|doc| doc.uri == uri) {
            Some(doc) => doc.text,
            None => {
                tracing::warn!(uri, "Unknown resource requested");
                RESOURCE_NOT_FOUND
            }
        }
    }

    pub fn contents(&self, uri: &str) -> ResourceContents {
        let mut contents = ResourceContents::text(self.read(uri), uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(RESOURCE_MIME_TYPE.to_string());
        }
        contents
    }
}

fn builtin_documents() -> Vec<ResourceDocument> {
    vec![
        ResourceDocument {
            uri: SUPPORTED_FORMATS_URI,
            name: "supported-formats",
            description: "List of supported location formats and examples",
            text: include_str!("../assets/supported-formats.txt"),
        },
        ResourceDocument {
            uri: WEATHER_CODES_URI,
            name: "weather-codes",
            description: "Explanation of weather condition codes",
            text: include_str!("../assets/weather-codes.txt"),
        },
        ResourceDocument {
            uri: TEMPERATURE_GUIDE_URI,
            name: "temperature-guide",
            description: "Temperature conversion formulas and reference points",
            text: include_str!("../assets/temperature-guide.txt"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_weather_codes() {
        let provider = ResourceProvider::default();
        let text = provider.read("weather://weather-codes");
        assert!(text.starts_with("Common weather conditions:"));
        assert!(text.contains("Fog/Mist - Low visibility"));
    }

    #[test]
    fn unknown_uri_is_soft_failure() {
        let provider = ResourceProvider::default();
        assert_eq!(provider.read("weather://nonexistent"), "Resource not found");
    }

    #[test]
    fn contents_are_plain_text() {
        let provider = ResourceProvider::default();
        match provider.contents("weather://temperature-guide") {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, "weather://temperature-guide");
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
                assert!(text.contains("37°C = 98.6°F = 310.15K"));
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[test]
    fn lists_three_descriptors() {
        let descriptors = ResourceProvider::default().descriptors();
        let uris: Vec<_> = descriptors.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec![
                "weather://supported-formats",
                "weather://weather-codes",
                "weather://temperature-guide",
            ]
        );
        assert!(descriptors
            .iter()
            .all(|r| r.mime_type.as_deref() == Some("text/plain")));
    }
}
