//! Request types accepted by the rewriting routes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_mode() -> String {
    "Polished".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

/// Input accepted by the rewrite endpoint.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RewriteRequest {
    /// Text to rewrite
    #[serde(default)]
    #[builder(default)]
    text: String,
    /// Tone label embedded in the rewrite prompt
    #[serde(default = "default_mode")]
    #[builder(default = "default_mode()")]
    mode: String,
    /// Target language for the rewrite
    #[serde(default = "default_language")]
    #[builder(default = "default_language()")]
    language: String,
    /// Also summarize the rewritten text
    #[serde(default)]
    #[builder(default)]
    summarize_option: bool,
    /// Also expand the rewritten text
    #[serde(default)]
    #[builder(default)]
    expand_option: bool,
    /// Attach the placeholder plagiarism figure
    #[serde(default)]
    #[builder(default)]
    plagiarism_check: bool,
}

impl RewriteRequest {
    /// Returns a builder for constructing a RewriteRequest.
    pub fn builder() -> RewriteRequestBuilder {
        RewriteRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_route_defaults() {
        let request: RewriteRequest =
            serde_json::from_str(r#"{ "text": "hello" }"#).expect("parseable request");
        assert_eq!(request.text(), "hello");
        assert_eq!(request.mode(), "Polished");
        assert_eq!(request.language(), "English");
        assert!(!request.summarize_option());
        assert!(!request.expand_option());
        assert!(!request.plagiarism_check());
    }
}
