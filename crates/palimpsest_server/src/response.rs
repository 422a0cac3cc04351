//! Response types produced by the rewriting routes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Output of the rewrite endpoint.
///
/// Optional fields are present only when the corresponding option was
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RewriteResponse {
    /// Rewritten text
    rewritten: String,
    /// Summary of the rewritten text
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    summary: Option<String>,
    /// Expansion of the rewritten text
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    expansion: Option<String>,
    /// Placeholder plagiarism figure; not a real check
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    plagiarism: Option<f64>,
}

impl RewriteResponse {
    /// Returns a builder for constructing a RewriteResponse.
    pub fn builder() -> RewriteResponseBuilder {
        RewriteResponseBuilder::default()
    }
}
