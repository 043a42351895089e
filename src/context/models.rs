//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level context configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    /// Name of the currently active context
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

impl ContextConfig {
    /// Comma-separated context names, for error messages
    pub fn available_names(&self) -> String {
        if self.contexts.is_empty() {
            return "<none>".to_string();
        }
        self.contexts.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// A named context: where the platform lives and which tenant to act on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Context {
    /// Platform base URL, e.g. https://acme.example.com
    pub url: String,
    /// Tenant id used as the object store layer id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// API token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
