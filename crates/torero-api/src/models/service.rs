//! Service resource model.

use serde::{Deserialize, Serialize};

/// Service types torero can register and execute.
pub const SERVICE_TYPES: &[&str] = &["ansible-playbook", "python-script", "opentofu-plan"];

/// An automation unit registered in torero: a playbook, a script, or an
/// infrastructure plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Unique service name.
    pub name: String,

    /// Service type (see [`SERVICE_TYPES`]).
    #[serde(rename = "type")]
    pub service_type: String,

    /// Tags attached to the service.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any additional fields torero emits for this service.
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Service {
    /// Membership test used by the `tag` list filter.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
