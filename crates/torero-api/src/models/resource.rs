//! Generic named resource model.

use serde::{Deserialize, Serialize};

/// A named torero resource with a type and tool-specific metadata.
///
/// Decorators, repositories, and registries all share this shape: torero
/// owns their type vocabularies and per-type fields, which the facade passes
/// through in the flattened metadata map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name.
    pub name: String,

    /// Resource type as reported by torero.
    #[serde(rename = "type", default)]
    pub resource_type: String,

    /// Any additional fields torero emits for this resource.
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}
