//! State version output data models

use serde::Deserialize;

use crate::error::{Result, TfeError};
use crate::hcp::traits::{PaginatedResponse, TfeResource};
use crate::hcp::{Pagination, PaginationMeta};

/// JSON-API type of a state version output resource
pub const RESOURCE_TYPE: &str = "state-version-outputs";

/// A named output value from a Terraform state version
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionOutput {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub attributes: StateVersionOutputAttributes,
}

/// State version output attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionOutputAttributes {
    pub name: String,

    #[serde(default)]
    pub sensitive: bool,

    /// Declared value type, e.g. "string", "array", "object"
    #[serde(rename = "type", default)]
    pub output_type: String,

    /// Output value; any JSON type, `Null` when the backend omits it
    #[serde(default)]
    pub value: serde_json::Value,

    /// Structured type descriptor, only sent by newer backends
    #[serde(rename = "detailed-type", default)]
    pub detailed_type: Option<serde_json::Value>,
}

impl TfeResource for StateVersionOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl StateVersionOutput {
    /// Whether UIs should hide the value by default
    pub fn is_sensitive(&self) -> bool {
        self.attributes.sensitive
    }

    /// Declared value type
    pub fn output_type(&self) -> &str {
        &self.attributes.output_type
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.attributes.value
    }

    pub fn detailed_type(&self) -> Option<&serde_json::Value> {
        self.attributes.detailed_type.as_ref()
    }

    /// Reject documents whose primary resource is some other type
    pub(crate) fn ensure_resource_type(&self) -> Result<()> {
        match self.resource_type.as_deref() {
            None | Some(RESOURCE_TYPE) => Ok(()),
            Some(other) => Err(TfeError::Json(format!(
                "expected resource type '{}', got '{}'",
                RESOURCE_TYPE, other
            ))),
        }
    }
}

/// Outputs attached to a single state version
#[derive(Deserialize, Debug, Default)]
pub struct StateVersionOutputsList {
    #[serde(rename = "data")]
    pub items: Vec<StateVersionOutput>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl StateVersionOutputsList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an output by name or ID
    pub fn find(&self, input: &str) -> Option<&StateVersionOutput> {
        self.items.iter().find(|o| o.matches(input))
    }

    /// Pagination details, if the backend sent any
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination.as_ref())
    }
}

impl PaginatedResponse<StateVersionOutput> for StateVersionOutputsList {
    fn into_data(self) -> Vec<StateVersionOutput> {
        self.items
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}
