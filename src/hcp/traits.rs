//! Common traits and document wrappers for TFE resources

use crate::hcp::PaginationMeta;
use serde::Deserialize;

/// Common trait for TFE resources that carry an ID and a name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// Trait for API responses that contain paginated data
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// JSON-API document carrying a single primary resource
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}
