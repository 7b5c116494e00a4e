//! TFE API client module
//!
//! The shared HTTP client, credential resolution, and the resource services
//! built on top of it.

mod client;
mod credentials;
pub mod helpers;
mod host;
pub mod state_version_outputs;
pub mod traits;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use helpers::valid_string_id;
pub use host::HostResolver;
pub use state_version_outputs::{
    run_current_command, run_get_command, StateVersionOutput, StateVersionOutputAttributes,
    StateVersionOutputs, StateVersionOutputsList,
};
pub use traits::{ApiResponse, PaginatedResponse, TfeResource};
pub use workspaces::{resolve_workspace_id, Workspace, WorkspaceTarget};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "prev-page", default)]
    pub prev_page: Option<u32>,
    #[serde(rename = "next-page", default)]
    pub next_page: Option<u32>,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
