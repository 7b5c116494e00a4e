//! Workspace lookup module
//!
//! Only what is needed to turn a workspace name into an ID.

mod api;
mod models;
pub mod resolver;

pub use models::{Workspace, WorkspaceAttributes};
pub use resolver::{resolve_workspace_id, WorkspaceTarget};
