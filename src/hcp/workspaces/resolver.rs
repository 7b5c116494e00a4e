//! Workspace resolution: accept either an ID or a name

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, TfeError};
use crate::hcp::TfeClient;

/// Target type for workspace resolution
#[derive(Debug, PartialEq, Eq)]
pub enum WorkspaceTarget {
    /// Workspace ID (ws-xxx)
    Id(String),
    /// Workspace name
    Name(String),
}

impl WorkspaceTarget {
    /// Parse target string to determine workspace type
    pub fn parse(target: &str) -> Self {
        if target.starts_with("ws-") {
            WorkspaceTarget::Id(target.to_string())
        } else {
            WorkspaceTarget::Name(target.to_string())
        }
    }
}

/// Resolve a workspace ID or name to a workspace ID
///
/// IDs are returned untouched without a request. Names are looked up in
/// `org`, which is required for them.
pub async fn resolve_workspace_id(
    client: &TfeClient,
    cancel: &CancellationToken,
    target: &str,
    org: Option<&str>,
) -> Result<String> {
    match WorkspaceTarget::parse(target) {
        WorkspaceTarget::Id(id) => Ok(id),
        WorkspaceTarget::Name(name) => {
            let org = org.ok_or_else(|| {
                TfeError::Config(format!(
                    "workspace '{}' looks like a name; pass --org or use its ID (ws-...)",
                    name
                ))
            })?;

            let ws = client.read_workspace_by_name(cancel, org, &name).await?;
            debug!("Resolved workspace '{}' in '{}' to {}", name, org, ws.id);
            Ok(ws.id)
        }
    }
}
