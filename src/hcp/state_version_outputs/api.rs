//! State version outputs API operations

use log::debug;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::config::api;
use crate::error::Result;
use crate::hcp::helpers::encode_id;
use crate::hcp::traits::ApiResponse;
use crate::hcp::TfeClient;

use super::models::{StateVersionOutput, StateVersionOutputsList};

/// Read-only access to state version outputs
///
/// Borrows the shared client; each call is an independent GET with no
/// retries and no caching.
pub struct StateVersionOutputs<'a> {
    client: &'a TfeClient,
}

impl TfeClient {
    /// State version outputs service backed by this client
    pub fn state_version_outputs(&self) -> StateVersionOutputs<'_> {
        StateVersionOutputs::new(self)
    }
}

impl<'a> StateVersionOutputs<'a> {
    pub fn new(client: &'a TfeClient) -> Self {
        Self { client }
    }

    /// Read a single state version output by ID
    pub async fn read(
        &self,
        cancel: &CancellationToken,
        output_id: &str,
    ) -> Result<StateVersionOutput> {
        let id = encode_id(output_id, "output ID")?;
        let path = format!("{}/{}", api::STATE_VERSION_OUTPUTS, id);

        debug!("Reading state version output '{}'", output_id);

        let request = self.client.new_request(Method::GET, &path, None)?;
        let response: ApiResponse<StateVersionOutput> =
            self.client.execute(cancel, request).await?;

        response.data.ensure_resource_type()?;
        Ok(response.data)
    }

    /// Read the outputs of a workspace's current state version
    ///
    /// Which state version counts as current is decided by the backend.
    pub async fn read_current(
        &self,
        cancel: &CancellationToken,
        workspace_id: &str,
    ) -> Result<StateVersionOutputsList> {
        let id = encode_id(workspace_id, "workspace ID")?;
        let path = format!(
            "{}/{}/{}",
            api::WORKSPACES,
            id,
            api::CURRENT_STATE_VERSION_OUTPUTS
        );

        debug!(
            "Reading current state version outputs for workspace '{}'",
            workspace_id
        );

        let request = self.client.new_request(Method::GET, &path, None)?;
        let list: StateVersionOutputsList = self.client.execute(cancel, request).await?;

        for output in &list.items {
            output.ensure_resource_type()?;
        }

        debug!(
            "Workspace '{}' has {} current outputs",
            workspace_id,
            list.len()
        );
        Ok(list)
    }
}
