//! Workspace API operations

use log::debug;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::config::api;
use crate::error::Result;
use crate::hcp::helpers::encode_id;
use crate::hcp::traits::ApiResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

impl TfeClient {
    /// Read a workspace by name within an organization
    pub async fn read_workspace_by_name(
        &self,
        cancel: &CancellationToken,
        org: &str,
        name: &str,
    ) -> Result<Workspace> {
        let org_segment = encode_id(org, "organization")?;
        let name_segment = encode_id(name, "workspace name")?;
        let path = format!(
            "{}/{}/{}/{}",
            api::ORGANIZATIONS,
            org_segment,
            api::WORKSPACES,
            name_segment
        );

        debug!("Reading workspace '{}' in organization '{}'", name, org);

        let request = self.new_request(Method::GET, &path, None)?;
        let response: ApiResponse<Workspace> = self.execute(cancel, request).await?;
        Ok(response.data)
    }
}
