//! Workspace data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_deserialization() {
        let json = r#"{
            "id": "ws-abc123",
            "type": "workspaces",
            "attributes": {
                "name": "my-workspace",
                "execution-mode": "remote",
                "terraform-version": "1.6.0"
            }
        }"#;

        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id(), "ws-abc123");
        assert_eq!(ws.name(), "my-workspace");
    }

    #[test]
    fn test_workspace_matches() {
        let ws = Workspace {
            id: "ws-abc123".to_string(),
            attributes: WorkspaceAttributes {
                name: "prod-network".to_string(),
            },
        };
        assert!(ws.matches("ws-abc123"));
        assert!(ws.matches("prod-network"));
        assert!(!ws.matches("prod"));
    }
}
