/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// State version outputs endpoint
    pub const STATE_VERSION_OUTPUTS: &str = "state-version-outputs";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspace subresource listing the outputs of the current state version
    pub const CURRENT_STATE_VERSION_OUTPUTS: &str = "current-state-version-outputs";

    /// JSON-API media type, sent as both Accept and Content-Type
    pub const MEDIA_TYPE: &str = "application/vnd.api+json";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable holding the TFE hostname
    pub const ENV_VAR: &str = "TFE_HOSTNAME";
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Placeholder shown instead of sensitive output values
    pub const SENSITIVE_MASK: &str = "<sensitive>";
}
