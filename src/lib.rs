//! tfe-outputs - Read Terraform state version outputs
//!
//! A small client and CLI for the HCP Terraform / Terraform Enterprise
//! `state-version-outputs` API.
//!
//! # Example
//!
//! ```bash
//! # Read one output
//! tfe-outputs get wsout-J2zM24JPFbfc7bE5
//!
//! # List the outputs of a workspace's current state version
//! tfe-outputs current ws-abc123
//!
//! # Look the workspace up by name and print JSON, revealing sensitive values
//! tfe-outputs current prod-network --org acme -o json --show-sensitive
//! ```
//!
//! # Library use
//!
//! ```no_run
//! use tfe_outputs::TfeClient;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> tfe_outputs::Result<()> {
//! let client = TfeClient::new("token".to_string(), "app.terraform.io".to_string());
//! let cancel = CancellationToken::new();
//! let outputs = client
//!     .state_version_outputs()
//!     .read_current(&cancel, "ws-abc123")
//!     .await?;
//! for output in &outputs.items {
//!     println!("{} = {}", output.attributes.name, output.value());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, CurrentArgs, GetArgs, OutputFormat};
pub use error::{Result, TfeError};
pub use hcp::{
    run_current_command, run_get_command, HostResolver, StateVersionOutput,
    StateVersionOutputs, StateVersionOutputsList, TfeClient, TfeResource, TokenResolver,
};
pub use output::{output_state_version_outputs, render_outputs, OutputOptions, OutputRow};
