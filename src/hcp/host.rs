//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{defaults, host as host_config};
use crate::error::{Result, TfeError};
use crate::hcp::TokenResolver;

/// Credentials file structure; only the host keys matter here
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, serde_json::Value>,
}

/// Host resolution with fallback logic
pub struct HostResolver {
    credentials_path: Option<PathBuf>,
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HostResolver {
    pub fn new() -> Self {
        Self {
            credentials_path: TokenResolver::get_credentials_path(),
        }
    }

    /// Use a specific credentials file instead of the platform default
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve host from multiple sources with fallback:
    /// 1. Explicit host (`--host`, or TFE_HOSTNAME as filled in by clap)
    /// 2. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    ///    - If no hosts: the default host (app.terraform.io)
    ///
    /// TFE_HOSTNAME is also read here when `cli_host` is `None`, so library
    /// callers that bypass clap get the same precedence.
    pub fn resolve(&self, cli_host: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return Ok(host);
            }
        }

        debug!(
            "No host in CLI or {}, trying credentials file",
            host_config::ENV_VAR
        );
        self.resolve_from_credentials_file(batch_mode)
    }

    /// Pick a host from the Terraform credentials file
    fn resolve_from_credentials_file(&self, batch_mode: bool) -> Result<String> {
        let Some(credentials_path) = self.credentials_path.as_deref() else {
            debug!("No credentials file location, using {}", defaults::HOST);
            return Ok(defaults::HOST.to_string());
        };

        let hosts = Self::read_hosts(credentials_path)?;

        match hosts.as_slice() {
            [] => {
                debug!(
                    "No hosts in {}, using {}",
                    credentials_path.display(),
                    defaults::HOST
                );
                Ok(defaults::HOST.to_string())
            }
            [host] => {
                debug!(
                    "Using single host from credentials file {}: {}",
                    credentials_path.display(),
                    host
                );
                Ok(host.clone())
            }
            _ if batch_mode => Err(TfeError::HostNotFound(host_not_found_message(
                credentials_path,
                &hosts,
            ))),
            _ => interactive_host_selection(&hosts, credentials_path),
        }
    }

    /// Sorted host keys from the credentials file; a missing file yields none,
    /// any other read failure is an error
    fn read_hosts(credentials_path: &Path) -> Result<Vec<String>> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(credentials_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TfeError::Credentials(format!(
                    "Could not read credentials file {}: {}",
                    credentials_path.display(),
                    e
                )))
            }
        };

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        let mut hosts: Vec<String> = creds.credentials.into_keys().collect();
        hosts.sort();
        Ok(hosts)
    }
}

/// Prompt user to select a host interactively
fn interactive_host_selection(hosts: &[String], credentials_path: &Path) -> Result<String> {
    eprintln!("\nMultiple hosts found in {}:", credentials_path.display());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a host")
        .items(hosts)
        .default(0)
        .interact()
        .map_err(|e| TfeError::HostNotFound(format!("Failed to select host: {}", e)))?;

    let host = hosts[selection].clone();
    debug!("User selected host: {}", host);
    Ok(host)
}

/// Error message for ambiguous hosts when prompting is not allowed
fn host_not_found_message(credentials_path: &Path, available_hosts: &[String]) -> String {
    format!(
        "Several TFE/HCP hosts are configured and batch mode forbids choosing one.\n\
         Please provide a host using one of:\n\
         \n\
         1. CLI argument:      tfe-outputs --host <HOST>\n\
         2. Environment var:   export {}=<HOST>\n\
         \n\
         Credentials file: {} ({} hosts found)\n\
         Available hosts: {}\n",
        host_config::ENV_VAR,
        credentials_path.display(),
        available_hosts.len(),
        available_hosts.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_host_takes_precedence() {
        let result = HostResolver::new().resolve(Some("my-custom-host.com"), false);
        assert_eq!(result.unwrap(), "my-custom-host.com");
    }

    #[test]
    fn test_cli_host_takes_precedence_batch() {
        let result = HostResolver::new().resolve(Some("my-custom-host.com"), true);
        assert_eq!(result.unwrap(), "my-custom-host.com");
    }

    #[test]
    fn test_single_host_in_credentials_file() {
        let file = credentials_file(r#"{"credentials": {"tfe.example.com": {"token": "t"}}}"#);
        let resolver = HostResolver::new().with_credentials_path(file.path());
        assert_eq!(
            resolver.resolve_from_credentials_file(true).unwrap(),
            "tfe.example.com"
        );
    }

    #[test]
    fn test_multiple_hosts_batch_mode_errors() {
        let file = credentials_file(
            r#"{"credentials": {
                "b.example.com": {"token": "t"},
                "a.example.com": {"token": "t"}
            }}"#,
        );
        let resolver = HostResolver::new().with_credentials_path(file.path());

        match resolver.resolve_from_credentials_file(true) {
            Err(TfeError::HostNotFound(msg)) => {
                assert!(msg.contains("2 hosts found"));
                assert!(msg.contains("a.example.com, b.example.com"));
            }
            other => panic!("Expected HostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_credentials_file_uses_default_host() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = HostResolver::new().with_credentials_path(dir.path().join("nope.json"));
        assert_eq!(
            resolver.resolve_from_credentials_file(true).unwrap(),
            defaults::HOST
        );
    }

    #[test]
    fn test_empty_credentials_file_uses_default_host() {
        let file = credentials_file(r#"{"credentials": {}}"#);
        let resolver = HostResolver::new().with_credentials_path(file.path());
        assert_eq!(
            resolver.resolve_from_credentials_file(false).unwrap(),
            defaults::HOST
        );
    }

    #[test]
    fn test_unparseable_credentials_file() {
        let file = credentials_file("not json");
        let resolver = HostResolver::new().with_credentials_path(file.path());
        assert!(matches!(
            resolver.resolve_from_credentials_file(true),
            Err(TfeError::Credentials(_))
        ));
    }

    #[test]
    fn test_unreadable_credentials_file_is_error() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let resolver = HostResolver::new().with_credentials_path(dir.path());

        match resolver.resolve_from_credentials_file(true) {
            Err(TfeError::Credentials(msg)) => assert!(msg.contains("Could not read")),
            other => panic!("Expected Credentials error, got {:?}", other),
        }
    }

    #[test]
    fn test_host_not_found_message_format() {
        let hosts = vec!["a.example.com".to_string()];
        let msg = host_not_found_message(Path::new("/test/creds.json"), &hosts);
        assert!(msg.contains("tfe-outputs --host"));
        assert!(msg.contains(host_config::ENV_VAR));
        assert!(msg.contains("/test/creds.json"));
    }
}
