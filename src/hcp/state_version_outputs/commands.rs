//! State version output command handlers

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::cli::{Cli, CurrentArgs, GetArgs};
use crate::hcp::traits::PaginatedResponse;
use crate::hcp::workspaces::resolve_workspace_id;
use crate::hcp::TfeClient;
use crate::output::{output_state_version_outputs, OutputOptions};
use crate::ui::{create_spinner, finish_spinner};

fn output_options(cli: &Cli, single: bool) -> OutputOptions {
    OutputOptions {
        format: cli.output,
        show_sensitive: cli.show_sensitive,
        no_header: cli.no_header,
        single,
    }
}

/// Run `get`: read one output by ID and print it
pub async fn run_get_command(
    client: &TfeClient,
    cli: &Cli,
    args: &GetArgs,
    cancel: &CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Reading state version output '{}'...", args.id),
        cli.batch,
    );

    let result = client.state_version_outputs().read(cancel, &args.id).await;
    finish_spinner(spinner);

    let output = result?;
    output_state_version_outputs(std::slice::from_ref(&output), &output_options(cli, true));
    Ok(())
}

/// Run `current`: list the outputs of a workspace's current state version
pub async fn run_current_command(
    client: &TfeClient,
    cli: &Cli,
    args: &CurrentArgs,
    cancel: &CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Reading current outputs of '{}'...", args.workspace),
        cli.batch,
    );

    let result = async {
        let workspace_id =
            resolve_workspace_id(client, cancel, &args.workspace, args.org.as_deref()).await?;
        client
            .state_version_outputs()
            .read_current(cancel, &workspace_id)
            .await
    }
    .await;
    finish_spinner(spinner);

    let list = result?;

    if let Some(p) = list.meta().and_then(|m| m.pagination.as_ref()) {
        debug!(
            "Page {}/{} of current outputs, {} total",
            p.current_page, p.total_pages, p.total_count
        );
    }

    match &args.name {
        Some(name) => {
            let output = list.find(name).ok_or_else(|| {
                format!(
                    "Output '{}' not found in the current state of '{}'",
                    name, args.workspace
                )
            })?;
            output_state_version_outputs(
                std::slice::from_ref(output),
                &output_options(cli, true),
            );
        }
        None => {
            output_state_version_outputs(&list.items, &output_options(cli, false));
        }
    }

    Ok(())
}
