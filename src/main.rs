//! tfe-outputs - Main entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use tfe_outputs::{
    run_current_command, run_get_command, Cli, Command, HostResolver, TfeClient, TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfe-outputs v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let host = HostResolver::new().resolve(cli.host.as_deref(), cli.batch)?;
    let token = TokenResolver::new(&host).resolve(cli.token.as_deref())?;
    debug!("Using host {} with timeout {}s", host, cli.timeout);

    let client = TfeClient::with_timeout(token, host, Duration::from_secs(cli.timeout));

    // Ctrl-C cancels in-flight requests instead of killing the process mid-write
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling");
            on_signal.cancel();
        }
    });

    match &cli.command {
        Command::Get(args) => run_get_command(&client, cli, args, &cancel).await,
        Command::Current(args) => run_current_command(&client, cli, args, &cancel).await,
    }
}
