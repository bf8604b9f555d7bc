//! Bilgin CLI entry point.
//!
//! Binary name: `bilgin`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! interactive chat loop or the one-shot ask command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

/// Map the --quiet/-v flags to an env-filter directive.
///
/// --quiet always wins, even when combined with -v.
fn log_filter(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info,bilgin=debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = log_filter(cli.quiet, cli.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bilgin", &mut std::io::stdout());
        return Ok(());
    }

    // Load configuration
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat { speak } => {
            cli::chat::run_chat_loop(&state, speak).await?;
        }

        Commands::Ask { text, speak } => {
            let question = text.join(" ");
            cli::ask::run_ask(&state, &question, speak, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
