//! CLI command definitions and dispatch for the `bilgin` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Conversational encyclopedia assistant.
#[derive(Parser)]
#[command(name = "bilgin", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Speak responses aloud (overrides the config's speech.enabled).
        #[arg(long)]
        speak: bool,
    },

    /// Ask a single question and print the answer.
    Ask {
        /// The question text.
        #[arg(required = true)]
        text: Vec<String>,

        /// Speak the answer aloud.
        #[arg(long)]
        speak: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::parse_from(["bilgin", "ask", "mustafa", "kemal"]);
        match cli.command {
            Commands::Ask { text, speak } => {
                assert_eq!(text, vec!["mustafa", "kemal"]);
                assert!(!speak);
            }
            _ => panic!("expected ask command"),
        }
    }
}
