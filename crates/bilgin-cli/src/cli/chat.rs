//! Interactive chat loop.
//!
//! Reads lines from stdin, routes them through a [`ChatSession`], and
//! prints styled assistant replies with a spinner while the lookup runs.
//! Optionally speaks each reply through the configured speech program.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use bilgin_core::chat::ChatSession;
use bilgin_core::engine::ResponseEngine;
use bilgin_core::random::ThreadRandom;
use bilgin_core::speech::{SpeechSink, sanitize_for_speech};
use bilgin_infra::speech::CommandSpeech;
use bilgin_infra::wikipedia::WikipediaSource;
use bilgin_types::chat::{Origin, Utterance};

use crate::state::AppState;

/// Print the welcome banner at the start of a chat session.
fn print_welcome_banner(language: &str, speech_on: bool) {
    println!();
    println!("  📚 {}", style("Bilgin").cyan().bold());
    println!(
        "  {}",
        style("Sorunuzu yazın, ansiklopedide arayayım.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Kaynak:").bold(),
        style(format!("{language}.wikipedia.org")).dim()
    );
    println!(
        "  {}  {}",
        style("Ses:").bold(),
        style(if speech_on { "açık" } else { "kapalı" }).dim()
    );
    println!();
    println!(
        "  {}",
        style("/history geçmişi gösterir, /quit veya Ctrl+D çıkar").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print one utterance with a dim HH:MM timestamp beside it.
fn print_utterance(utterance: &Utterance) {
    let clock = utterance
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M");
    let label = match utterance.origin {
        Origin::User => style("siz").bold().green(),
        Origin::Assistant => style("bilgin").bold().cyan(),
    };
    println!("  {} {}", style(clock).dim(), label);
    for line in utterance.text.lines() {
        println!("    {line}");
    }
    println!();
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState, speak: bool) -> anyhow::Result<()> {
    let config = state.config.clone();
    let speech_on = speak || config.speech.enabled;

    let source = WikipediaSource::new(&config.language);
    let engine = ResponseEngine::new(source, ThreadRandom, config.clone());
    let mut session = ChatSession::new(engine);
    let speech = CommandSpeech::new(&config.speech);

    print_welcome_banner(&config.language, speech_on);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("  {} ", style("❯").green().bold());
        std::io::stdout().flush()?;

        // None = EOF (Ctrl+D)
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => {
                println!();
                for utterance in session.recent() {
                    print_utterance(utterance);
                }
                continue;
            }
            _ => {}
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("static spinner template"),
        );
        spinner.set_message("aranıyor...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let reply = session.submit(input).await;
        spinner.finish_and_clear();

        let Some(reply) = reply else { continue };
        print_utterance(&reply);

        if speech_on {
            let spoken = sanitize_for_speech(&reply.text);
            if let Err(err) = speech.speak(&spoken).await {
                warn!(program = speech.program(), error = %err, "speech failed");
            }
        }
    }

    println!();
    println!("  {}", style("Görüşmek üzere! 👋").dim());
    Ok(())
}
