//! One-shot question command.
//!
//! Runs a single input through the response engine and prints the
//! answer, as styled text or as JSON with the diagnostic category.

use console::style;
use tracing::warn;

use bilgin_core::engine::ResponseEngine;
use bilgin_core::random::ThreadRandom;
use bilgin_core::speech::{SpeechSink, sanitize_for_speech};
use bilgin_infra::speech::CommandSpeech;
use bilgin_infra::wikipedia::WikipediaSource;

use crate::state::AppState;

/// Answer one question and exit.
pub async fn run_ask(state: &AppState, question: &str, speak: bool, json: bool) -> anyhow::Result<()> {
    let config = state.config.clone();
    let source = WikipediaSource::new(&config.language);
    let engine = ResponseEngine::new(source, ThreadRandom, config.clone());

    let (text, category) = engine.respond_categorized(question).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "question": question,
                "text": text,
                "category": category,
            }))?
        );
    } else {
        println!();
        for line in text.lines() {
            println!("  {line}");
        }
        println!();
        println!("  {}", style(format!("[{category}]")).dim());
    }

    if speak || config.speech.enabled {
        let speech = CommandSpeech::new(&config.speech);
        let spoken = sanitize_for_speech(&text);
        if let Err(err) = speech.speak(&spoken).await {
            warn!(program = speech.program(), error = %err, "speech failed");
        }
    }

    Ok(())
}
