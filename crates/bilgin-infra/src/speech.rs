//! Child-process speech sink.
//!
//! Speaks by spawning an external TTS program (espeak-ng by default) with
//! the sanitized text as its final argument and waiting for it to exit.

use std::process::Stdio;

use tokio::process::Command;

use bilgin_core::speech::SpeechSink;
use bilgin_types::config::SpeechConfig;
use bilgin_types::knowledge::SpeechError;

/// Speech sink backed by an external command.
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    /// Build a sink from the speech section of the config.
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// The program this sink spawns.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SpeechSink for CommandSpeech {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.is_empty() {
            return Ok(());
        }

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| SpeechError::Spawn(e.to_string()))?;

        if !status.success() {
            return Err(SpeechError::Exited(status.code().unwrap_or(-1)));
        }
        Ok(())
    }
}
