//! Configuration loader for Bilgin.
//!
//! Reads `config.toml` from the data directory (`~/.bilgin/` in
//! production) into [`BilginConfig`]. Loading is total: a missing or
//! broken file leaves the assistant on its built-in Turkish defaults,
//! the same degrade-quietly posture the response engine takes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use bilgin_types::config::BilginConfig;

/// Location of the config file inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// Never fails: an absent file is the normal first-run case, an
/// unreadable or malformed one is logged and ignored. Either way the
/// caller gets a usable [`BilginConfig`].
pub async fn load_config(data_dir: &Path) -> BilginConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, running on built-in defaults");
            return BilginConfig::default();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "config file unreadable, running on built-in defaults");
            return BilginConfig::default();
        }
    };

    let config = match toml::from_str::<BilginConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "config file malformed, running on built-in defaults");
            return BilginConfig::default();
        }
    };

    // An empty pool is survivable (the engine substitutes a placeholder)
    // but almost certainly a config mistake worth flagging.
    if config.greeting_pool.is_empty() || config.fallback_pool.is_empty() {
        warn!(
            path = %path.display(),
            greetings = config.greeting_pool.len(),
            fallbacks = config.fallback_pool.len(),
            "config declares an empty response pool"
        );
    }

    debug!(
        language = config.language,
        capacity = config.transcript_capacity,
        "configuration loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_path_joins_data_dir() {
        let path = config_path(Path::new("/tmp/bilgin-test"));
        assert_eq!(path, PathBuf::from("/tmp/bilgin-test/config.toml"));
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.language, "tr");
        assert_eq!(config.transcript_capacity, 20);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            config_path(tmp.path()),
            r#"
language = "en"
summary_sentences = 3
greeting_tokens = ["hello", "hi"]

[speech]
enabled = true
program = "say"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.language, "en");
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.greeting_tokens, vec!["hello", "hi"]);
        assert!(config.speech.enabled);
        assert_eq!(config.speech.program, "say");
        // Untouched fields keep their defaults.
        assert_eq!(config.transcript_capacity, 20);
        assert_eq!(config.greeting_pool.len(), 3);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(config_path(tmp.path()), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.language, "tr");
        assert_eq!(config.fallback_pool.len(), 3);
    }

    #[tokio::test]
    async fn load_config_keeps_empty_pools_as_configured() {
        // Empty pools are warned about, not repaired -- the engine's
        // placeholder handles them at response time.
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(config_path(tmp.path()), "fallback_pool = []\n")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert!(config.fallback_pool.is_empty());
        assert_eq!(config.greeting_pool.len(), 3);
    }
}
