//! Application state for the CLI.
//!
//! Resolves the data directory and loads configuration. The knowledge
//! source and engine are built per command from this state, since the
//! language (and therefore the endpoint) comes from config.

use std::path::PathBuf;

use bilgin_infra::config::load_config;
use bilgin_types::config::BilginConfig;

/// Shared state for CLI commands.
pub struct AppState {
    pub config: BilginConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize: resolve the data dir and load `config.toml` from it.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;
        Ok(Self { config, data_dir })
    }
}

/// Data directory: `$BILGIN_DATA_DIR`, else `~/.bilgin`, else `./.bilgin`.
fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BILGIN_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".bilgin"))
        .unwrap_or_else(|| PathBuf::from(".bilgin"))
}
