//! Config file location.

use std::path::PathBuf;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable naming the config file, below `--config` in priority.
pub const CONFIG_PATH_ENV: &str = "L10N_SYNC_CONFIG_PATH";

/// Resolve the config file path.
///
/// Priority:
/// 1. `--config` flag
/// 2. `L10N_SYNC_CONFIG_PATH` environment variable
/// 3. Platform config directory (`~/.config/l10n-sync/config.toml` on Linux and macOS)
pub fn config_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(cli_path, std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
}

fn resolve(cli_path: Option<PathBuf>, env_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = cli_path.or(env_path) {
        return Some(path);
    }

    // choose_base_strategy uses XDG on Linux and macOS, %APPDATA% on Windows
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("l10n-sync").join("config.toml"))
}
