// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The directory holding `settings.toml` is, in order of precedence: an
//! explicit base directory (tests, [`ConfigStore::with_base_dir`]), the
//! `--config-dir` flag, `ICED_LINGUA_CONFIG_DIR`, then `IcedLingua` under the
//! platform config directory.
//!
//! [`ConfigStore::with_base_dir`]: crate::i18n::ConfigStore::with_base_dir

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedLingua";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LINGUA_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` value. Later calls are logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Directory holding `settings.toml`, or `None` when the platform has no
/// config directory and nothing overrides it.
pub fn config_dir(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from);
    pick_config_dir([base_dir, cli, env], dirs::config_dir())
}

/// First non-empty candidate, else `APP_DIR_NAME` under `platform`.
fn pick_config_dir(
    candidates: [Option<PathBuf>; 3],
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    candidates
        .into_iter()
        .flatten()
        .find(|path| !path.as_os_str().is_empty())
        .or_else(|| platform.map(|path| path.join(APP_DIR_NAME)))
}
