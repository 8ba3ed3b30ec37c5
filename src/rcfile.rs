use logicalc::{Config, ConfigError};
use std::env;
use std::path::PathBuf;

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Config file location: `--config`, then `$LOGICALC_CONFIG`, then
/// `~/.logicalc.toml`. The flag reports whether the user named it explicitly.
fn config_path(explicit: Option<&str>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((PathBuf::from(path), true));
    }
    if let Some(path) = env::var_os("LOGICALC_CONFIG") {
        return Some((PathBuf::from(path), true));
    }
    dirs_home().map(|h| (h.join(".logicalc.toml"), false))
}

/// Load the config, falling back to defaults. A missing default file is not
/// worth mentioning; anything else is reported as a warning.
pub(crate) fn load_config(explicit: Option<&str>) -> Config {
    let mut config = match config_path(explicit) {
        None => Config::default(),
        Some((path, named)) => match Config::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if !named && e.kind() == std::io::ErrorKind::NotFound => {
                Config::default()
            }
            Err(e) => {
                eprintln!("Warning: {}: {}", path.display(), e);
                Config::default()
            }
        },
    };

    if env::var("LOGICALC_BANNER").is_ok() {
        config.banner = true;
    }

    config
}

/// REPL line history file
pub(crate) fn history_path() -> Option<PathBuf> {
    dirs_home().map(|h| h.join(".logicalc_history"))
}
