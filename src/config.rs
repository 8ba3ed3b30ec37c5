//! Calculator configuration (~/.logicalc.toml)
//!
//! Every key is optional:
//!
//! ```toml
//! placeholder = "0"                          # shown when nothing is entered
//! error_message = "Error: invalid expression"
//! banner = false                             # print a banner when the REPL starts
//! history = true                             # keep REPL line history
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text rendered while the expression is empty
    pub placeholder: String,

    /// Text rendered after a failed evaluation
    pub error_message: String,

    /// Print the startup banner in the REPL
    pub banner: bool,

    /// Persist REPL line history
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            placeholder: "0".to_string(),
            error_message: "Error: invalid expression".to_string(),
            banner: false,
            history: true,
        }
    }
}

impl Config {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = content.parse::<Config>()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
