//! Host configuration — TOML file under the user config dir, with CLI overrides.
//!
//! ```toml
//! max_price = 1000
//! step = 10
//! bound_step = 100
//! currency = "rub"            # or a table:
//! # [currency]
//! # symbol = "€"
//! # grouping_separator = "."
//! # symbol_position = "suffix"
//! # symbol_gap = " "
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pricerange_core::{CurrencyFormat, SliderError, UpperBound};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown currency preset {0:?} (expected \"rub\" or \"usd\")")]
    UnknownCurrency(String),

    #[error("invalid max_price: {0}")]
    MaxPrice(#[from] SliderError),

    #[error("{0} must be positive")]
    ZeroStep(&'static str),
}

/// Either a named preset or a full format table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrencySetting {
    Preset(String),
    Custom(CurrencyFormat),
}

impl Default for CurrencySetting {
    fn default() -> Self {
        CurrencySetting::Preset("rub".to_string())
    }
}

impl CurrencySetting {
    pub fn resolve(&self) -> Result<CurrencyFormat, ConfigError> {
        match self {
            CurrencySetting::Preset(code) => {
                CurrencyFormat::preset(code).ok_or_else(|| ConfigError::UnknownCurrency(code.clone()))
            }
            CurrencySetting::Custom(format) => Ok(format.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Upper bound the host mounts the slider with.
    pub max_price: u64,
    /// Nudge size for the arrow keys.
    pub step: u64,
    /// How far `[` / `]` move the upper bound.
    pub bound_step: u64,
    pub currency: CurrencySetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_price: 1000,
            step: 10,
            bound_step: 100,
            currency: CurrencySetting::default(),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/pricerange/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pricerange").join("config.toml"))
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn upper_bound(&self) -> Result<UpperBound, ConfigError> {
        Ok(UpperBound::new(self.max_price)?)
    }

    pub fn currency_format(&self) -> Result<CurrencyFormat, ConfigError> {
        self.currency.resolve()
    }

    /// Check every field the host depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upper_bound()?;
        self.currency_format()?;
        if self.step == 0 {
            return Err(ConfigError::ZeroStep("step"));
        }
        if self.bound_step == 0 {
            return Err(ConfigError::ZeroStep("bound_step"));
        }
        Ok(())
    }
}
