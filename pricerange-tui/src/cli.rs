//! Command-line overrides for the host configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, CurrencySetting};

#[derive(Parser, Debug)]
#[command(
    name = "pricerange",
    about = "PriceRange — dual-handle price range slider in the terminal"
)]
pub struct Cli {
    /// Upper bound of the selectable price range.
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Path to a TOML config file. Defaults to <config dir>/pricerange/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Currency preset: rub or usd.
    #[arg(long)]
    pub currency: Option<String>,

    /// Arrow-key step for moving a handle.
    #[arg(long)]
    pub step: Option<u64>,
}

impl Cli {
    /// Config file to read: `--config`, else the platform default.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(AppConfig::default_path)
    }

    /// Layer the flags that were given over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(max_price) = self.max_price {
            config.max_price = max_price;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(code) = &self.currency {
            config.currency = CurrencySetting::Preset(code.clone());
        }
        config
    }
}
