use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::{Cli, Format};

#[derive(Debug, Clone, Serialize, Deserialize, Setters, PartialEq)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
pub struct Settings {
    /// Text inserted between merged string contents
    pub separator: String,
    /// Encoding of the input message list
    pub from: Format,
    /// Encoding of the merged output
    pub to: Format,
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Settings {
    /// Loads settings with the config crate.
    ///
    /// Sources in order of precedence:
    /// 1. Embedded JSON defaults (`settings.json` in the crate root)
    /// 2. Environment variables prefixed with `CHATFOLD_` (highest priority)
    ///
    /// # Examples of environment variables:
    /// - `CHATFOLD_SEPARATOR` -> `separator`
    /// - `CHATFOLD_TO` -> `to`
    /// - `CHATFOLD_LOG_FILTER` -> `log_filter`
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(environment())
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        const DEFAULT_SETTINGS: &str = include_str!("../settings.json");

        let config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_SETTINGS,
                config::FileFormat::Json,
            ))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    /// Command line flags take precedence over loaded settings.
    pub fn apply(self, cli: &Cli) -> Self {
        let mut settings = self;
        if let Some(separator) = &cli.separator {
            settings = settings.separator(separator);
        }
        if let Some(from) = cli.from {
            settings = settings.from(from);
        }
        if let Some(to) = cli.to {
            settings = settings.to(to);
        }
        settings
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("CHATFOLD")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(false)
}
