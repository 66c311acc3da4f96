//! # configs
//!
//! Layered settings for the forum page binary.
//!
//! Precedence, lowest first: built-in defaults, `forum.toml` (optional),
//! `FORUM__*` environment variables. A `.env` file is loaded into the
//! environment before the layers are read.
//!
//! ```text
//! FORUM__IS_ADMIN=false
//! FORUM__ID_STRATEGY=monotonic
//! FORUM__LOCALE=ru
//! FORUM__LOG__FORMAT=json
//! FORUM__LOG__FILTER=services=debug,info
//! ```

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use domains::{IdStrategy, Locale};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "forum.toml";
pub const ENV_PREFIX: &str = "FORUM";

#[derive(Error, Debug)]
pub enum ConfigsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    pub format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Fixed for the whole session: decides whether the admin capability is granted.
    pub is_admin: bool,
    pub id_strategy: IdStrategy,
    pub locale: Locale,
    /// Seed document replacing the bundled fixture.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    pub log: LogSettings,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigsError> {
    Ok(Config::builder()
        .set_default("is_admin", true)?
        .set_default("id_strategy", "length_plus_one")?
        .set_default("locale", "en")?
        .set_default("log.format", "pretty")?
        .set_default("log.filter", "info")?)
}

impl Settings {
    /// Reads `.env`, then `forum.toml` in the working directory, then the environment.
    pub fn load() -> Result<Self, ConfigsError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(file: &Path) -> Result<Self, ConfigsError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), ".env loaded"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let settings: Settings = defaults()?
            .add_source(File::from(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Defaults overlaid with a TOML document only. Ignores the environment.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigsError> {
        Ok(defaults()?
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_admin: true,
            id_strategy: IdStrategy::default(),
            locale: Locale::default(),
            seed_path: None,
            log: LogSettings {
                format: LogFormat::default(),
                filter: "info".into(),
            },
        }
    }
}
