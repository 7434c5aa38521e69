use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_MAX_TRIES, ENV_PREFIX};
use crate::error::CoreResult;
use crate::options::CalendarOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub week_starts_on: u8,
    pub first_week_contains_date: u8,
}

impl CalendarConfig {
    /// ## Summary
    /// Validates the configured week numbering into `CalendarOptions`.
    ///
    /// ## Errors
    /// Returns an error if either value is out of range.
    pub fn options(&self) -> CoreResult<CalendarOptions> {
        CalendarOptions::new(self.week_starts_on, self.first_week_contains_date)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Retry budget handed to `next`/`after`.
    pub max_tries: usize,
    /// Number of occurrences printed when none is requested.
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `CADENCE_*` environment variables and
    /// an optional `cadence.toml` in the working directory.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration like [`Settings::load`] but reads the TOML file from
    /// an explicit path, which must exist.
    ///
    /// ## Errors
    /// Returns an error if the file is missing or the configuration is invalid.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration file");

        Ok(Self::builder()?
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = CalendarOptions::default();

        Ok(Config::builder()
            .set_default(
                "calendar.week_starts_on",
                i64::from(defaults.week_starts_on()),
            )?
            .set_default(
                "calendar.first_week_contains_date",
                i64::from(defaults.first_week_contains_date()),
            )?
            .set_default("search.max_tries", i64::try_from(DEFAULT_MAX_TRIES)?)?
            .set_default("search.count", 5)?
            .set_default("logging.level", "warn")?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            ))
    }
}

/// ## Summary
/// Loads `.env` (if any) and then the settings.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
