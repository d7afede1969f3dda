//! # Settings
//!
//! Process configuration for the aggregator.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `ride-aggregator.toml` in the working directory, if present
//! 3. `RIDE_AGGREGATOR_*` environment variables (a `.env` file is loaded
//!    first if one exists)
//!
//! `RIDE_AGGREGATOR_SUPPLIERS` takes a comma-separated list.
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.suppliers, vec!["dave", "eric", "jeff"]);
//! assert_eq!(settings.timeout_ms, 2000);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::infrastructure::suppliers::gateway::DEFAULT_SUPPLIER_TIMEOUT_MS;
use crate::infrastructure::suppliers::registry::DEFAULT_SUPPLIERS;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default supplier base URL.
pub const DEFAULT_BASE_URL: &str = "https://techtest.rideways.com";

/// Name of the optional settings file, without extension.
const CONFIG_FILE: &str = "ride-aggregator";

/// Environment variable prefix.
const ENV_PREFIX: &str = "RIDE_AGGREGATOR";

/// Aggregator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// URL under which every supplier path lives.
    pub base_url: String,
    /// Supplier identifiers, in the order results are pooled.
    pub suppliers: Vec<String>,
    /// Per-supplier request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            suppliers: DEFAULT_SUPPLIERS.iter().map(ToString::to_string).collect(),
            timeout_ms: DEFAULT_SUPPLIER_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Loads settings from defaults, the optional settings file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or the result fails [`Settings::validate`].
    pub fn load() -> ApplicationResult<Self> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::load_with(Self::environment())
    }

    fn load_with(environment: Environment) -> ApplicationResult<Self> {
        let settings: Self = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("suppliers")
    }

    /// Parses settings from a string in the given format, on top of the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the content cannot be
    /// parsed or the result fails [`Settings::validate`].
    pub fn parse(contents: &str, format: FileFormat) -> ApplicationResult<Self> {
        let settings: Self = Self::defaults()?
            .add_source(File::from_str(contents, format))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the settings can drive an aggregator.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` for an empty base URL, an
    /// empty supplier list or a zero timeout.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApplicationError::configuration("base_url must not be empty"));
        }
        if self.suppliers.iter().all(|s| s.trim().is_empty()) {
            return Err(ApplicationError::configuration(
                "at least one supplier must be configured",
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ApplicationError::configuration(
                "timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("suppliers", DEFAULT_SUPPLIERS.to_vec())?
            .set_default("timeout_ms", DEFAULT_SUPPLIER_TIMEOUT_MS)
    }
}
