//! Validation policy configuration.
//!
//! The only tunable policy is the window of acceptable card expiry years.
//! Values come from the environment (a `.env` file is honored when present)
//! and fall back to built-in defaults.
//!
//! # Example
//!
//! ```rust,no_run
//! use card_management::config::ValidationConfig;
//!
//! let config = ValidationConfig::from_env()?;
//! println!("expiry years: {}..={}", config.year_window.min(), config.year_window.max());
//! # Ok::<(), card_management::config::ConfigError>(())
//! ```

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable holding the earliest accepted expiry year.
pub const MIN_EXPIRY_YEAR_KEY: &str = "CARD_EXPIRY_YEAR_MIN";
/// Environment variable holding the latest accepted expiry year.
pub const MAX_EXPIRY_YEAR_KEY: &str = "CARD_EXPIRY_YEAR_MAX";

/// Earliest expiry year accepted by default.
pub const DEFAULT_MIN_EXPIRY_YEAR: u16 = 2019;
/// Latest expiry year accepted by default.
pub const DEFAULT_MAX_EXPIRY_YEAR: u16 = 2050;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// The year window is empty.
    #[error("Expiry year window is inverted: {min} > {max}")]
    InvertedYearWindow {
        /// Configured lower bound.
        min: u16,
        /// Configured upper bound.
        max: u16,
    },
}

/// Inclusive range of accepted card expiry years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YearWindow {
    min: u16,
    max: u16,
}

impl YearWindow {
    /// Creates a window `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvertedYearWindow`] when `min > max`.
    pub const fn new(min: u16, max: u16) -> Result<Self, ConfigError> {
        if min > max {
            Err(ConfigError::InvertedYearWindow { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Earliest accepted year.
    #[must_use]
    pub const fn min(&self) -> u16 {
        self.min
    }

    /// Latest accepted year.
    #[must_use]
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Returns true if `year` lies inside the window.
    #[must_use]
    pub const fn contains(&self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_EXPIRY_YEAR,
            max: DEFAULT_MAX_EXPIRY_YEAR,
        }
    }
}

/// Policy knobs consulted by the domain constructors and assemblers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Accepted card expiry years.
    pub year_window: YearWindow,
}

impl ValidationConfig {
    /// Creates a configuration from an explicit year window.
    #[must_use]
    pub const fn new(year_window: YearWindow) -> Self {
        Self { year_window }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CARD_EXPIRY_YEAR_MIN`: earliest expiry year (optional, default: 2019)
    /// - `CARD_EXPIRY_YEAR_MAX`: latest expiry year (optional, default: 2050)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed and
    /// `ConfigError::InvertedYearWindow` if the bounds are inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ValidationConfig::from_env`].
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let min = get_optional_parsed(&lookup, MIN_EXPIRY_YEAR_KEY, DEFAULT_MIN_EXPIRY_YEAR)?;
        let max = get_optional_parsed(&lookup, MAX_EXPIRY_YEAR_KEY, DEFAULT_MAX_EXPIRY_YEAR)?;

        let config = Self::new(YearWindow::new(min, max)?);
        tracing::debug!(min, max, "validation config loaded");
        Ok(config)
    }
}

/// Gets an optional value and parses it, falling back to `default`.
fn get_optional_parsed<L, T>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|error| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}
