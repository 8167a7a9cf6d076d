//! Input validation and display helpers for the tlong URL shortener.
//!
//! Every operation is a pure function of its arguments plus the wall clock
//! (expiration, relative time) or the thread-local RNG (code generation).
//! The free functions use the stock rules; [`LinkRules`] carries a custom
//! [`Config`] and [`Clock`].

pub mod clock;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

use chrono::{DateTime, Utc};

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{ExpirationParseError, ValidationError};
pub use types::Validation;
pub use utils::{
    format_datetime, format_relative_time, generate_default_code, generate_random_code,
    parse_expiration_time, validate_custom_code, validate_url, ExpirationSpec, ExpirationUnit,
};

#[derive(Debug, Clone, Default)]
pub struct LinkRules<C = SystemClock> {
    config: Config,
    clock: C,
}

impl LinkRules<SystemClock> {
    pub fn with_config(config: Config) -> Self {
        Self::new(config, SystemClock)
    }

    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }
}

impl<C: Clock> LinkRules<C> {
    pub fn new(config: Config, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn validate_url(&self, url: &str) -> Validation {
        utils::validate_url(url)
    }

    pub fn validate_custom_code(&self, code: Option<&str>) -> Validation {
        utils::code::validate_custom_code_with(code, &self.config)
    }

    /// Random code of the configured length.
    pub fn generate_code(&self) -> String {
        utils::generate_random_code(self.config.code_length)
    }

    pub fn parse_expiration_time(&self, expires_in: Option<&str>) -> Option<DateTime<Utc>> {
        utils::expiration::parse_expiration_time_with(
            expires_in,
            &self.clock,
            self.config.max_expiration_days,
        )
    }

    pub fn format_datetime(&self, dt: Option<DateTime<Utc>>) -> String {
        utils::time::format_datetime_with(dt, self.config.display_offset_hours)
    }

    pub fn format_relative_time(&self, dt: Option<DateTime<Utc>>) -> String {
        utils::time::format_relative_time_with(dt, &self.clock)
    }
}
