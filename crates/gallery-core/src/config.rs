//! Fixture configuration

use crate::error::ConfigError;
use gallery_fields::{Seed, DEFAULT_PASSWORD_LENGTH};
use gallery_schema::templates::DEFAULT_BIRTH_YEAR_SPAN;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the seed (decimal or any token)
pub const SEED_ENV: &str = "GALLERY_FIXTURE_SEED";

/// Fixture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Seed for the per-test generator
    pub seed: Seed,
    /// Length of generated passwords
    pub password_length: usize,
    /// How many years back generated birthdays may reach
    pub birth_year_span: i32,
}

impl FixtureConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// With password length
    #[inline]
    #[must_use]
    pub fn with_password_length(mut self, length: usize) -> Self {
        self.password_length = length;
        self
    }

    /// With birthday span in years
    #[inline]
    #[must_use]
    pub fn with_birth_year_span(mut self, years: i32) -> Self {
        self.birth_year_span = years;
        self
    }

    /// Apply a raw seed override, if any
    #[must_use]
    pub fn with_seed_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            self.seed = raw.parse().unwrap_or_else(|never| match never {});
        }
        self
    }

    /// Parse configuration from TOML; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError`] on malformed TOML or out-of-range values
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with the seed taken from [`SEED_ENV`] if set
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the variable is not valid unicode
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SEED_ENV) {
            Ok(raw) => Ok(Self::default().with_seed_override(Some(&raw))),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ConfigError::Invalid(format!("{SEED_ENV} is not valid unicode")))
            }
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a zero password length or a
    /// non-positive birthday span
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password_length == 0 {
            return Err(ConfigError::Invalid("password_length must be positive".to_string()));
        }
        if self.birth_year_span <= 0 {
            return Err(ConfigError::Invalid("birth_year_span must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            birth_year_span: DEFAULT_BIRTH_YEAR_SPAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = FixtureConfig::new();
        assert_eq!(config.seed, Seed::new(42));
        assert_eq!(config.password_length, DEFAULT_PASSWORD_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = FixtureConfig::from_toml_str("seed = 7\npassword_length = 20\n").unwrap();
        assert_eq!(
            config,
            FixtureConfig::new().with_seed(7_u64).with_password_length(20)
        );
    }

    #[test]
    fn out_of_range_toml_is_rejected() {
        let err = FixtureConfig::from_toml_str("password_length = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = FixtureConfig::from_toml_str("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn seed_override() {
        let config = FixtureConfig::new().with_seed_override(Some("1234"));
        assert_eq!(config.seed, Seed::new(1234));

        let config = FixtureConfig::new().with_seed_override(Some("nightly"));
        assert_eq!(config.seed, Seed::from_token("nightly"));

        let config = FixtureConfig::new().with_seed_override(Some("  "));
        assert_eq!(config.seed, Seed::default());
    }
}
