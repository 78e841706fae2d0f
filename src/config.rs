// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator configuration.
//!
//! Every field has a default, so an empty TOML file is a valid configuration:
//!
//! ```toml
//! max_attempts = 100
//! min_digit = 1
//! max_digit = 9
//! seed = 42        # optional: repeatable puzzles
//! ```

use crate::puzzle::digit::{MAX_DIGIT, MIN_DIGIT};
use crate::puzzle::PUZZLE_SIZE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of random draws tried before falling back to the fixed puzzle.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("digit range {min}..={max} must lie within {}..={}", MIN_DIGIT, MAX_DIGIT)]
    DigitOutOfRange { min: u8, max: u8 },

    #[error("digit range {min}..={max} holds fewer than {} distinct digits", PUZZLE_SIZE)]
    RangeTooNarrow { min: u8, max: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Random draws to try before returning the fallback puzzle.
    pub max_attempts: usize,
    pub min_digit: u8,
    pub max_digit: u8,
    /// Seed for repeatable puzzles; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_digit: MIN_DIGIT,
            max_digit: MAX_DIGIT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GeneratorConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded generator config");
        Ok(config)
    }

    /// Check that the digit range can supply a puzzle of distinct digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_digit, self.max_digit);
        if min < MIN_DIGIT || max > MAX_DIGIT || min > max {
            return Err(ConfigError::DigitOutOfRange { min, max });
        }
        if usize::from(max - min) + 1 < PUZZLE_SIZE {
            return Err(ConfigError::RangeTooNarrow { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_attempts, 100);
        assert_eq!((config.min_digit, config.max_digit), (1, 9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let config = GeneratorConfig {
            min_digit: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DigitOutOfRange { min: 0, max: 9 })
        ));

        let config = GeneratorConfig {
            min_digit: 7,
            max_digit: 9,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RangeTooNarrow { .. })
        ));

        let config = GeneratorConfig {
            min_digit: 6,
            max_digit: 9,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_attempts = 5\nseed = 42").unwrap();
        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_digit, 9);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target = 24").unwrap();
        assert!(matches!(
            GeneratorConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/make10.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
