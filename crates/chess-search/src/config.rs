//! Search configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the standard
//! tiers: Medium searches 2 plies, Hard 4.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest fixed search depth accepted from configuration.
///
/// Beyond three plies the transposition table can make the score depend on move ordering;
/// see [`crate::ordering`].
pub const MAX_DEPTH: u8 = 12;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the search and the difficulty tiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Plies searched by the Medium tier. Defaults to 2.
    #[serde(default = "default_medium_depth")]
    pub medium_depth: u8,
    /// Plies searched by the Hard tier. Defaults to 4.
    #[serde(default = "default_hard_depth")]
    pub hard_depth: u8,
    /// Divisor applied to the mobility difference. Defaults to 2.
    #[serde(default = "default_mobility_divisor")]
    pub mobility_divisor: i32,
    /// Whether to sort moves before searching them. Defaults to true.
    #[serde(default = "default_move_ordering")]
    pub move_ordering: bool,
    /// Maximum transposition table entries; unbounded if absent.
    #[serde(default)]
    pub tt_capacity: Option<usize>,
}

fn default_medium_depth() -> u8 {
    2
}

fn default_hard_depth() -> u8 {
    4
}

fn default_mobility_divisor() -> i32 {
    2
}

fn default_move_ordering() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            medium_depth: default_medium_depth(),
            hard_depth: default_hard_depth(),
            mobility_divisor: default_mobility_divisor(),
            move_ordering: default_move_ordering(),
            tt_capacity: None,
        }
    }
}

impl SearchConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] for invalid TOML and [`ConfigError::Invalid`] for
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [
            ("medium_depth", self.medium_depth),
            ("hard_depth", self.hard_depth),
        ] {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and {MAX_DEPTH}, got {depth}"
                )));
            }
        }
        if self.mobility_divisor <= 0 {
            return Err(ConfigError::Invalid(format!(
                "mobility_divisor must be positive, got {}",
                self.mobility_divisor
            )));
        }
        if self.tt_capacity == Some(0) {
            return Err(ConfigError::Invalid(
                "tt_capacity must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.medium_depth, 2);
        assert_eq!(config.hard_depth, 4);
        assert!(config.move_ordering);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
medium_depth = 3
hard_depth = 5
mobility_divisor = 4
move_ordering = false
tt_capacity = 100000
"#;
        let config = SearchConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.medium_depth, 3);
        assert_eq!(config.hard_depth, 5);
        assert_eq!(config.mobility_divisor, 4);
        assert!(!config.move_ordering);
        assert_eq!(config.tt_capacity, Some(100_000));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for bad in [
            "medium_depth = 0",
            "hard_depth = 40",
            "mobility_divisor = 0",
            "tt_capacity = 0",
        ] {
            assert!(
                matches!(SearchConfig::from_toml_str(bad), Err(ConfigError::Invalid(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SearchConfig::from_toml_str("medium_depth = \"deep\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            SearchConfig::from_toml_str("depth = 3"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("search-config-{}.toml", std::process::id()));
        std::fs::write(&path, "hard_depth = 3\n").unwrap();
        let config = SearchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.hard_depth, 3);
        assert_eq!(config.medium_depth, 2);

        assert!(matches!(
            SearchConfig::load(&path),
            Err(ConfigError::ReadError(_))
        ));
    }
}
