//! # Directory Configuration
//!
//! Configuration for the static directory tables.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (when a deployment provides one)                  │
//! │     directory.toml next to the service binary                          │
//! │                                                                         │
//! │  2. Default Values                                                     │
//! │     platform segments p1/p2/p3, demo users, restaurant 999 missing     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # directory.toml
//! valid_segments = ["p1", "p2", "p3"]
//! missing_restaurants = [999]
//! inactive_restaurants = []
//!
//! [user_segments]
//! 1 = ["p1"]
//! 2 = ["p2"]
//! 3 = ["p3"]
//! ```
//!
//! User ids are TOML table keys and therefore strings in the file; keys that
//! do not parse as integers are skipped with a warning rather than failing
//! the whole load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Directory Config
// =============================================================================

/// The directory tables in file-friendly form.
///
/// [`crate::StaticDirectory`] is built from this; see
/// `StaticDirectory::from_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Segments the platform recognizes. An offer is registrable only if it
    /// names at least one of these.
    pub valid_segments: Vec<String>,

    /// Restaurant ids that do not exist (registration rule 7).
    pub missing_restaurants: Vec<i64>,

    /// Restaurant ids outside an active offer window (registration rule 6).
    pub inactive_restaurants: Vec<i64>,

    /// User id → customer segments. TOML table keys are strings.
    pub user_segments: HashMap<String, Vec<String>>,
}

impl Default for DirectoryConfig {
    /// The demo tables: segments p1/p2/p3, users 1..=3 in matching segments,
    /// restaurant 999 missing, everything else active.
    fn default() -> Self {
        DirectoryConfig {
            valid_segments: vec!["p1".to_string(), "p2".to_string(), "p3".to_string()],
            missing_restaurants: vec![999],
            inactive_restaurants: Vec::new(),
            user_segments: HashMap::from([
                ("1".to_string(), vec!["p1".to_string()]),
                ("2".to_string(), vec!["p2".to_string()]),
                ("3".to_string(), vec!["p3".to_string()]),
            ]),
        }
    }
}

impl DirectoryConfig {
    /// Parses a config from TOML text.
    ///
    /// Missing fields fall back to the defaults (`#[serde(default)]`).
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a config from a TOML file.
    pub fn load(path: &Path) -> ServiceResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ServiceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config =
            Self::from_toml_str(&text).map_err(|source| ServiceError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            segments = config.valid_segments.len(),
            users = config.user_segments.len(),
            "loaded directory config"
        );
        Ok(config)
    }

    /// The user table with ids parsed to integers. Unparsable keys are
    /// logged and skipped.
    pub(crate) fn parsed_user_segments(&self) -> HashMap<i64, Vec<String>> {
        let mut parsed = HashMap::with_capacity(self.user_segments.len());
        for (key, segments) in &self.user_segments {
            match key.parse::<i64>() {
                Ok(user_id) => {
                    parsed.insert(user_id, segments.clone());
                }
                Err(_) => {
                    warn!(key = %key, "skipping non-integer user id in directory config");
                }
            }
        }
        parsed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = DirectoryConfig::default();
        assert!(config.valid_segments.contains(&"p1".to_string()));
        assert_eq!(config.missing_restaurants, vec![999]);
        assert!(config.inactive_restaurants.is_empty());
        assert_eq!(
            config.user_segments.get("1"),
            Some(&vec!["p1".to_string()])
        );
    }

    #[test]
    fn test_parse_full_toml() {
        let config = DirectoryConfig::from_toml_str(
            r#"
            valid_segments = ["gold", "silver"]
            missing_restaurants = [404, 999]
            inactive_restaurants = [1]

            [user_segments]
            42 = ["gold"]
            "#,
        )
        .unwrap();

        assert_eq!(config.valid_segments, vec!["gold", "silver"]);
        assert_eq!(config.missing_restaurants, vec![404, 999]);
        assert_eq!(config.inactive_restaurants, vec![1]);
        assert_eq!(
            config.parsed_user_segments().get(&42),
            Some(&vec!["gold".to_string()])
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = DirectoryConfig::from_toml_str("valid_segments = [\"vip\"]").unwrap();
        assert_eq!(config.valid_segments, vec!["vip"]);
        // untouched fields keep their defaults
        assert_eq!(config.missing_restaurants, vec![999]);
    }

    #[test]
    fn test_bad_user_key_is_skipped_not_fatal() {
        let config = DirectoryConfig::from_toml_str(
            r#"
            [user_segments]
            "not-a-number" = ["p1"]
            7 = ["p2"]
            "#,
        )
        .unwrap();

        let parsed = config.parsed_user_segments();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(&7), Some(&vec!["p2".to_string()]));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        assert!(DirectoryConfig::from_toml_str("valid_segments = 3").is_err());
    }
}
