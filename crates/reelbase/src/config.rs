//! Collection configuration and persistence failure modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ReelbaseError;

/// Failure handling modes for writing a collection back to disk.
///
/// These modes control what a mutation does when the write-back fails:
/// - `Warn`: the failure is logged as a warning, the in-memory change is kept and the mutation
///   reports [`crate::Persistence::InMemoryOnly`]
/// - `Strict`: the in-memory change is rolled back and the mutation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceMode {
    /// Write failures are logged and the mutation still succeeds in memory
    #[default]
    Warn,
    /// Write failures roll back the mutation and are returned as errors
    Strict,
}

impl FromStr for PersistenceMode {
    type Err = ReelbaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            _ => {
                Err(ReelbaseError::ConfigError {
                    message: format!("Invalid persistence mode: {}", s),
                })
            },
        }
    }
}

/// Configuration for a [`crate::MovieCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// How write-back failures are handled
    pub persistence_mode: PersistenceMode,
    /// Write to a temporary file and rename it over the collection file
    pub atomic_writes:    bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            persistence_mode: PersistenceMode::Warn,
            atomic_writes:    true,
        }
    }
}

impl CollectionConfig {
    /// Returns a copy of this configuration using `mode`.
    pub const fn with_persistence_mode(mut self, mode: PersistenceMode) -> Self {
        self.persistence_mode = mode;
        self
    }

    /// Returns a copy of this configuration with atomic writes toggled.
    pub const fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CollectionConfig::default();
        assert_eq!(config.persistence_mode, PersistenceMode::Warn);
        assert!(config.atomic_writes);
    }

    #[test]
    fn test_persistence_mode_from_str() {
        assert_eq!(
            "strict".parse::<PersistenceMode>().unwrap(),
            PersistenceMode::Strict
        );
        assert_eq!(
            "WARN".parse::<PersistenceMode>().unwrap(),
            PersistenceMode::Warn
        );
        assert!(matches!(
            "silent".parse::<PersistenceMode>(),
            Err(ReelbaseError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_serde_uses_lowercase_modes() {
        let config = CollectionConfig::default().with_persistence_mode(PersistenceMode::Strict);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["persistence_mode"], "strict");
        assert_eq!(json["atomic_writes"], true);

        let parsed: CollectionConfig =
            serde_json::from_str(r#"{"persistence_mode":"warn","atomic_writes":false}"#).unwrap();
        assert_eq!(
            parsed,
            CollectionConfig::default().with_atomic_writes(false)
        );
    }
}
