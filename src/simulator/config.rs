//! Simulation configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown script `{0}` (expected idle, patrol or circle)")]
    UnknownScript(String),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Which canned input drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    /// Stand still at the spawn point
    Idle,
    /// Walk a square, pressing action every second
    #[default]
    Patrol,
    /// Walk in a slow circle, pressing action every second
    Circle,
}

impl std::str::FromStr for ScriptKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(ScriptKind::Idle),
            "patrol" => Ok(ScriptKind::Patrol),
            "circle" => Ok(ScriptKind::Circle),
            other => Err(ConfigError::UnknownScript(other.to_string())),
        }
    }
}

/// Configuration for a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Map seed; also seeds the gameplay rng so a run is fully reproducible
    pub seed: u32,

    /// Stop after this many ticks if the player is still alive
    pub max_ticks: u64,

    /// Seconds simulated per tick
    pub delta_time: f64,

    pub map_width: usize,
    pub map_height: usize,

    pub script: ScriptKind,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every event)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            max_ticks: 18_000,
            delta_time: 1.0 / 60.0,
            map_width: crate::core::constants::MAP_WIDTH,
            map_height: crate::core::constants::MAP_HEIGHT,
            script: ScriptKind::Patrol,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// One simulated minute
    pub fn quick() -> Self {
        Self {
            max_ticks: 3_600,
            ..Default::default()
        }
    }

    /// Player never moves; measures how long the starting kit lasts
    pub fn idle_survival() -> Self {
        Self {
            script: ScriptKind::Idle,
            max_ticks: 36_000,
            ..Default::default()
        }
    }

    /// Small cramped map with coarse ticks
    pub fn small_map() -> Self {
        Self {
            map_width: 40,
            map_height: 40,
            delta_time: 0.1,
            ..Default::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta_time.is_finite() || self.delta_time <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "delta_time",
                reason: format!("{} is not a positive number of seconds", self.delta_time),
            });
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::Invalid {
                field: "max_ticks",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::Invalid {
                field: "map size",
                reason: format!("{}x{} has no tiles", self.map_width, self.map_height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 7, "script": "circle" }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.script, ScriptKind::Circle);
        assert_eq!(config.max_ticks, SimConfig::default().max_ticks);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SimConfig::from_json(r#"{ "delta_time": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "delta_time", .. }));

        let err = SimConfig::from_json(r#"{ "max_ticks": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_ticks", .. }));

        assert!(matches!(
            SimConfig::from_json("not json").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_script_from_str() {
        assert_eq!("idle".parse::<ScriptKind>().unwrap(), ScriptKind::Idle);
        assert!(matches!(
            "dance".parse::<ScriptKind>(),
            Err(ConfigError::UnknownScript(_))
        ));
    }

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SimConfig::default(),
            SimConfig::quick(),
            SimConfig::idle_survival(),
            SimConfig::small_map(),
        ] {
            assert!(config.validate().is_ok());
        }
    }
}
