//! Configuration types for the simulations and the driver.

use crate::error::{Error, Result};
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewport size and the minimum size worth animating on
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Below this width (and `min_height`) nothing is animated
    pub min_width: u32,
    pub min_height: u32,
}

impl ViewportConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            min_width: 768,
            min_height: 1024,
        }
    }
}

/// Life simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Cell pitch in pixels
    pub cell_width: u32,
    pub cell_height: u32,
    /// Milliseconds between generations
    pub tick_rate_ms: u64,
    /// Lower bound (inclusive) of the random density divisor
    pub divisor_min: i32,
    /// Upper bound (exclusive) of the random density divisor
    pub divisor_max: i32,
    /// Explicit starting cells; replaces random seeding when set
    pub pattern: Option<Vec<(i64, i64)>>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_width: 10,
            cell_height: 10,
            tick_rate_ms: 100,
            divisor_min: 4,
            divisor_max: 7,
            pattern: None,
        }
    }
}

/// Maze carver parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Cell pitch in pixels
    pub cell_width: u32,
    pub cell_height: u32,
    /// Milliseconds between carve steps
    pub tick_rate_ms: u64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cell_width: 40,
            cell_height: 40,
            tick_rate_ms: 50,
        }
    }
}

/// Which simulation the driver plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmChoice {
    /// Pick one uniformly at startup
    Random,
    Life,
    Maze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Top-level driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Random seed for reproducibility; entropy when absent
    pub seed: Option<u64>,
    pub algorithm: AlgorithmChoice,
    /// Stop after this many steps
    pub max_steps: Option<u64>,
    /// Print frames to stdout
    pub render: bool,
    pub log_format: LogFormat,
    pub viewport: ViewportConfig,
    pub life: LifeConfig,
    pub maze: MazeConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            algorithm: AlgorithmChoice::Random,
            max_steps: None,
            render: true,
            log_format: LogFormat::Pretty,
            viewport: ViewportConfig::default(),
            life: LifeConfig::default(),
            maze: MazeConfig::default(),
        }
    }
}

impl DriverConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.life.divisor_min <= 0 || self.life.divisor_max <= self.life.divisor_min {
            return Err(Error::InvalidConfig(format!(
                "life divisor range {}..{} must be non-empty and positive",
                self.life.divisor_min, self.life.divisor_max
            )));
        }
        if self.life.tick_rate_ms == 0 || self.maze.tick_rate_ms == 0 {
            return Err(Error::InvalidConfig("tick rate must be non-zero".to_string()));
        }
        if self.life.cell_width == 0
            || self.life.cell_height == 0
            || self.maze.cell_width == 0
            || self.maze.cell_height == 0
        {
            return Err(Error::InvalidConfig("cell pitch must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.life.cell_width, 10);
        assert_eq!(config.life.tick_rate_ms, 100);
        assert_eq!((config.life.divisor_min, config.life.divisor_max), (4, 7));
        assert_eq!(config.maze.cell_width, 40);
        assert_eq!(config.maze.tick_rate_ms, 50);
        assert_eq!(config.algorithm, AlgorithmChoice::Random);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DriverConfig::from_json(
            r#"{ "seed": 7, "algorithm": "maze", "maze": { "cell_width": 20 } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.algorithm, AlgorithmChoice::Maze);
        assert_eq!(config.maze.cell_width, 20);
        assert_eq!(config.maze.cell_height, 40);
        assert_eq!(config.viewport.width, 1920);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = DriverConfig::default();
        config.life.pattern = Some(vec![(0, 0), (1, 0)]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = DriverConfig::from_json(&json).unwrap();
        assert_eq!(deserialized.life.pattern, config.life.pattern);
        assert_eq!(deserialized.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_empty_divisor_range_rejected() {
        let err = DriverConfig::from_json(r#"{ "life": { "divisor_min": 5, "divisor_max": 5 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = DriverConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DriverConfig::load("/nonexistent/backdrop.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
