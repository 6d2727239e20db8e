use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::{ReachError, ReachResult, MIN_DIMENSION};
use crate::services::algorithm::Algorithm;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
}

/// Random grid generation parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
    pub wall_density: f64,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            wall_density: 0.4,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub visualize: bool,
    pub render_pause_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            visualize: false,
            render_pause_ms: 200,
        }
    }
}

impl SearchConfig {
    pub fn render_pause(&self) -> Duration {
        Duration::from_millis(self.render_pause_ms)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "gridreach".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ReachResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ReachResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ReachResult<()> {
        let GridConfig {
            height,
            width,
            wall_density,
            ..
        } = self.grid;

        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(ReachError::InvalidDimensions { height, width });
        }
        if !(0.0..=1.0).contains(&wall_density) {
            return Err(ReachError::InvalidDensity(wall_density));
        }
        if self.log.level.trim().is_empty() {
            return Err(ReachError::Config("log.level 不能为空".to_string()));
        }
        Ok(())
    }
}
