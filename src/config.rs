//! Display and chart configuration.
//!
//! Everything here has a default, so a config file only needs to name the
//! settings it overrides.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Margin ratio threshold must be a percentage between 0 and 100, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Contribution margin ratios at or above this percentage are shown as healthy.
    pub good_ratio_threshold: f64,
    pub chart: ChartStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            good_ratio_threshold: 25.0,
            chart: ChartStyle::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_json(&json)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let t = self.good_ratio_threshold;
        if !t.is_finite() || !(0.0..=100.0).contains(&t) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }
}

/// Static styling handed to the line-chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub cost: LineStyle,
    pub revenue: LineStyle,
    pub animation: Animation,
    /// Legend, tick and axis-title colour.
    pub text_color: String,
    pub grid_color: String,
    pub tooltip: TooltipStyle,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            cost: LineStyle {
                label: "Total costs".into(),
                border_color: "#ececec".into(),
                background_color: "rgba(236, 236, 236, 0.1)".into(),
                fill: false,
                tension: 0.1,
            },
            revenue: LineStyle {
                label: "Total revenue".into(),
                border_color: "#b4b4b4".into(),
                background_color: "rgba(180, 180, 180, 0.1)".into(),
                fill: false,
                tension: 0.1,
            },
            animation: Animation::default(),
            text_color: "#ececec".into(),
            grid_color: "#3a3a3a".into(),
            tooltip: TooltipStyle::default(),
            x_axis_title: "Units sold".into(),
            y_axis_title: "Amount".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    /// Milliseconds.
    pub duration: u32,
    pub easing: String,
}

impl Default for Animation {
    fn default() -> Self {
        Self { duration: 1000, easing: "easeInOutQuart".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipStyle {
    pub enabled: bool,
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            background_color: "#2f2f2f".into(),
            title_color: "#ececec".into(),
            body_color: "#ececec".into(),
            border_color: "#ececec".into(),
            border_width: 1,
        }
    }
}
