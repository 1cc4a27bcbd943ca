// Dashboard configuration
//
// One explicit config value, constructed at process start and passed into
// the render routine. Defaults mirror the published dashboard; a JSON file
// can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fallback values for the weather metrics when the rain report is absent
/// or a labeled field does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherDefaults {
    pub correlation: f64,
    pub elasticity: f64,
    pub wettest_month: String,
}

impl Default for WeatherDefaults {
    fn default() -> Self {
        Self {
            correlation: 0.041,
            elasticity: -0.40,
            wettest_month: "May 2025".to_string(),
        }
    }
}

/// Settings for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory the analysis pipeline writes its artifacts into
    pub artifacts_dir: PathBuf,
    pub title: String,
    pub subtitle: String,
    pub weather_defaults: WeatherDefaults,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("outputs/visualizations"),
            title: "NYC Congestion Pricing Audit Dashboard".to_string(),
            subtitle: "Impact Analysis of Manhattan Congestion Relief Zone Toll \
                       (Implemented Jan 5, 2025)"
                .to_string(),
            weather_defaults: WeatherDefaults::default(),
        }
    }
}

impl DashboardConfig {
    /// Load a config file, filling unspecified fields from the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_the_published_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.artifacts_dir, PathBuf::from("outputs/visualizations"));
        assert_eq!(config.weather_defaults.correlation, 0.041);
        assert_eq!(config.weather_defaults.elasticity, -0.40);
        assert_eq!(config.weather_defaults.wettest_month, "May 2025");
    }

    #[test]
    fn partial_config_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, r#"{"artifacts_dir": "/tmp/artifacts"}"#).unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.artifacts_dir, PathBuf::from("/tmp/artifacts"));
        assert_eq!(config.title, DashboardConfig::default().title);
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = DashboardConfig::default();
        config.weather_defaults.elasticity = -1.5;

        let json = serde_json::to_string(&config).unwrap();
        let back: DashboardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(DashboardConfig::load(Path::new("/nonexistent/dashboard.json")).is_err());
    }
}
