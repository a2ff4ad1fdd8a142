//! TOML configuration file support.
//!
//! Every pipeline constant can be overridden from a config file; keys that are
//! left out keep the reference defaults:
//!
//! ```toml
//! # flowwave.toml
//! [grid]
//! t0 = 0.0
//! tf = 1.0
//! dt = 0.0001
//!
//! [flow]
//! mean_flow_rate = 2.0
//! conversion_constant = 1.6666666666666667e-8
//! extrapolation = "extrapolate"   # or "clamp", "error"
//!
//! [paths]
//! features_base = "data/Hoi-featurePoints-normalized"
//! output_base = "Hoi-OlderAdults-Waveform"
//! artery = "ECA"                   # CCA, ICA, ECA or VA
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use flowwave::interpolate::Extrapolation;
use flowwave::pipeline::{Artery, DatasetPaths, PipelineConfig};

/// Root configuration structure for flowwave.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Time grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Physical scaling settings.
    #[serde(default)]
    pub flow: FlowConfig,

    /// Input/output naming.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Time grid overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Grid start time in seconds.
    pub t0: Option<f64>,

    /// Grid end time in seconds.
    pub tf: Option<f64>,

    /// Grid step in seconds.
    pub dt: Option<f64>,
}

/// Flow scaling overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowConfig {
    /// Target mean flow rate in working units.
    pub mean_flow_rate: Option<f64>,

    /// Factor converting working units to m3/s.
    pub conversion_constant: Option<f64>,

    /// Policy for grid points outside the feature-point domain.
    pub extrapolation: Option<Extrapolation>,
}

/// Path overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Feature file base name, `_<ARTERY>.csv` is appended.
    pub features_base: Option<PathBuf>,

    /// Output base name, `_<ARTERY>.csv` is appended.
    pub output_base: Option<PathBuf>,

    /// Artery selector.
    pub artery: Option<Artery>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Merge onto the reference defaults.
    pub fn into_pipeline_config(self) -> PipelineConfig {
        let defaults = DatasetPaths::default();
        let paths = DatasetPaths {
            features_base: self.paths.features_base.unwrap_or(defaults.features_base),
            output_base: self.paths.output_base.unwrap_or(defaults.output_base),
            artery: self.paths.artery.unwrap_or(defaults.artery),
        };

        let base = PipelineConfig::default();
        PipelineConfig {
            t0: self.grid.t0.unwrap_or(base.t0),
            tf: self.grid.tf.unwrap_or(base.tf),
            dt: self.grid.dt.unwrap_or(base.dt),
            mean_flow_rate: self.flow.mean_flow_rate.unwrap_or(base.mean_flow_rate),
            conversion_constant: self
                .flow
                .conversion_constant
                .unwrap_or(base.conversion_constant),
            extrapolation: self.flow.extrapolation.unwrap_or(base.extrapolation),
            ..base
        }
        .with_dataset(&paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [grid]
            t0 = 0.1
            tf = 0.9
            dt = 0.001

            [flow]
            mean_flow_rate = 6.5
            conversion_constant = 1.0
            extrapolation = "clamp"

            [paths]
            features_base = "features/Hoi"
            output_base = "out/Hoi"
            artery = "CCA"
        "#;

        let config = Config::from_str(toml).unwrap().into_pipeline_config();
        assert_eq!(config.t0, 0.1);
        assert_eq!(config.tf, 0.9);
        assert_eq!(config.dt, 0.001);
        assert_eq!(config.mean_flow_rate, 6.5);
        assert_eq!(config.conversion_constant, 1.0);
        assert_eq!(config.extrapolation, Extrapolation::Clamp);
        assert_eq!(config.input_path, Path::new("features/Hoi_CCA.csv"));
        assert_eq!(config.output_name, Path::new("out/Hoi_CCA"));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [flow]
            mean_flow_rate = 4.0
        "#;

        let config = Config::from_str(toml).unwrap().into_pipeline_config();
        assert_eq!(config.mean_flow_rate, 4.0);
        assert_eq!(config.dt, 0.0001);
        assert_eq!(config.output_name, Path::new("Hoi-OlderAdults-Waveform_ECA"));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap().into_pipeline_config();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_str("[grid]\nstep = 0.1\n").is_err());
        assert!(Config::from_str("[flow]\nextrapolation = \"linear\"\n").is_err());
    }
}
