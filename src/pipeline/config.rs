use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::grid::GridSpec;
use crate::interpolate::Extrapolation;
use crate::waveform::FlowScaling;

/// Artery whose feature points are processed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Artery {
    /// Common carotid artery
    Cca,
    /// Internal carotid artery
    Ica,
    /// External carotid artery
    #[default]
    Eca,
    /// Vertebral artery
    Va,
}

impl Artery {
    /// File-name suffix, e.g. `ECA`
    pub fn suffix(&self) -> &'static str {
        match self {
            Artery::Cca => "CCA",
            Artery::Ica => "ICA",
            Artery::Eca => "ECA",
            Artery::Va => "VA",
        }
    }

    /// Returns all available artery names.
    pub fn variants() -> &'static [&'static str] {
        &["CCA", "ICA", "ECA", "VA"]
    }
}

impl fmt::Display for Artery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Artery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('_').to_uppercase().as_str() {
            "CCA" => Ok(Artery::Cca),
            "ICA" => Ok(Artery::Ica),
            "ECA" => Ok(Artery::Eca),
            "VA" => Ok(Artery::Va),
            _ => Err(format!(
                "Unknown artery '{}'. Valid options: {}",
                s,
                Artery::variants().join(", ")
            )),
        }
    }
}

/// Naming convention linking a feature file to its output
///
/// Input: `<features_base>_<ARTERY>.csv`, output name: `<output_base>_<ARTERY>`
/// (the writer appends `.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPaths {
    /// Feature file path without artery suffix and extension
    pub features_base: PathBuf,
    /// Output path without artery suffix and extension
    pub output_base: PathBuf,
    /// Selected artery
    pub artery: Artery,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            features_base: PathBuf::from("data/Hoi-featurePoints-normalized"),
            output_base: PathBuf::from("Hoi-OlderAdults-Waveform"),
            artery: Artery::default(),
        }
    }
}

impl DatasetPaths {
    /// Feature file for the selected artery
    pub fn input_path(&self) -> PathBuf {
        with_suffix(&self.features_base, &format!("_{}.csv", self.artery))
    }

    /// Output name for the selected artery, without extension
    pub fn output_name(&self) -> PathBuf {
        with_suffix(&self.output_base, &format!("_{}", self.artery))
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Every parameter of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Grid start time (s)
    pub t0: f64,
    /// Grid end time (s)
    pub tf: f64,
    /// Grid step (s)
    pub dt: f64,
    /// Target mean flow in working units
    pub mean_flow_rate: f64,
    /// Working units to m³/s
    pub conversion_constant: f64,
    /// Out-of-domain policy for grid points beyond the feature points
    pub extrapolation: Extrapolation,
    /// Feature point CSV
    pub input_path: PathBuf,
    /// Output name; `.csv` is appended on write
    pub output_name: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let grid = GridSpec::default();
        let scaling = FlowScaling::default();
        Self {
            t0: grid.t0,
            tf: grid.tf,
            dt: grid.dt,
            mean_flow_rate: scaling.mean_flow_rate,
            conversion_constant: scaling.conversion_constant,
            extrapolation: Extrapolation::default(),
            input_path: PathBuf::new(),
            output_name: PathBuf::new(),
        }
        .with_dataset(&DatasetPaths::default())
    }
}

impl PipelineConfig {
    /// Take input and output paths from a dataset naming convention
    pub fn with_dataset(mut self, paths: &DatasetPaths) -> Self {
        self.input_path = paths.input_path();
        self.output_name = paths.output_name();
        self
    }

    /// Grid parameters
    pub fn grid(&self) -> GridSpec {
        GridSpec {
            t0: self.t0,
            tf: self.tf,
            dt: self.dt,
        }
    }

    /// Physical scaling parameters
    pub fn scaling(&self) -> FlowScaling {
        FlowScaling {
            mean_flow_rate: self.mean_flow_rate,
            conversion_constant: self.conversion_constant,
        }
    }
}
