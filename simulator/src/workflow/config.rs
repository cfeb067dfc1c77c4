use crate::generator::profile::ScenarioConfig;
use anyhow::Context;
use fmcwcore::prelude::RadarConfig;
use fmcwcore::SequencerOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default antenna geometry of the reference sensor; the device JSON only
/// describes the chirp shape.
const DEFAULT_ANTENNA_COUNT: usize = 3;
const DEFAULT_ANTENNA_SPACING_M: f64 = 2.5e-3;

/// Device configuration JSON as written by the capture tooling:
/// `device_config.fmcw_single_shape.{...}`.
#[derive(Debug, Deserialize)]
struct DeviceConfigFile {
    device_config: DeviceConfigBody,
}

#[derive(Debug, Deserialize)]
struct DeviceConfigBody {
    fmcw_single_shape: FmcwSingleShape,
}

#[derive(Debug, Deserialize)]
struct FmcwSingleShape {
    #[serde(rename = "sample_rate_Hz")]
    sample_rate_hz: f64,
    #[serde(rename = "start_frequency_Hz")]
    start_frequency_hz: f64,
    #[serde(rename = "end_frequency_Hz")]
    end_frequency_hz: f64,
    num_samples_per_chirp: usize,
    num_chirps_per_frame: usize,
}

/// Reads a device configuration JSON into a validated `RadarConfig`.
pub fn load_device_config<P: AsRef<Path>>(path: P) -> anyhow::Result<RadarConfig> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading device config {}", path_ref.display()))?;
    let file: DeviceConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing device config {}", path_ref.display()))?;

    let shape = file.device_config.fmcw_single_shape;
    let config = RadarConfig {
        sample_rate_hz: shape.sample_rate_hz,
        start_frequency_hz: shape.start_frequency_hz,
        end_frequency_hz: shape.end_frequency_hz,
        samples_per_chirp: shape.num_samples_per_chirp,
        chirps_per_frame: shape.num_chirps_per_frame,
        antenna_count: DEFAULT_ANTENNA_COUNT,
        antenna_spacing_m: DEFAULT_ANTENNA_SPACING_M,
    };
    config.validate()?;
    Ok(config)
}

/// Workflow YAML: sequencer knobs, worker count and the synthetic scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sequencer: SequencerOptions,
    pub scenario: ScenarioConfig,
    pub workers: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            sequencer: SequencerOptions::default(),
            scenario: ScenarioConfig::default(),
            workers: 1,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn device_config_json_maps_to_radar_config() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            br#"{
                "device_config": {
                    "fmcw_single_shape": {
                        "sample_rate_Hz": 1000000,
                        "start_frequency_Hz": 58500000000,
                        "end_frequency_Hz": 62500000000,
                        "num_samples_per_chirp": 64,
                        "num_chirps_per_frame": 32
                    }
                }
            }"#,
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = load_device_config(&path).unwrap();
        assert_eq!(config.samples_per_chirp, 64);
        assert_eq!(config.chirps_per_frame, 32);
        assert_eq!(config.range_fft_len(), 33);
        assert_eq!(config.antenna_count, 3);
    }

    #[test]
    fn invalid_sweep_in_device_config_is_rejected() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            br#"{
                "device_config": {
                    "fmcw_single_shape": {
                        "sample_rate_Hz": 1000000,
                        "start_frequency_Hz": 62500000000,
                        "end_frequency_Hz": 58500000000,
                        "num_samples_per_chirp": 64,
                        "num_chirps_per_frame": 32
                    }
                }
            }"#,
        )
        .unwrap();
        let path = temp.into_temp_path();
        assert!(load_device_config(&path).is_err());
    }

    #[test]
    fn workflow_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"workers: 4\nscenario:\n  frames: 8\nsequencer:\n  gate_threshold: 0.7\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = WorkflowConfig::load(&path).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.scenario.frames, 8);
        assert!((config.sequencer.gate_threshold - 0.7).abs() < 1e-6);
    }
}
