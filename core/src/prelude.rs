use serde::{Deserialize, Serialize};

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Immutable per-capture radar configuration.
///
/// Holds the primitive scalars of one FMCW acquisition; everything else the
/// pipeline needs (spectrum length, chirp slope, wavelength) is derived on
/// demand from these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    pub sample_rate_hz: f64,
    pub start_frequency_hz: f64,
    pub end_frequency_hz: f64,
    pub samples_per_chirp: usize,
    pub chirps_per_frame: usize,
    pub antenna_count: usize,
    /// Physical spacing between the interferometry antenna pair (m).
    pub antenna_spacing_m: f64,
}

impl RadarConfig {
    /// Checks the configuration invariants before any frame is processed.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.samples_per_chirp == 0 {
            return Err(PipelineError::InvalidConfig(
                "samples_per_chirp must be positive".into(),
            ));
        }
        if self.chirps_per_frame == 0 {
            return Err(PipelineError::InvalidConfig(
                "chirps_per_frame must be positive".into(),
            ));
        }
        if self.antenna_count == 0 {
            return Err(PipelineError::InvalidConfig(
                "antenna_count must be positive".into(),
            ));
        }
        if self.sample_rate_hz <= 0.0 {
            return Err(PipelineError::InvalidConfig(
                "sample_rate_hz must be positive".into(),
            ));
        }
        if self.end_frequency_hz <= self.start_frequency_hz {
            return Err(PipelineError::InvalidConfig(format!(
                "end frequency {} Hz must exceed start frequency {} Hz",
                self.end_frequency_hz, self.start_frequency_hz
            )));
        }
        if self.antenna_spacing_m <= 0.0 {
            return Err(PipelineError::InvalidConfig(
                "antenna_spacing_m must be positive".into(),
            ));
        }
        Ok(())
    }

    /// One-sided range-spectrum length: floor(N/2) + 1.
    pub fn range_fft_len(&self) -> usize {
        self.samples_per_chirp / 2 + 1
    }

    /// Chirp frequency slope (Hz/s).
    pub fn chirp_slope_hz_per_s(&self) -> f64 {
        let chirp_duration = self.samples_per_chirp as f64 / self.sample_rate_hz;
        (self.end_frequency_hz - self.start_frequency_hz) / chirp_duration
    }

    /// Maximum unambiguous range (m).
    pub fn maximum_range_m(&self) -> f64 {
        (self.sample_rate_hz / 2.0) * SPEED_OF_LIGHT / (2.0 * self.chirp_slope_hz_per_s())
    }

    /// Wavelength at the chirp center frequency (m).
    pub fn wavelength_m(&self) -> f64 {
        SPEED_OF_LIGHT / ((self.start_frequency_hz + self.end_frequency_hz) / 2.0)
    }
}

/// Common error type for pipeline execution.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> RadarConfig {
        RadarConfig {
            sample_rate_hz: 1_000_000.0,
            start_frequency_hz: 58.5e9,
            end_frequency_hz: 62.5e9,
            samples_per_chirp: 128,
            chirps_per_frame: 64,
            antenna_count: 3,
            antenna_spacing_m: 2.5e-3,
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn inverted_sweep_is_rejected() {
        let mut config = sample_config();
        config.end_frequency_hz = config.start_frequency_hz;
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_chirp_count_is_rejected() {
        let mut config = sample_config();
        config.chirps_per_frame = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn derived_quantities_match_hand_computation() {
        let config = sample_config();
        assert_eq!(config.range_fft_len(), 65);

        let chirp_duration = 128.0 / 1_000_000.0;
        let slope = 4.0e9 / chirp_duration;
        assert!((config.chirp_slope_hz_per_s() - slope).abs() < 1.0);

        let expected_range = 500_000.0 * SPEED_OF_LIGHT / (2.0 * slope);
        assert!((config.maximum_range_m() - expected_range).abs() < 1e-9);

        let expected_lambda = SPEED_OF_LIGHT / 60.5e9;
        assert!((config.wavelength_m() - expected_lambda).abs() < 1e-12);
    }
}
