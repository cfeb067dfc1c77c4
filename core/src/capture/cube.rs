use crate::prelude::{PipelineError, PipelineResult, RadarConfig};
use ndarray::{Array4, ArrayView1, Axis};

/// Raw ADC capture cube, indexed [frame][antenna][chirp][sample].
///
/// Samples are 12-bit codes (0..=4095). The cube is owned by the caller and
/// read-only once constructed; the pipeline only borrows per-frame views.
pub struct RawCapture {
    data: Array4<u16>,
}

impl RawCapture {
    /// Wraps a sample cube after checking its shape against the configuration.
    ///
    /// A malformed cube almost certainly affects every frame, so shape errors
    /// are fatal for the whole run and are raised here, before any processing.
    pub fn new(data: Array4<u16>, config: &RadarConfig) -> PipelineResult<Self> {
        config.validate()?;
        let shape = data.shape();
        if shape[2] != config.chirps_per_frame {
            return Err(PipelineError::ShapeMismatch(format!(
                "cube has {} chirps per frame, configuration expects {}",
                shape[2], config.chirps_per_frame
            )));
        }
        if shape[3] != config.samples_per_chirp {
            return Err(PipelineError::ShapeMismatch(format!(
                "cube has {} samples per chirp, configuration expects {}",
                shape[3], config.samples_per_chirp
            )));
        }
        if shape[1] == 0 {
            return Err(PipelineError::ShapeMismatch(
                "cube has no antenna axis".into(),
            ));
        }
        Ok(Self { data })
    }

    pub fn frames(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn antennas(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// One chirp's raw sample vector.
    pub fn chirp(&self, frame: usize, antenna: usize, chirp: usize) -> ArrayView1<'_, u16> {
        self.data.slice(ndarray::s![frame, antenna, chirp, ..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    fn config() -> RadarConfig {
        RadarConfig {
            sample_rate_hz: 1_000_000.0,
            start_frequency_hz: 58.5e9,
            end_frequency_hz: 62.5e9,
            samples_per_chirp: 16,
            chirps_per_frame: 8,
            antenna_count: 3,
            antenna_spacing_m: 2.5e-3,
        }
    }

    #[test]
    fn matching_shape_is_accepted() {
        let data = Array4::<u16>::zeros((2, 3, 8, 16));
        let capture = RawCapture::new(data, &config()).unwrap();
        assert_eq!(capture.frames(), 2);
        assert_eq!(capture.antennas(), 3);
        assert_eq!(capture.chirp(1, 2, 7).len(), 16);
    }

    #[test]
    fn wrong_sample_axis_is_rejected() {
        let data = Array4::<u16>::zeros((2, 3, 8, 12));
        assert!(matches!(
            RawCapture::new(data, &config()),
            Err(PipelineError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn wrong_chirp_axis_is_rejected() {
        let data = Array4::<u16>::zeros((2, 3, 4, 16));
        assert!(RawCapture::new(data, &config()).is_err());
    }
}
