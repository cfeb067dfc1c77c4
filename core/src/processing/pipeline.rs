use crate::capture::RawCapture;
use crate::math::fft::FftHelper;
use crate::math::window::WindowCache;
use crate::prelude::{PipelineError, PipelineResult, RadarConfig};
use crate::processing::doppler::{doppler_map, empty_map};
use crate::processing::range::range_spectrum;
use ndarray::Array2;
use num_complex::Complex32;
use rustfft::num_traits::Zero;

/// Per-worker scratch state for processing frames.
///
/// Owns the planned FFTs, the two cached windows and the transient buffers
/// (normalized chirp, per-chirp spectra, chirp-indexed slice), so one frame's
/// intermediates never outlive the frame and repeated frames allocate
/// nothing. Each parallel worker builds its own pipeline.
pub struct FramePipeline {
    range_window: Vec<f32>,
    doppler_window: Vec<f32>,
    range_fft: FftHelper,
    doppler_fft: FftHelper,
    adc: Vec<f32>,
    spectrum: Vec<Complex32>,
    spectra: Array2<Complex32>,
    slice: Vec<Complex32>,
    range_fft_len: usize,
    chirps_per_frame: usize,
}

impl FramePipeline {
    pub fn new(config: &RadarConfig) -> Self {
        let samples = config.samples_per_chirp;
        let chirps = config.chirps_per_frame;
        let fft_len = config.range_fft_len();

        let mut windows = WindowCache::new();
        let range_window = windows.window(samples).to_vec();
        let doppler_window = windows.window(chirps).to_vec();

        Self {
            range_window,
            doppler_window,
            range_fft: FftHelper::new(samples),
            doppler_fft: FftHelper::new(chirps),
            adc: Vec::with_capacity(samples),
            spectrum: Vec::with_capacity(fft_len),
            spectra: Array2::from_elem((chirps, fft_len), Complex32::zero()),
            slice: Vec::with_capacity(chirps),
            range_fft_len: fft_len,
            chirps_per_frame: chirps,
        }
    }

    /// Zeroed map matching this pipeline's geometry, for reuse across frames.
    pub fn empty_map(&self) -> Array2<Complex32> {
        empty_map(self.range_fft_len, self.chirps_per_frame)
    }

    /// Range spectra for every chirp, then the Doppler transform per bin.
    pub fn doppler_map_into(
        &mut self,
        capture: &RawCapture,
        frame: usize,
        antenna: usize,
        map: &mut Array2<Complex32>,
    ) -> PipelineResult<()> {
        if antenna >= capture.antennas() {
            return Err(PipelineError::ShapeMismatch(format!(
                "antenna index {} outside cube with {} antennas",
                antenna,
                capture.antennas()
            )));
        }

        for chirp in 0..self.chirps_per_frame {
            range_spectrum(
                capture.chirp(frame, antenna, chirp),
                &self.range_window,
                &mut self.range_fft,
                &mut self.adc,
                &mut self.spectrum,
            );
            for (cell, &value) in self
                .spectra
                .row_mut(chirp)
                .iter_mut()
                .zip(self.spectrum.iter())
            {
                *cell = value;
            }
        }

        doppler_map(
            &self.spectra,
            &self.doppler_window,
            &mut self.doppler_fft,
            &mut self.slice,
            map,
        );
        Ok(())
    }
}
