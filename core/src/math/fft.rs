use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps the `rustfft` planner for reuse at a fixed size.
pub struct FftHelper {
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex32>,
    buffer: Vec<Complex32>,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let scratch = vec![Complex32::zero(); fft.get_inplace_scratch_len()];
        Self {
            fft,
            scratch,
            buffer: Vec::with_capacity(size),
        }
    }

    pub fn size(&self) -> usize {
        self.fft.len()
    }

    /// Forward transform of real input, one-sided output of length N/2 + 1.
    ///
    /// Equivalent to a real FFT: the upper half of the full spectrum is the
    /// conjugate mirror and is dropped.
    pub fn forward_real(&mut self, input: &[f32], output: &mut Vec<Complex32>) {
        debug_assert_eq!(input.len(), self.fft.len());
        self.buffer.clear();
        self.buffer
            .extend(input.iter().map(|&value| Complex32::new(value, 0.0)));
        self.fft
            .process_with_scratch(&mut self.buffer, &mut self.scratch);

        let one_sided = self.fft.len() / 2 + 1;
        output.clear();
        output.extend_from_slice(&self.buffer[..one_sided]);
    }

    /// In-place forward transform of a complex buffer.
    pub fn forward_complex(&mut self, buffer: &mut [Complex32]) {
        debug_assert_eq!(buffer.len(), self.fft.len());
        self.fft.process_with_scratch(buffer, &mut self.scratch);
    }
}

/// Reorders a spectrum so zero frequency sits at the center index.
///
/// For even length L the zero bin lands at index L/2, negative frequencies
/// fill the left half.
pub fn fftshift(buffer: &mut [Complex32]) {
    let half = buffer.len() / 2;
    buffer.rotate_right(half);
}
