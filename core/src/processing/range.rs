use crate::math::fft::FftHelper;
use ndarray::ArrayView1;
use num_complex::Complex32;

/// Full-scale code of the 12-bit ADC.
pub const ADC_MAX_CODE: f32 = 4095.0;

/// One-sided range spectrum of a single chirp.
///
/// Scales the raw codes to roughly [0, 1], removes the DC component,
/// applies the analysis window and runs the real-input FFT. `scratch` and
/// `output` are caller-owned so repeated calls stay allocation-free.
pub fn range_spectrum(
    samples: ArrayView1<'_, u16>,
    window: &[f32],
    fft: &mut FftHelper,
    scratch: &mut Vec<f32>,
    output: &mut Vec<Complex32>,
) {
    debug_assert_eq!(samples.len(), window.len());

    scratch.clear();
    scratch.extend(samples.iter().map(|&code| code as f32 / ADC_MAX_CODE));

    let mean = scratch.iter().sum::<f32>() / scratch.len() as f32;
    for (value, &coeff) in scratch.iter_mut().zip(window) {
        *value = (*value - mean) * coeff;
    }

    fft.forward_real(scratch, output);
}
