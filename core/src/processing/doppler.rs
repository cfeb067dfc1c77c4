use crate::math::fft::{fftshift, FftHelper};
use ndarray::Array2;
use num_complex::Complex32;
use rustfft::num_traits::Zero;

/// Builds the range-Doppler map for one antenna and frame.
///
/// `spectra` holds the per-chirp range spectra, indexed [chirp][range_bin].
/// For every range bin the chirp-indexed slice is mean-removed, windowed,
/// transformed and shifted so zero Doppler sits at the center velocity bin.
/// The result lands in `map`, indexed [range_bin][velocity_bin].
pub fn doppler_map(
    spectra: &Array2<Complex32>,
    window: &[f32],
    fft: &mut FftHelper,
    slice: &mut Vec<Complex32>,
    map: &mut Array2<Complex32>,
) {
    let chirps = spectra.nrows();
    let bins = spectra.ncols();
    debug_assert_eq!(window.len(), chirps);
    debug_assert_eq!(map.dim(), (bins, chirps));

    for bin in 0..bins {
        slice.clear();
        slice.extend(spectra.column(bin).iter().copied());

        let mean = slice.iter().sum::<Complex32>() / chirps as f32;
        for (value, &coeff) in slice.iter_mut().zip(window) {
            *value = (*value - mean) * coeff;
        }

        fft.forward_complex(slice);
        fftshift(slice);

        for (cell, &value) in map.row_mut(bin).iter_mut().zip(slice.iter()) {
            *cell = value;
        }
    }
}

/// Fresh zeroed map with the right dimensions for the given geometry.
pub fn empty_map(range_bins: usize, chirps_per_frame: usize) -> Array2<Complex32> {
    Array2::from_elem((range_bins, chirps_per_frame), Complex32::zero())
}
