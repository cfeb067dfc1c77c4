use num_complex::Complex32;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Signed circular difference of two phases, wrapped into (-pi, pi].
///
/// The correction turn is subtracted when `a1 > a2` and added otherwise;
/// whichever representative is closer to zero wins, ties keep the raw
/// difference.
pub fn wrapped_phase_diff(a1: f32, a2: f32) -> f32 {
    let sign = if a1 > a2 { 1.0 } else { -1.0 };
    let raw = a1 - a2;
    let correction = -sign * 2.0 * PI;
    if (correction + raw).abs() < raw.abs() {
        correction + raw
    } else {
        raw
    }
}

/// Nonlinear mapping applied to the normalized phase-difference argument.
///
/// `Sinh` matches the reference formula; `Asin` is the standard two-element
/// interferometer recovery and clamps its argument to [-1, 1], flagging the
/// clamp on the returned estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMapping {
    Sinh,
    Asin,
}

impl Default for AngleMapping {
    fn default() -> Self {
        AngleMapping::Sinh
    }
}

/// Angle value for one frame, with a flag for a clamped `asin` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEstimate {
    pub value: f32,
    pub clamped: bool,
}

/// Phase-interferometry angle estimator over a fixed antenna baseline.
pub struct AngleEstimator {
    wavelength_m: f32,
    antenna_spacing_m: f32,
    mapping: AngleMapping,
}

impl AngleEstimator {
    pub fn new(wavelength_m: f32, antenna_spacing_m: f32, mapping: AngleMapping) -> Self {
        Self {
            wavelength_m,
            antenna_spacing_m,
            mapping,
        }
    }

    /// Angle quantity from the same map cell seen by two antennas.
    pub fn estimate(&self, primary: Complex32, secondary: Complex32) -> AngleEstimate {
        let diff = wrapped_phase_diff(primary.arg(), secondary.arg());
        let argument = self.wavelength_m * diff / (2.0 * PI * self.antenna_spacing_m);

        match self.mapping {
            AngleMapping::Sinh => AngleEstimate {
                value: argument.sinh(),
                clamped: false,
            },
            AngleMapping::Asin => {
                let clamped = !(-1.0..=1.0).contains(&argument);
                AngleEstimate {
                    value: argument.clamp(-1.0, 1.0).asin(),
                    clamped,
                }
            }
        }
    }
}
