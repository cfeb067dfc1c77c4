use ndarray::ArrayView2;
use num_complex::Complex32;
use serde::Serialize;

/// Location and magnitude of a range-Doppler map's global maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakRecord {
    pub range_bin: usize,
    pub velocity_bin: usize,
    pub magnitude: f32,
}

/// Scans the whole map for its strongest cell.
///
/// The running maximum starts at cell (0, 0) and only a strictly greater
/// magnitude displaces it, so ties keep the first cell in row-major
/// (range bin, then velocity bin) order.
pub fn locate_peak(map: ArrayView2<'_, Complex32>) -> PeakRecord {
    let mut peak = PeakRecord {
        range_bin: 0,
        velocity_bin: 0,
        magnitude: map[[0, 0]].norm(),
    };

    for ((range_bin, velocity_bin), cell) in map.indexed_iter() {
        let magnitude = cell.norm();
        if magnitude > peak.magnitude {
            peak = PeakRecord {
                range_bin,
                velocity_bin,
                magnitude,
            };
        }
    }

    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rustfft::num_traits::Zero;

    #[test]
    fn finds_the_global_maximum() {
        let mut map = Array2::from_elem((4, 6), Complex32::zero());
        map[[1, 3]] = Complex32::new(0.0, 2.5);
        map[[3, 5]] = Complex32::new(1.0, 0.0);

        let peak = locate_peak(map.view());
        assert_eq!(peak.range_bin, 1);
        assert_eq!(peak.velocity_bin, 3);
        assert!((peak.magnitude - 2.5).abs() < 1e-6);
    }

    #[test]
    fn ties_keep_the_first_cell_in_row_major_order() {
        let mut map = Array2::from_elem((3, 3), Complex32::zero());
        map[[0, 2]] = Complex32::new(1.0, 0.0);
        map[[2, 0]] = Complex32::new(-1.0, 0.0);

        let peak = locate_peak(map.view());
        assert_eq!((peak.range_bin, peak.velocity_bin), (0, 2));
    }

    #[test]
    fn all_zero_map_reports_origin() {
        let map = Array2::from_elem((2, 2), Complex32::zero());
        let peak = locate_peak(map.view());
        assert_eq!((peak.range_bin, peak.velocity_bin), (0, 0));
        assert_eq!(peak.magnitude, 0.0);
    }
}
