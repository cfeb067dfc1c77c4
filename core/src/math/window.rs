use std::collections::HashMap;

// 4-term Blackman-Harris coefficients (symmetric form).
const A0: f32 = 0.35875;
const A1: f32 = 0.48829;
const A2: f32 = 0.14128;
const A3: f32 = 0.01168;

/// Symmetric 4-term Blackman-Harris window of the given length.
///
/// Length 0 is a contract violation on the caller's side.
pub fn blackman_harris(length: usize) -> Vec<f32> {
    assert!(length >= 1, "window length must be at least 1");
    if length == 1 {
        return vec![1.0];
    }

    let denom = (length - 1) as f32;
    (0..length)
        .map(|i| {
            let x = 2.0 * std::f32::consts::PI * i as f32 / denom;
            A0 - A1 * x.cos() + A2 * (2.0 * x).cos() - A3 * (3.0 * x).cos()
        })
        .collect()
}

/// Memoizes windows by length.
///
/// A configuration only ever needs two lengths (samples per chirp and chirps
/// per frame), so the map stays tiny.
pub struct WindowCache {
    cache: HashMap<usize, Vec<f32>>,
}

impl WindowCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn window(&mut self, length: usize) -> &[f32] {
        self.cache
            .entry(length)
            .or_insert_with(|| blackman_harris(length))
    }
}

impl Default for WindowCache {
    fn default() -> Self {
        Self::new()
    }
}
