use serde::Serialize;

/// Frame-indexed output of a full capture run.
///
/// Both series have one entry per processed frame; entries are written once
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameSeries {
    /// Peak magnitude of the primary antenna's range-Doppler map, per frame.
    pub magnitude: Vec<f32>,
    /// Angle estimate per frame; 0.0 where the magnitude gate did not pass.
    pub angle: Vec<f32>,
}

impl FrameSeries {
    /// Pre-sized series for indexed writes from parallel workers.
    pub fn zeroed(frames: usize) -> Self {
        Self {
            magnitude: vec![0.0; frames],
            angle: vec![0.0; frames],
        }
    }

    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Drops entries past `frames`, used after a cancelled run.
    pub fn truncate(&mut self, frames: usize) {
        self.magnitude.truncate(frames);
        self.angle.truncate(frames);
    }
}
