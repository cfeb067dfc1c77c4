use std::sync::Mutex;

/// Counters accumulated across a capture run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub frames_processed: usize,
    pub gate_passes: usize,
    pub clamped_angles: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_frame(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames_processed += 1;
        }
    }

    pub fn record_gate_pass(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.gate_passes += 1;
        }
    }

    pub fn record_clamped_angle(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.clamped_angles += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_frame();
        recorder.record_frame();
        recorder.record_gate_pass();
        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.frames_processed, 2);
        assert_eq!(snapshot.gate_passes, 1);
        assert_eq!(snapshot.clamped_angles, 0);
    }
}
