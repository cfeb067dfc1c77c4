use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use fmcwcore::prelude::RadarConfig;
use fmcwcore::telemetry::MetricsSnapshot;
use fmcwcore::{FrameSequencer, FrameSeries, RawCapture};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub series: FrameSeries,
    pub gate_passes: usize,
    pub clamped_angles: usize,
}

#[derive(Clone)]
pub struct Runner {
    radar: RadarConfig,
    workflow: WorkflowConfig,
}

impl Runner {
    pub fn new(radar: RadarConfig, workflow: WorkflowConfig) -> Self {
        Self { radar, workflow }
    }

    pub fn execute(&self, capture: &RawCapture) -> anyhow::Result<RunSummary> {
        let sequencer =
            FrameSequencer::new(self.radar.clone(), self.workflow.sequencer.clone())
                .context("building frame sequencer")?;

        let series = if self.workflow.workers > 1 {
            sequencer
                .process_capture_parallel(capture, self.workflow.workers)
                .context("processing capture in parallel")?
        } else {
            sequencer
                .process_capture(capture)
                .context("processing capture")?
        };

        let MetricsSnapshot {
            gate_passes,
            clamped_angles,
            ..
        } = sequencer.metrics();

        Ok(RunSummary {
            series,
            gate_passes,
            clamped_angles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_capture;

    fn radar_config() -> RadarConfig {
        RadarConfig {
            sample_rate_hz: 1_000_000.0,
            start_frequency_hz: 58.5e9,
            end_frequency_hz: 62.5e9,
            samples_per_chirp: 64,
            chirps_per_frame: 32,
            antenna_count: 3,
            antenna_spacing_m: 2.5e-3,
        }
    }

    #[test]
    fn runner_processes_a_synthetic_capture() {
        let radar = radar_config();
        let workflow = WorkflowConfig::default();
        let capture = build_capture(&radar, &workflow.scenario).unwrap();

        let runner = Runner::new(radar, workflow.clone());
        let summary = runner.execute(&capture).unwrap();
        assert_eq!(summary.series.len(), workflow.scenario.frames);
        // The default scenario's tone is strong enough to pass the gate.
        assert_eq!(summary.gate_passes, workflow.scenario.frames);
    }

    #[test]
    fn parallel_workers_produce_the_same_series() {
        let radar = radar_config();
        let workflow = WorkflowConfig::default();
        let capture = build_capture(&radar, &workflow.scenario).unwrap();

        let sequential = Runner::new(radar.clone(), workflow.clone())
            .execute(&capture)
            .unwrap();
        let parallel_workflow = WorkflowConfig {
            workers: 3,
            ..workflow
        };
        let parallel = Runner::new(radar, parallel_workflow)
            .execute(&capture)
            .unwrap();
        assert_eq!(sequential.series.magnitude, parallel.series.magnitude);
        assert_eq!(sequential.series.angle, parallel.series.angle);
    }
}
