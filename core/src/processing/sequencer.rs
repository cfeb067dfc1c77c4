use crate::capture::{FrameSeries, RawCapture};
use crate::prelude::{PipelineError, PipelineResult, RadarConfig};
use crate::processing::angle::{AngleEstimator, AngleMapping};
use crate::processing::peak::locate_peak;
use crate::processing::pipeline::FramePipeline;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{MetricsRecorder, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Knobs for the per-frame orchestration.
///
/// Defaults follow the reference geometry: the first antenna is the primary,
/// the non-adjacent third antenna closes the interferometry baseline, and
/// the magnitude gate sits at 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerOptions {
    pub gate_threshold: f32,
    pub primary_antenna: usize,
    pub secondary_antenna: usize,
    pub mapping: AngleMapping,
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            gate_threshold: 0.5,
            primary_antenna: 0,
            secondary_antenna: 2,
            mapping: AngleMapping::default(),
        }
    }
}

/// Runs the range/Doppler/angle pipeline over every frame of a capture.
pub struct FrameSequencer {
    config: RadarConfig,
    options: SequencerOptions,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl FrameSequencer {
    pub fn new(config: RadarConfig, options: SequencerOptions) -> PipelineResult<Self> {
        config.validate()?;
        if options.primary_antenna == options.secondary_antenna {
            return Err(PipelineError::InvalidConfig(
                "primary and secondary antenna must differ".into(),
            ));
        }
        Ok(Self {
            config,
            options,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Processes all frames in order on the calling thread.
    pub fn process_capture(&self, capture: &RawCapture) -> PipelineResult<FrameSeries> {
        self.check_antennas(capture)?;
        let mut series = FrameSeries::zeroed(capture.frames());
        let mut pipeline = FramePipeline::new(&self.config);
        let (magnitude, angle) = (&mut series.magnitude[..], &mut series.angle[..]);
        self.run_span(&mut pipeline, capture, 0, magnitude, angle, None)?;
        Ok(series)
    }

    /// Like [`process_capture`], but checks the flag between frames and
    /// returns the series truncated to the frames that finished.
    ///
    /// [`process_capture`]: FrameSequencer::process_capture
    pub fn process_capture_cancellable(
        &self,
        capture: &RawCapture,
        cancel: &AtomicBool,
    ) -> PipelineResult<FrameSeries> {
        self.check_antennas(capture)?;
        let mut series = FrameSeries::zeroed(capture.frames());
        let mut pipeline = FramePipeline::new(&self.config);
        let (magnitude, angle) = (&mut series.magnitude[..], &mut series.angle[..]);
        let processed = self.run_span(&mut pipeline, capture, 0, magnitude, angle, Some(cancel))?;
        if processed < capture.frames() {
            self.logger.record(&format!(
                "capture cancelled after {} of {} frames",
                processed,
                capture.frames()
            ));
            series.truncate(processed);
        }
        Ok(series)
    }

    /// Partitions the frame range over scoped worker threads.
    ///
    /// Frames are independent: every worker owns its own scratch pipeline and
    /// writes a disjoint slice of the pre-sized output series, so no locking
    /// is needed and the assembled result is identical to the sequential run.
    pub fn process_capture_parallel(
        &self,
        capture: &RawCapture,
        workers: usize,
    ) -> PipelineResult<FrameSeries> {
        self.check_antennas(capture)?;
        let frames = capture.frames();
        let workers = workers.max(1).min(frames.max(1));
        let mut series = FrameSeries::zeroed(frames);
        let chunk = (frames + workers - 1) / workers;

        std::thread::scope(|scope| -> PipelineResult<()> {
            let mut handles = Vec::with_capacity(workers);
            let mut magnitude_rest = series.magnitude.as_mut_slice();
            let mut angle_rest = series.angle.as_mut_slice();
            let mut start = 0;

            while !magnitude_rest.is_empty() {
                let take = chunk.min(magnitude_rest.len());
                let (magnitude_span, magnitude_tail) = magnitude_rest.split_at_mut(take);
                let (angle_span, angle_tail) = angle_rest.split_at_mut(take);
                magnitude_rest = magnitude_tail;
                angle_rest = angle_tail;

                let span_start = start;
                handles.push(scope.spawn(move || {
                    let mut pipeline = FramePipeline::new(&self.config);
                    self.run_span(
                        &mut pipeline,
                        capture,
                        span_start,
                        magnitude_span,
                        angle_span,
                        None,
                    )
                }));
                start += take;
            }

            for handle in handles {
                handle
                    .join()
                    .map_err(|_| PipelineError::Internal("worker thread panicked".into()))??;
            }
            Ok(())
        })?;

        Ok(series)
    }

    fn check_antennas(&self, capture: &RawCapture) -> PipelineResult<()> {
        let needed = self
            .options
            .primary_antenna
            .max(self.options.secondary_antenna);
        if needed >= capture.antennas() {
            return Err(PipelineError::ShapeMismatch(format!(
                "sequencer needs antenna {} but cube has only {}",
                needed,
                capture.antennas()
            )));
        }
        Ok(())
    }

    /// Processes frames `start..start + magnitude.len()`, writing each result
    /// at its own offset. Returns the number of frames completed.
    fn run_span(
        &self,
        pipeline: &mut FramePipeline,
        capture: &RawCapture,
        start: usize,
        magnitude: &mut [f32],
        angle: &mut [f32],
        cancel: Option<&AtomicBool>,
    ) -> PipelineResult<usize> {
        let estimator = AngleEstimator::new(
            self.config.wavelength_m() as f32,
            self.config.antenna_spacing_m as f32,
            self.options.mapping,
        );
        let mut primary_map = pipeline.empty_map();
        let mut secondary_map = pipeline.empty_map();

        for offset in 0..magnitude.len() {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Ok(offset);
                }
            }
            let frame = start + offset;

            pipeline.doppler_map_into(
                capture,
                frame,
                self.options.primary_antenna,
                &mut primary_map,
            )?;
            let peak = locate_peak(primary_map.view());
            magnitude[offset] = peak.magnitude;
            self.metrics.record_frame();

            if peak.magnitude > self.options.gate_threshold {
                // Only now is the second antenna's map worth building.
                pipeline.doppler_map_into(
                    capture,
                    frame,
                    self.options.secondary_antenna,
                    &mut secondary_map,
                )?;
                let cell = (peak.range_bin, peak.velocity_bin);
                let estimate =
                    estimator.estimate(primary_map[cell], secondary_map[cell]);
                if estimate.clamped {
                    self.metrics.record_clamped_angle();
                    self.logger.alert(&format!(
                        "frame {}: angle argument clamped to the asin domain",
                        frame
                    ));
                }
                angle[offset] = estimate.value;
                self.metrics.record_gate_pass();
                self.logger.trace(&format!(
                    "frame {}: peak {:.3} at ({}, {}), angle {:.4}",
                    frame, peak.magnitude, peak.range_bin, peak.velocity_bin, estimate.value
                ));
            } else {
                angle[offset] = 0.0;
                self.logger.trace(&format!(
                    "frame {}: peak {:.3} below gate, angle skipped",
                    frame, peak.magnitude
                ));
            }
        }

        Ok(magnitude.len())
    }
}
