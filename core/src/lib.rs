//! Core signal-processing for the Rust FMCW interferometry platform.
//!
//! The modules turn a raw ADC capture cube into per-frame peak-magnitude and
//! angle-of-arrival series: range FFT per chirp, Doppler FFT per range bin,
//! global peak search and two-antenna phase-difference angle recovery.

pub mod capture;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use capture::{FrameSeries, RawCapture};
pub use prelude::{PipelineError, PipelineResult, RadarConfig};
pub use processing::{FrameSequencer, SequencerOptions};
