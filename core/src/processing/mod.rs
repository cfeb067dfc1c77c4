pub mod angle;
pub mod doppler;
pub mod peak;
pub mod pipeline;
pub mod range;
pub mod sequencer;

pub use angle::{AngleEstimate, AngleEstimator, AngleMapping};
pub use peak::PeakRecord;
pub use pipeline::FramePipeline;
pub use sequencer::{FrameSequencer, SequencerOptions};
