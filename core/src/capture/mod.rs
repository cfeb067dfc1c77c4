pub mod cube;
pub mod series;

pub use cube::RawCapture;
pub use series::FrameSeries;
