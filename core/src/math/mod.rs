pub mod fft;
pub mod window;

pub use fft::{fftshift, FftHelper};
pub use window::{blackman_harris, WindowCache};
