//! Digital Signal Processing utilities

pub mod fft;
pub mod filters;
pub mod framing;
pub mod windows;

pub use fft::FftProcessor;
pub use filters::pre_emphasis;
pub use framing::{FrameLayout, FramedSignal};
pub use windows::WindowFunction;
