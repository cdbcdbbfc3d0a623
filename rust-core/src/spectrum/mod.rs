//! Spectral analysis with FFT

pub mod accumulator;
pub mod fft;
pub mod periodogram;
pub mod windowing;

pub use accumulator::Accumulator;
pub use fft::FftEngine;
pub use periodogram::{estimate_psd, Periodogram, PeriodogramConfig, DEFAULT_WINDOW};
pub use windowing::AnalysisWindow;
