//! Configuration errors for periodogram construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("FFT size must be at least 2 (got {0})")]
    FftTooSmall(usize),

    #[error("Window length must be greater than zero")]
    WindowLenZero,

    #[error("Window length ({window_len}) exceeds FFT size ({nfft})")]
    WindowLenTooLarge { window_len: usize, nfft: usize },

    #[error("Delay must be greater than zero")]
    DelayZero,

    #[error("Unknown window type: {0}")]
    UnknownWindow(String),

    #[error("Kaiser-Bessel derived window requires an even length (got {0})")]
    KbdOddLength(usize),

    #[error("{window} window of length {length} has no energy")]
    DegenerateWindow { window: String, length: usize },

    #[error("Smoothing factor must be in (0, 1] (got {0})")]
    AlphaOutOfRange(f64),

    #[error("Sample rate must be positive and finite (got {0})")]
    InvalidSampleRate(f64),
}
