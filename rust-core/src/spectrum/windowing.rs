//! Windowing for spectral analysis
//!
//! Applies windows to time-domain blocks before FFT to reduce spectral
//! leakage, and carries the energy normalization that keeps PSD levels
//! independent of the window choice.

use num_complex::Complex;

use crate::error::ConfigError;
use crate::windows::{generate_window, WindowType};

/// Sum of squared coefficients, Σ w[n]²
pub fn window_energy(window: &[f64]) -> f64 {
    window.iter().map(|&w| w * w).sum()
}

/// Analysis window laid out over an `nfft` block
///
/// The `window_len` coefficients cover the most recent samples of the block;
/// older samples are weighted by zero.
#[derive(Debug, Clone)]
pub struct AnalysisWindow {
    /// Window coefficients, length `window_len`
    coefficients: Vec<f64>,

    /// Offset of the first weighted sample within the block
    offset: usize,

    /// 1 / Σ w[n]², applied to |X[k]|²
    power_scale: f64,
}

impl AnalysisWindow {
    /// Generate and cache the window for an `nfft` block
    pub fn new(window_type: WindowType, window_len: usize, nfft: usize) -> Result<Self, ConfigError> {
        if window_len > nfft {
            return Err(ConfigError::WindowLenTooLarge { window_len, nfft });
        }
        let coefficients = generate_window(window_type, window_len)?;
        let power_scale = 1.0 / window_energy(&coefficients);

        Ok(Self {
            coefficients,
            offset: nfft - window_len,
            power_scale,
        })
    }

    /// Write the windowed copy of `block` into `out`
    ///
    /// Both slices are `nfft` long.
    pub fn apply(&self, block: &[Complex<f64>], out: &mut [Complex<f64>]) {
        let (pad, tail) = out.split_at_mut(self.offset);
        pad.fill(Complex::new(0.0, 0.0));

        for ((dst, &x), &w) in tail
            .iter_mut()
            .zip(&block[self.offset..])
            .zip(&self.coefficients)
        {
            *dst = x * w;
        }
    }

    /// Scale from |X[k]|² of a windowed block to per-sample power
    pub fn power_scale(&self) -> f64 {
        self.power_scale
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}
