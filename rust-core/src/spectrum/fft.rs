//! FFT engine using rustfft for complex-valued signals
//!
//! Plans once, transforms in place with a reusable scratch buffer so the
//! streaming path never allocates.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Forward FFT of a fixed size
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Forward FFT plan
    fft: Arc<dyn Fft<f64>>,

    /// Reusable scratch space for in-place processing
    scratch: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        Self {
            fft_size,
            fft,
            scratch,
        }
    }

    /// Transform `buffer` in place (forward, unnormalized)
    ///
    /// `buffer.len()` must equal the FFT size.
    pub fn process(&mut self, buffer: &mut [Complex<f64>]) {
        debug_assert_eq!(buffer.len(), self.fft_size);
        self.fft.process_with_scratch(buffer, &mut self.scratch);
    }
}
