//! Circular sample buffer with transform cadence
//!
//! Keeps the most recent `nfft` samples in arrival order and counts down to
//! the next transform. The first transform fires once `nfft` samples have
//! arrived; every following one fires after `delay` more.

use num_complex::Complex;
use ringbuf::{HeapRb, Rb};

/// Fixed-capacity ring of the most recent `nfft` samples
pub struct SampleBuffer {
    ring: HeapRb<Complex<f64>>,
    nfft: usize,
    delay: usize,
    /// Samples still needed before the next transform
    countdown: usize,
}

impl SampleBuffer {
    /// Create new sample buffer
    ///
    /// # Arguments
    /// * `nfft` - Buffer capacity (transform size)
    /// * `delay` - Hop between successive transforms
    pub fn new(nfft: usize, delay: usize) -> Self {
        Self {
            ring: HeapRb::new(nfft),
            nfft,
            delay,
            countdown: nfft,
        }
    }

    /// Number of samples that can be written before the next transform is due
    #[inline]
    pub fn until_ready(&self) -> usize {
        self.countdown
    }

    /// Append samples, overwriting the oldest once full
    ///
    /// # Arguments
    /// * `samples` - Samples to append; at most `until_ready()` of them
    ///
    /// # Returns
    /// `true` when the last appended sample completed a transform block
    pub fn write<I>(&mut self, samples: I) -> bool
    where
        I: IntoIterator<Item = Complex<f64>>,
    {
        let mut written = 0;
        for sample in samples {
            self.ring.push_overwrite(sample);
            written += 1;
        }
        debug_assert!(written <= self.countdown, "write crossed a transform boundary");

        self.countdown -= written.min(self.countdown);
        if self.countdown == 0 {
            self.countdown = self.delay;
            true
        } else {
            false
        }
    }

    /// Copy the buffered samples, oldest first, into `out`
    ///
    /// Slots not yet filled since the last clear are left untouched.
    pub fn copy_to(&self, out: &mut [Complex<f64>]) {
        for (dst, src) in out.iter_mut().zip(self.ring.iter()) {
            *dst = *src;
        }
    }

    /// Drop every buffered sample and restart the cadence
    pub fn clear(&mut self) {
        self.ring.clear();
        self.countdown = self.nfft;
    }
}
