//! Running average of periodogram estimates
//!
//! Two modes: an arithmetic mean over every transform since the last clear,
//! or an exponential moving average with forgetting factor `alpha`.

use num_complex::Complex;

/// Floor applied before converting to dB (-200 dB)
pub const POWER_FLOOR: f64 = 1e-20;

/// Per-bin accumulated power, stored in natural FFT order
#[derive(Debug, Clone)]
pub struct Accumulator {
    power: Vec<f64>,

    /// `None` selects the running mean
    alpha: Option<f64>,

    /// Transforms folded in since the last clear
    count: u64,
}

impl Accumulator {
    pub fn new(nfft: usize, alpha: Option<f64>) -> Self {
        Self {
            power: vec![0.0; nfft],
            alpha,
            count: 0,
        }
    }

    /// Fold one transform output into the estimate
    ///
    /// # Arguments
    /// * `spectrum` - FFT of the windowed block
    /// * `scale` - Window-energy normalization applied to |X[k]|²
    pub fn accumulate(&mut self, spectrum: &[Complex<f64>], scale: f64) {
        self.count += 1;
        let first = self.count == 1;

        match self.alpha {
            None => {
                let n = self.count as f64;
                for (acc, x) in self.power.iter_mut().zip(spectrum) {
                    let energy = x.norm_sqr() * scale;
                    *acc += (energy - *acc) / n;
                }
            }
            Some(alpha) => {
                for (acc, x) in self.power.iter_mut().zip(spectrum) {
                    let energy = x.norm_sqr() * scale;
                    *acc = if first {
                        energy
                    } else {
                        alpha * energy + (1.0 - alpha) * *acc
                    };
                }
            }
        }
    }

    /// Linear power in centered order: DC lands at `nfft/2`
    pub fn power_centered(&self, out: &mut [f64]) {
        let nfft = self.power.len();
        let half = nfft / 2;
        for (i, dst) in out[..nfft].iter_mut().enumerate() {
            *dst = self.power[(i + half) % nfft];
        }
    }

    /// Power in dB, centered order, floored at `POWER_FLOOR`
    pub fn psd_centered(&self, out: &mut [f64]) {
        self.power_centered(out);
        for p in out[..self.power.len()].iter_mut() {
            *p = 10.0 * p.max(POWER_FLOOR).log10();
        }
    }

    pub fn clear(&mut self) {
        self.power.fill(0.0);
        self.count = 0;
    }

    pub fn set_alpha(&mut self, alpha: Option<f64>) {
        self.alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn flat(nfft: usize, magnitude: f64) -> Vec<Complex<f64>> {
        vec![Complex::new(magnitude, 0.0); nfft]
    }

    #[test]
    fn test_running_mean() {
        let mut acc = Accumulator::new(4, None);
        acc.accumulate(&flat(4, 1.0), 1.0);
        acc.accumulate(&flat(4, 2.0), 1.0);
        acc.accumulate(&flat(4, 3.0), 1.0);

        // mean of 1, 4, 9
        for &p in &acc.power {
            assert_abs_diff_eq!(p, 14.0 / 3.0, epsilon = 1e-12);
        }
        assert_eq!(acc.count, 3);
    }

    #[test]
    fn test_exponential_seeded_by_first_transform() {
        let mut acc = Accumulator::new(2, Some(0.25));
        acc.accumulate(&flat(2, 2.0), 1.0);
        assert_abs_diff_eq!(acc.power[0], 4.0, epsilon = 1e-12);

        acc.accumulate(&flat(2, 0.0), 1.0);
        assert_abs_diff_eq!(acc.power[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_applied() {
        let mut acc = Accumulator::new(2, None);
        acc.accumulate(&flat(2, 2.0), 0.5);
        assert_abs_diff_eq!(acc.power[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_order() {
        let mut acc = Accumulator::new(4, None);
        let spectrum: Vec<_> = (0..4).map(|k| Complex::new((k + 1) as f64, 0.0)).collect();
        acc.accumulate(&spectrum, 1.0);

        let mut out = [0.0; 4];
        acc.power_centered(&mut out);
        // bins 2, 3 (negative), 0 (DC), 1
        assert_eq!(out, [9.0, 16.0, 1.0, 4.0]);
    }

    #[test]
    fn test_psd_before_any_transform_is_floored() {
        let acc = Accumulator::new(8, None);
        let mut out = [0.0; 8];
        acc.psd_centered(&mut out);
        for &p in &out {
            assert_abs_diff_eq!(p, -200.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_clear() {
        let mut acc = Accumulator::new(3, Some(0.5));
        acc.accumulate(&flat(3, 1.0), 1.0);
        acc.clear();
        assert_eq!(acc.count, 0);
        assert!(acc.power.iter().all(|&p| p == 0.0));
        assert_eq!(acc.alpha, Some(0.5));
    }
}
