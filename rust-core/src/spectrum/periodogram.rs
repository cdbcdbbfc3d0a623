//! Streaming spectral periodogram
//!
//! Combines the sample buffer, analysis window, FFT engine and accumulator
//! into a push-driven power spectral density estimator.
//!
//! PSD bins are reported in centered order: index 0 holds the most negative
//! frequency, index `nfft/2` holds DC. Each bin is normalized by the window
//! energy Σ w[n]², so white noise of per-sample power σ² reads
//! `10*log10(σ²)` dB in every bin regardless of window type or length.

use std::fmt;

use log::{debug, trace};
use num_complex::Complex;

use crate::buffer::SampleBuffer;
use crate::error::ConfigError;
use crate::sample::Sample;
use crate::windows::WindowType;

use super::accumulator::Accumulator;
use super::fft::FftEngine;
use super::windowing::AnalysisWindow;

/// Window used by `Periodogram::create_default`
pub const DEFAULT_WINDOW: WindowType = WindowType::Kaiser;

/// Periodogram configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodogramConfig {
    /// Transform size (number of frequency bins), at least 2
    pub nfft: usize,

    /// Analysis window applied to each block
    pub window_type: WindowType,

    /// Window length, in [1, nfft]
    pub window_len: usize,

    /// Samples between successive transforms, at least 1
    pub delay: usize,

    /// Exponential forgetting factor in (0, 1]; `None` averages uniformly
    pub alpha: Option<f64>,
}

impl PeriodogramConfig {
    pub fn new(nfft: usize, window_type: WindowType, window_len: usize, delay: usize) -> Self {
        Self {
            nfft,
            window_type,
            window_len,
            delay,
            alpha: None,
        }
    }

    /// Default window, half-length window, quarter-length hop
    pub fn with_defaults(nfft: usize) -> Self {
        Self::new(nfft, DEFAULT_WINDOW, nfft / 2, nfft / 4)
    }

    /// Check every construction constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nfft < 2 {
            return Err(ConfigError::FftTooSmall(self.nfft));
        }
        if self.window_len > self.nfft {
            return Err(ConfigError::WindowLenTooLarge {
                window_len: self.window_len,
                nfft: self.nfft,
            });
        }
        if self.window_len == 0 {
            return Err(ConfigError::WindowLenZero);
        }
        if self.delay == 0 {
            return Err(ConfigError::DelayZero);
        }
        self.window_type.validate_length(self.window_len)?;
        validate_alpha(self.alpha)
    }
}

fn validate_alpha(alpha: Option<f64>) -> Result<(), ConfigError> {
    match alpha {
        Some(a) if !(a > 0.0 && a <= 1.0) => Err(ConfigError::AlphaOutOfRange(a)),
        _ => Ok(()),
    }
}

/// Streaming power spectral density estimator
pub struct Periodogram {
    config: PeriodogramConfig,
    window: AnalysisWindow,
    buffer: SampleBuffer,
    fft_engine: FftEngine,

    /// Time-domain snapshot of the buffer, oldest first
    block: Vec<Complex<f64>>,

    /// Windowed block, transformed in place
    spectrum: Vec<Complex<f64>>,

    accumulator: Accumulator,

    num_samples: u64,
    num_samples_total: u64,
    num_transforms: u64,
    num_transforms_total: u64,

    /// Labels for `frequencies()` only
    center_frequency: f64,
    sample_rate: f64,
}

impl Periodogram {
    /// Create new periodogram
    ///
    /// # Arguments
    /// * `nfft` - Transform size, at least 2
    /// * `window_type` - Analysis window
    /// * `window_len` - Window length, in [1, nfft]
    /// * `delay` - Samples between transforms, at least 1
    ///
    /// # Errors
    /// `ConfigError` when any parameter is out of range or the window
    /// rejects the length (odd-length KBD, a two-sample Hann or Blackman).
    pub fn create(
        nfft: usize,
        window_type: WindowType,
        window_len: usize,
        delay: usize,
    ) -> Result<Self, ConfigError> {
        Self::from_config(PeriodogramConfig::new(nfft, window_type, window_len, delay))
    }

    /// Create with the default window, `nfft/2` window length and `nfft/4` hop
    pub fn create_default(nfft: usize) -> Result<Self, ConfigError> {
        Self::from_config(PeriodogramConfig::with_defaults(nfft))
    }

    /// Create from a numeric window tag (0 and tags past the catalog are unknown)
    pub fn create_from_tag(
        nfft: usize,
        window_tag: u32,
        window_len: usize,
        delay: usize,
    ) -> Result<Self, ConfigError> {
        let window_type = WindowType::try_from(window_tag).map_err(log_rejected)?;
        Self::create(nfft, window_type, window_len, delay)
    }

    /// Create from a window name such as `"hamming"` or `"blackman-harris"`
    pub fn create_from_name(
        nfft: usize,
        window_name: &str,
        window_len: usize,
        delay: usize,
    ) -> Result<Self, ConfigError> {
        let window_type = window_name.parse::<WindowType>().map_err(log_rejected)?;
        Self::create(nfft, window_type, window_len, delay)
    }

    pub fn from_config(config: PeriodogramConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(log_rejected)?;

        let window = AnalysisWindow::new(config.window_type, config.window_len, config.nfft)
            .map_err(log_rejected)?;
        let nfft = config.nfft;

        debug!(
            "periodogram created: nfft={} window={} window_len={} delay={}",
            nfft, config.window_type, config.window_len, config.delay
        );

        Ok(Self {
            window,
            buffer: SampleBuffer::new(nfft, config.delay),
            fft_engine: FftEngine::new(nfft),
            block: vec![Complex::new(0.0, 0.0); nfft],
            spectrum: vec![Complex::new(0.0, 0.0); nfft],
            accumulator: Accumulator::new(nfft, config.alpha),
            num_samples: 0,
            num_samples_total: 0,
            num_transforms: 0,
            num_transforms_total: 0,
            center_frequency: 0.0,
            sample_rate: 1.0,
            config,
        })
    }

    /// Set the exponential forgetting factor
    ///
    /// `Some(alpha)` with alpha in (0, 1] selects exponential averaging,
    /// `None` selects the uniform running mean. On error the previous
    /// setting is kept.
    pub fn set_alpha(&mut self, alpha: Option<f64>) -> Result<(), ConfigError> {
        validate_alpha(alpha).map_err(log_rejected)?;
        self.config.alpha = alpha;
        self.accumulator.set_alpha(alpha);
        Ok(())
    }

    /// Feed one sample
    #[inline]
    pub fn push<S: Sample>(&mut self, sample: S) {
        self.write(std::slice::from_ref(&sample));
    }

    /// Feed a block of samples
    ///
    /// Equivalent to pushing each sample in turn; the block is split at
    /// transform boundaries internally.
    pub fn write<S: Sample>(&mut self, samples: &[S]) {
        let mut rest = samples;
        while !rest.is_empty() {
            let take = self.buffer.until_ready().min(rest.len());
            let (head, tail) = rest.split_at(take);

            let ready = self.buffer.write(head.iter().map(|s| s.to_complex()));
            self.num_samples += take as u64;
            self.num_samples_total += take as u64;

            if ready {
                self.step();
            }
            rest = tail;
        }
    }

    /// Run one transform on the buffered block
    fn step(&mut self) {
        self.buffer.copy_to(&mut self.block);
        self.window.apply(&self.block, &mut self.spectrum);
        self.fft_engine.process(&mut self.spectrum);
        self.accumulator
            .accumulate(&self.spectrum, self.window.power_scale());

        self.num_transforms += 1;
        self.num_transforms_total += 1;
        trace!(
            "transform {} after {} samples",
            self.num_transforms,
            self.num_samples
        );
    }

    /// Write the PSD estimate in dB into `psd`
    ///
    /// `psd` must hold at least `nfft` values; bins are in centered order.
    /// Before the first transform every bin reads -200 dB.
    pub fn get_psd(&self, psd: &mut [f64]) {
        self.accumulator.psd_centered(psd);
    }

    /// PSD estimate in dB as a new vector
    pub fn psd(&self) -> Vec<f64> {
        let mut psd = vec![0.0; self.config.nfft];
        self.get_psd(&mut psd);
        psd
    }

    /// Write the linear PSD estimate into `psd`, centered order
    pub fn get_psd_linear(&self, psd: &mut [f64]) {
        self.accumulator.power_centered(psd);
    }

    /// Bin centre frequencies matching the `get_psd` order
    ///
    /// `center_frequency + (i - nfft/2) * sample_rate / nfft`
    pub fn frequencies(&self) -> Vec<f64> {
        let nfft = self.config.nfft;
        let half = (nfft / 2) as f64;
        (0..nfft)
            .map(|i| self.center_frequency + (i as f64 - half) * self.sample_rate / nfft as f64)
            .collect()
    }

    /// Drop buffered samples, the estimate, and the per-run counters
    ///
    /// Configuration, alpha and the `_total` counters are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.block.fill(Complex::new(0.0, 0.0));
        self.accumulator.clear();
        self.num_samples = 0;
        self.num_transforms = 0;
        debug!(
            "periodogram cleared (totals: {} samples, {} transforms)",
            self.num_samples_total, self.num_transforms_total
        );
    }

    /// `clear` and zero the `_total` counters
    pub fn reset(&mut self) {
        self.clear();
        self.num_samples_total = 0;
        self.num_transforms_total = 0;
        debug!("periodogram reset");
    }

    pub fn set_center_frequency(&mut self, center_frequency: f64) {
        self.center_frequency = center_frequency;
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), ConfigError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(log_rejected(ConfigError::InvalidSampleRate(sample_rate)));
        }
        self.sample_rate = sample_rate;
        Ok(())
    }

    pub fn center_frequency(&self) -> f64 {
        self.center_frequency
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn config(&self) -> &PeriodogramConfig {
        &self.config
    }

    pub fn nfft(&self) -> usize {
        self.config.nfft
    }

    pub fn window_type(&self) -> WindowType {
        self.config.window_type
    }

    pub fn window_len(&self) -> usize {
        self.config.window_len
    }

    pub fn delay(&self) -> usize {
        self.config.delay
    }

    pub fn alpha(&self) -> Option<f64> {
        self.config.alpha
    }

    /// Cached window coefficients
    pub fn window(&self) -> &[f64] {
        self.window.coefficients()
    }

    /// Samples fed since the last clear
    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }

    /// Samples fed since creation or the last reset
    pub fn num_samples_total(&self) -> u64 {
        self.num_samples_total
    }

    /// Transforms run since the last clear
    pub fn num_transforms(&self) -> u64 {
        self.num_transforms
    }

    /// Transforms run since creation or the last reset
    pub fn num_transforms_total(&self) -> u64 {
        self.num_transforms_total
    }
}

impl fmt::Display for Periodogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<periodogram nfft={} window={} window_len={} delay={}",
            self.config.nfft, self.config.window_type, self.config.window_len, self.config.delay
        )?;
        match self.config.alpha {
            Some(alpha) => write!(f, " alpha={}", alpha)?,
            None => write!(f, " alpha=mean")?,
        }
        write!(
            f,
            " samples={} transforms={}>",
            self.num_samples, self.num_transforms
        )
    }
}

/// One-shot PSD estimate of `samples` with the default configuration
///
/// # Returns
/// `nfft` values in dB, centered order
pub fn estimate_psd<S: Sample>(nfft: usize, samples: &[S]) -> Result<Vec<f64>, ConfigError> {
    let mut periodogram = Periodogram::create_default(nfft)?;
    periodogram.write(samples);
    Ok(periodogram.psd())
}

fn log_rejected(err: ConfigError) -> ConfigError {
    debug!("periodogram configuration rejected: {}", err);
    err
}
