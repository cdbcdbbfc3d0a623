//! Window table for spectral analysis
//!
//! Maps a window tag to its coefficient generator. Windows are selected,
//! never designed: every shape parameter is fixed here.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Kaiser shape parameter used by `Kaiser` and `Kbd`
pub const KAISER_BETA: f64 = 10.0;

/// Coefficients below this magnitude are cosine-sum round-off
const ROUNDOFF: f64 = 1e-12;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// 4-term Blackman-Harris, ~92 dB sidelobes
    BlackmanHarris,

    /// 7-term Blackman-Harris, ~180 dB sidelobes
    BlackmanHarris7,

    /// Kaiser window with β = 10
    Kaiser,

    /// Flat-top window, accurate amplitude at the cost of resolution
    FlatTop,

    /// Triangular window with non-zero endpoints
    Triangular,

    /// Flat window with raised-cosine tapers over the outer thirds
    RcosTaper,

    /// Kaiser-Bessel derived window (β = 10). Length must be even.
    Kbd,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Every window in numeric tag order (tag = index + 1)
    pub const ALL: [WindowType; 11] = [
        WindowType::Hamming,
        WindowType::Hann,
        WindowType::Blackman,
        WindowType::BlackmanHarris,
        WindowType::BlackmanHarris7,
        WindowType::Kaiser,
        WindowType::FlatTop,
        WindowType::Triangular,
        WindowType::RcosTaper,
        WindowType::Kbd,
        WindowType::Rectangular,
    ];

    /// Short lowercase name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Hamming => "hamming",
            WindowType::Hann => "hann",
            WindowType::Blackman => "blackman",
            WindowType::BlackmanHarris => "blackmanharris",
            WindowType::BlackmanHarris7 => "blackmanharris7",
            WindowType::Kaiser => "kaiser",
            WindowType::FlatTop => "flattop",
            WindowType::Triangular => "triangular",
            WindowType::RcosTaper => "rcostaper",
            WindowType::Kbd => "kbd",
            WindowType::Rectangular => "rectangular",
        }
    }

    /// Numeric tag; 0 is reserved for "unknown"
    pub fn tag(&self) -> u32 {
        Self::ALL
            .iter()
            .position(|w| w == self)
            .map(|i| i as u32 + 1)
            .unwrap_or(0)
    }

    /// Check the type-specific length constraints
    pub fn validate_length(&self, length: usize) -> Result<(), ConfigError> {
        if length == 0 {
            return Err(ConfigError::WindowLenZero);
        }
        if *self == WindowType::Kbd && length % 2 != 0 {
            return Err(ConfigError::KbdOddLength(length));
        }
        Ok(())
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '-' || c == '_' || c.is_whitespace(), "");
        let window = match key.as_str() {
            "hamming" => WindowType::Hamming,
            "hann" | "hanning" => WindowType::Hann,
            "blackman" => WindowType::Blackman,
            "blackmanharris" => WindowType::BlackmanHarris,
            "blackmanharris7" => WindowType::BlackmanHarris7,
            "kaiser" => WindowType::Kaiser,
            "flattop" => WindowType::FlatTop,
            "triangular" | "bartlett" => WindowType::Triangular,
            "rcostaper" => WindowType::RcosTaper,
            "kbd" | "kaiserbesselderived" => WindowType::Kbd,
            "rectangular" | "boxcar" => WindowType::Rectangular,
            _ => return Err(ConfigError::UnknownWindow(s.to_string())),
        };
        Ok(window)
    }
}

impl TryFrom<u32> for WindowType {
    type Error = ConfigError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        (tag as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| ConfigError::UnknownWindow(format!("tag {}", tag)))
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Result<Vec<f64>, ConfigError> {
    window_type.validate_length(length)?;

    if length == 1 {
        return Ok(vec![1.0]);
    }

    let window = match window_type {
        WindowType::Hamming => general_cosine(length, &[0.54, 0.46]),
        WindowType::Hann => general_cosine(length, &[0.5, 0.5]),
        WindowType::Blackman => general_cosine(length, &[0.42, 0.5, 0.08]),
        WindowType::BlackmanHarris => {
            general_cosine(length, &[0.358_75, 0.488_29, 0.141_28, 0.011_68])
        }
        WindowType::BlackmanHarris7 => general_cosine(
            length,
            &[0.271_05, 0.433_29, 0.218_12, 0.065_92, 0.010_81, 0.000_77, 0.000_01],
        ),
        WindowType::Kaiser => kaiser(length, KAISER_BETA),
        WindowType::FlatTop => general_cosine(
            length,
            &[0.215_578_95, 0.416_631_58, 0.277_263_158, 0.083_578_947, 0.006_947_368],
        ),
        WindowType::Triangular => {
            let center = (length as f64 - 1.0) / 2.0;
            let half = length as f64 / 2.0;
            (0..length)
                .map(|n| 1.0 - ((n as f64 - center) / half).abs())
                .collect()
        }
        WindowType::RcosTaper => rcos_taper(length),
        WindowType::Kbd => kaiser_bessel_derived(length, KAISER_BETA),
        WindowType::Rectangular => vec![1.0; length],
    };

    // Hann and Blackman vanish at both ends, so a length-2 window is all zeros
    if window.iter().all(|&w| w == 0.0) {
        return Err(ConfigError::DegenerateWindow {
            window: window_type.name().to_string(),
            length,
        });
    }

    Ok(window)
}

/// Sum-of-cosines window: w[n] = a0 - a1*cos(x) + a2*cos(2x) - ...
fn general_cosine(length: usize, coeffs: &[f64]) -> Vec<f64> {
    let denom = (length - 1) as f64;
    (0..length)
        .map(|n| {
            let x = 2.0 * PI * n as f64 / denom;
            coeffs
                .iter()
                .enumerate()
                .map(|(k, &a)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * a * (k as f64 * x).cos()
                })
                .sum::<f64>()
        })
        .map(|w| if w.abs() < ROUNDOFF { 0.0 } else { w })
        .collect()
}

fn kaiser(length: usize, beta: f64) -> Vec<f64> {
    let i0_beta = bessel_i0(beta);
    let denom = (length - 1) as f64;
    (0..length)
        .map(|n| {
            let x = 2.0 * n as f64 / denom - 1.0;
            bessel_i0(beta * (1.0 - x * x).max(0.0).sqrt()) / i0_beta
        })
        .collect()
}

/// Satisfies w[n]^2 + w[n + M/2]^2 = 1
fn kaiser_bessel_derived(length: usize, beta: f64) -> Vec<f64> {
    let half = length / 2;
    let kernel = kaiser(half + 1, beta);
    let total: f64 = kernel.iter().sum();

    let mut window = vec![0.0; length];
    let mut acc = 0.0;
    for n in 0..half {
        acc += kernel[n];
        let w = (acc / total).sqrt();
        window[n] = w;
        window[length - 1 - n] = w;
    }
    window
}

fn rcos_taper(length: usize) -> Vec<f64> {
    let taper = (length / 3).clamp(1, (length / 2).max(1));
    let mut window = vec![1.0; length];
    for n in 0..taper {
        let w = 0.5 - 0.5 * (PI * (n as f64 + 0.5) / taper as f64).cos();
        window[n] = w;
        window[length - 1 - n] = w;
    }
    window
}

/// Modified Bessel function of the first kind, order 0.
/// Power series: I0(x) = sum_{k=0}^{inf} ((x/2)^k / k!)^2
fn bessel_i0(x: f64) -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    let x_half = x / 2.0;
    for k in 1..64 {
        term *= x_half / k as f64;
        let t2 = term * term;
        sum += t2;
        if t2 < 1e-17 * sum {
            break;
        }
    }
    sum
}
