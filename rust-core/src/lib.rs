//! Spgram - streaming spectral periodogram
//!
//! Push-driven power spectral density estimation over an unbounded sample
//! stream, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod buffer;
pub mod error;
pub mod sample;
pub mod spectrum;
pub mod windows;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::ConfigError;
pub use sample::Sample;
pub use spectrum::{estimate_psd, Periodogram, PeriodogramConfig};
pub use windows::{generate_window, WindowType};
