//! Python bindings for the streaming periodogram

use num_complex::Complex;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::window_bindings::PyWindowType;
use crate::error::ConfigError;
use crate::spectrum::{Periodogram, PeriodogramConfig};

fn to_py_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Spectral periodogram exposed to Python
#[pyclass(name = "Periodogram")]
pub struct PyPeriodogram {
    periodogram: Periodogram,
}

#[pymethods]
impl PyPeriodogram {
    /// Create a new periodogram
    ///
    /// Args:
    ///     nfft: Transform size (at least 2)
    ///     window_type: Analysis window
    ///     window_len: Window length (default: nfft/2)
    ///     delay: Samples between transforms (default: nfft/4)
    ///
    /// Raises:
    ///     ValueError: invalid configuration
    #[new]
    #[pyo3(signature = (nfft, window_type=PyWindowType::Kaiser, window_len=None, delay=None))]
    fn new(
        nfft: usize,
        window_type: PyWindowType,
        window_len: Option<usize>,
        delay: Option<usize>,
    ) -> PyResult<Self> {
        let config = PeriodogramConfig::new(
            nfft,
            window_type.into(),
            window_len.unwrap_or(nfft / 2),
            delay.unwrap_or(nfft / 4),
        );

        Ok(Self {
            periodogram: Periodogram::from_config(config).map_err(to_py_err)?,
        })
    }

    /// Feed one sample
    #[pyo3(signature = (re, im=0.0))]
    fn push(&mut self, re: f64, im: f64) {
        self.periodogram.push(Complex::new(re, im));
    }

    /// Feed a block of complex samples
    ///
    /// Args:
    ///     samples: complex128 numpy array
    fn write(&mut self, samples: PyReadonlyArray1<Complex<f64>>) -> PyResult<()> {
        let samples = samples
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.periodogram.write(samples);
        Ok(())
    }

    /// Feed a block of real samples
    ///
    /// Args:
    ///     samples: float64 numpy array
    fn write_real(&mut self, samples: PyReadonlyArray1<f64>) -> PyResult<()> {
        let samples = samples
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.periodogram.write(samples);
        Ok(())
    }

    /// Power spectral density in dB, DC at index nfft/2
    fn get_psd<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.periodogram.psd()))
    }

    /// Bin centre frequencies, in the same order as get_psd
    fn frequencies<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.periodogram.frequencies()))
    }

    /// Set the forgetting factor; None selects uniform averaging
    #[pyo3(signature = (alpha=None))]
    fn set_alpha(&mut self, alpha: Option<f64>) -> PyResult<()> {
        self.periodogram.set_alpha(alpha).map_err(to_py_err)
    }

    fn set_sample_rate(&mut self, sample_rate: f64) -> PyResult<()> {
        self.periodogram.set_sample_rate(sample_rate).map_err(to_py_err)
    }

    fn set_center_frequency(&mut self, center_frequency: f64) {
        self.periodogram.set_center_frequency(center_frequency);
    }

    /// Clear the estimate and per-run counters
    fn clear(&mut self) {
        self.periodogram.clear();
    }

    /// Clear and zero the total counters
    fn reset(&mut self) {
        self.periodogram.reset();
    }

    fn get_alpha(&self) -> Option<f64> {
        self.periodogram.alpha()
    }

    fn get_nfft(&self) -> usize {
        self.periodogram.nfft()
    }

    fn get_window_len(&self) -> usize {
        self.periodogram.window_len()
    }

    fn get_delay(&self) -> usize {
        self.periodogram.delay()
    }

    fn get_num_samples(&self) -> u64 {
        self.periodogram.num_samples()
    }

    fn get_num_samples_total(&self) -> u64 {
        self.periodogram.num_samples_total()
    }

    fn get_num_transforms(&self) -> u64 {
        self.periodogram.num_transforms()
    }

    fn get_num_transforms_total(&self) -> u64 {
        self.periodogram.num_transforms_total()
    }

    fn __repr__(&self) -> String {
        self.periodogram.to_string()
    }
}
