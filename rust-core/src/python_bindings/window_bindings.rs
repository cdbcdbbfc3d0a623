//! Window type enum exposed to Python

use pyo3::prelude::*;
use crate::windows::WindowType;

#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hamming,
    Hann,
    Blackman,
    BlackmanHarris,
    BlackmanHarris7,
    Kaiser,
    FlatTop,
    Triangular,
    RcosTaper,
    Kbd,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::BlackmanHarris => WindowType::BlackmanHarris,
            PyWindowType::BlackmanHarris7 => WindowType::BlackmanHarris7,
            PyWindowType::Kaiser => WindowType::Kaiser,
            PyWindowType::FlatTop => WindowType::FlatTop,
            PyWindowType::Triangular => WindowType::Triangular,
            PyWindowType::RcosTaper => WindowType::RcosTaper,
            PyWindowType::Kbd => WindowType::Kbd,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}
