//! Input sample representations
//!
//! The periodogram works internally on `Complex<f64>`. Anything that
//! implements `Sample` can be pushed, so real and complex streams of either
//! precision share one engine.

use num_complex::Complex;

/// A time-domain sample convertible to the engine's working type
pub trait Sample: Copy {
    fn to_complex(self) -> Complex<f64>;
}

impl Sample for Complex<f64> {
    #[inline]
    fn to_complex(self) -> Complex<f64> {
        self
    }
}

impl Sample for Complex<f32> {
    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self.re as f64, self.im as f64)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self as f64, 0.0)
    }
}
