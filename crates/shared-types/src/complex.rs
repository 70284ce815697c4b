//! Complex arithmetic over ordered pairs of f64
//!
//! Immutable value semantics: every operation returns a new value.
//! Division by a zero-modulus divisor yields an infinite sentinel
//! rather than an error; arithmetic on the sentinel propagates
//! non-finite components silently, so callers gate on `is_finite`
//! before using a result downstream.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A complex number as an ordered pair of f64 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Euclidean modulus sqrt(re² + im²).
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Principal argument in (−π, π], with argument(0) = 0 by the
    /// atan2 convention.
    pub fn argument(&self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Division by a divisor with zero squared modulus returns the
    /// infinite sentinel `(+∞, +∞)` instead of panicking.
    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        if denom == 0.0 {
            return Complex::new(f64::INFINITY, f64::INFINITY);
        }
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_follows_complex_rules() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let p = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(p, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_div_inverts_mul() {
        let a = Complex::new(1.5, -2.25);
        let b = Complex::new(-0.5, 3.0);
        let q = (a * b) / b;
        assert!((q.re - a.re).abs() < 1e-12);
        assert!((q.im - a.im).abs() < 1e-12);
    }

    #[test]
    fn test_div_by_zero_yields_infinite_sentinel() {
        let q = Complex::ONE / Complex::ZERO;
        assert!(q.re.is_infinite());
        assert!(q.im.is_infinite());
        assert!(!q.is_finite());
    }

    #[test]
    fn test_sentinel_propagates_through_arithmetic() {
        let inf = Complex::ONE / Complex::ZERO;
        let r = inf * Complex::I + Complex::ONE;
        assert!(!r.is_finite());
    }

    #[test]
    fn test_argument_principal_range() {
        assert_eq!(Complex::ZERO.argument(), 0.0);
        assert!((Complex::I.argument() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        // Negative real axis maps to +π, the closed end of (−π, π].
        assert!((Complex::new(-1.0, 0.0).argument() - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_modulus() {
        assert_eq!(Complex::new(3.0, 4.0).modulus(), 5.0);
    }
}
