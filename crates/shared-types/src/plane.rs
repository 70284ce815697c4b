//! Screen-space ↔ complex-plane coordinate transforms
//!
//! Each view (z-plane and w-plane) carries its own scale and origin.
//! The transforms are pure and mutually inverse; note the y-axis sign
//! flip: screen y grows downward while the imaginary axis grows upward.

use crate::complex::Complex;
use serde::{Deserialize, Serialize};

/// Pixel-space coordinate, relative to a view's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-view transform parameters, constant for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Pixels per complex unit, > 0.
    pub scale: f64,
    /// Screen position of the complex origin.
    pub origin: ScreenPoint,
}

/// Side length of both drawable regions, in pixels.
pub const VIEW_SIZE: f64 = 500.0;

/// The input-plane view: origin slightly below center.
pub const Z_VIEW: ViewConfig = ViewConfig {
    scale: 60.0,
    origin: ScreenPoint::new(VIEW_SIZE / 2.0, VIEW_SIZE / 2.0 + 100.0),
};

/// The output-plane view: zoomed in, origin near the bottom edge.
pub const W_VIEW: ViewConfig = ViewConfig {
    scale: 180.0,
    origin: ScreenPoint::new(VIEW_SIZE / 2.0, VIEW_SIZE - 50.0),
};

impl ViewConfig {
    pub fn to_complex(&self, p: ScreenPoint) -> Complex {
        Complex::new(
            (p.x - self.origin.x) / self.scale,
            -(p.y - self.origin.y) / self.scale,
        )
    }

    pub fn to_screen(&self, c: Complex) -> ScreenPoint {
        ScreenPoint::new(
            self.origin.x + c.re * self.scale,
            self.origin.y - c.im * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_within_view_bounds() {
        for view in [Z_VIEW, W_VIEW] {
            for x in (0..=500).step_by(50) {
                for y in (0..=500).step_by(50) {
                    let p = ScreenPoint::new(x as f64, y as f64);
                    let back = view.to_screen(view.to_complex(p));
                    assert!((back.x - p.x).abs() < 1e-9, "x round trip at {x},{y}");
                    assert!((back.y - p.y).abs() < 1e-9, "y round trip at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_origin_maps_to_complex_zero() {
        assert_eq!(Z_VIEW.to_complex(Z_VIEW.origin), Complex::ZERO);
        assert_eq!(W_VIEW.to_screen(Complex::ZERO), W_VIEW.origin);
    }

    #[test]
    fn test_y_axis_sign_flip() {
        // A point above the origin on screen has positive imaginary part.
        let p = ScreenPoint::new(Z_VIEW.origin.x, Z_VIEW.origin.y - Z_VIEW.scale);
        let c = Z_VIEW.to_complex(p);
        assert!((c.im - 1.0).abs() < 1e-12);
        assert!(c.re.abs() < 1e-12);
    }
}
