//! The conformal mapping w = i·((i·z)/(i·z + 1))^(1/4)
//!
//! A Möbius transform composed with a principal fourth root. The map
//! has a removable singularity at z = i where the denominator of the
//! Möbius part vanishes; the limit is not evaluated there and callers
//! receive `None`.

use crate::complex::Complex;

/// Denominator-modulus threshold below which the mapping is treated
/// as undefined. Fixed for behavioral compatibility; do not retune.
pub const SINGULARITY_EPS: f64 = 1e-4;

/// Principal fourth root: r^(1/4)·(cos(φ/4) + i·sin(φ/4)) with φ the
/// principal argument in (−π, π]. The result's argument therefore lies
/// in (−π/4, π/4]. The other three fourth roots are never produced;
/// the branch choice is a fixed policy, and a reimplementation with a
/// different atan2 range convention would silently pick a different
/// branch.
fn fourth_root(z: Complex) -> Complex {
    let r = z.modulus().powf(0.25);
    let phi = z.argument() / 4.0;
    Complex::new(r * phi.cos(), r * phi.sin())
}

/// Evaluate the mapping. Returns `None` at the singularity (any z with
/// |i·z + 1| < [`SINGULARITY_EPS`]); that is "no result", not an error,
/// and no point should be rendered for it.
pub fn map_z_to_w(z: Complex) -> Option<Complex> {
    let iz = z * Complex::I;
    let den = iz + Complex::ONE;
    if den.modulus() < SINGULARITY_EPS {
        return None;
    }
    let frac = iz / den;
    Some(fourth_root(frac) * Complex::I)
}

/// Like [`map_z_to_w`] but also rejects non-finite results, which can
/// arise when the infinite division sentinel leaks through. The bulk
/// generation path and the map-point endpoint use this variant.
pub fn map_checked(z: Complex) -> Option<Complex> {
    map_z_to_w(z).filter(Complex::is_finite)
}
