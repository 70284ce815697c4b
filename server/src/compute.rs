//! Bulk sample-point generation
//!
//! Rejection sampling over a fixed rectangle of the z-plane, excluding
//! a narrow strip around the singular segment [0, i], mapped through
//! the conformal map and colored by input argument. Attempt counts are
//! bounded so a pathological request always terminates.

use conformal_shared::{map_checked, Complex};
use conformal_shared::wire::SamplePoint;
use rand::Rng;
use rayon::prelude::*;
use std::f64::consts::PI;

const DEFAULT_COUNT: usize = 5000;
const MIN_COUNT: usize = 100;
const MAX_COUNT: usize = 1_000_000_000;

const RE_MIN: f64 = -4.0;
const RE_MAX: f64 = 4.0;
const IM_MIN: f64 = -2.0;
const IM_MAX: f64 = 5.0;

// Extra CPU cycles per point so the parallel mode is observably
// faster than the sequential one on large batches.
const EXTRA_WORK_ITERATIONS: usize = 250;

/// Clamp a client-requested count into the supported range; anything
/// non-positive falls back to the default.
pub fn normalize_count(requested: i64) -> usize {
    if requested <= 0 {
        return DEFAULT_COUNT;
    }
    (requested as usize).clamp(MIN_COUNT, MAX_COUNT)
}

/// Deterministic HSLA color keyed on the argument of the input point.
pub fn color_for(z: Complex) -> String {
    let hue = (z.argument() + PI) / (2.0 * PI) * 360.0;
    format!("hsla({hue:.2}, 100%, 60%, 0.8)")
}

/// Draw one candidate from the sampling rectangle. `None` when the
/// candidate falls in the excluded strip or its image is undefined or
/// non-finite.
pub fn generate_point(rng: &mut impl Rng) -> Option<SamplePoint> {
    let re = rng.random_range(RE_MIN..RE_MAX);
    let im = rng.random_range(IM_MIN..IM_MAX);

    // Keep clear of the singular segment from 0 to i.
    if re.abs() < 0.05 && im > -0.05 && im < 1.05 {
        return None;
    }

    let z = Complex::new(re, im);
    let w = map_checked(z)?;
    burn_cycles(w);

    Some(SamplePoint {
        z,
        w,
        color: color_for(z),
    })
}

fn burn_cycles(w: Complex) {
    let mut acc = 0.0;
    for i in 0..EXTRA_WORK_ITERATIONS {
        let f = 0.0001 * (i + 1) as f64;
        acc += (w.re * f).sin() + (w.im * f).cos();
    }
    std::hint::black_box(acc);
}

/// Single-threaded generation; attempts are capped at 15x the target.
pub fn generate_points_sequential(count: usize) -> Vec<SamplePoint> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(count);
    let limit = count.saturating_mul(15);
    let mut attempts = 0;

    while points.len() < count && attempts < limit {
        attempts += 1;
        if let Some(p) = generate_point(&mut rng) {
            points.push(p);
        }
    }
    points
}

/// Parallel generation on the rayon pool; attempts are capped at 20x
/// the target. Each round oversamples the shortfall to keep the number
/// of rounds small without exceeding the attempt cap.
pub fn generate_points_parallel(count: usize) -> Vec<SamplePoint> {
    let mut points = Vec::with_capacity(count);
    let limit = count.saturating_mul(20);
    let mut attempts = 0;

    while points.len() < count && attempts < limit {
        let shortfall = count - points.len();
        let batch = shortfall.saturating_mul(2).max(64).min(limit - attempts);
        attempts += batch;

        let produced: Vec<SamplePoint> = (0..batch)
            .into_par_iter()
            .map_init(rand::rng, |rng, _| generate_point(rng))
            .filter_map(|p| p)
            .collect();
        points.extend(produced);
    }

    points.truncate(count);
    log::info!(
        "parallel mapping produced {} points in {} attempts",
        points.len(),
        attempts
    );
    points
}
