//! JSON wire contracts for the compute and map-point endpoints

use crate::complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback when the user-supplied point count is missing or invalid.
pub const DEFAULT_POINT_COUNT: i64 = 5000;

/// Bulk computation strategy, selected by the URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeMode {
    Single,
    Parallel,
}

impl ComputeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeMode::Single => "single",
            ComputeMode::Parallel => "parallel",
        }
    }

    /// Human-readable name echoed in compute responses. Differs from
    /// the URL segment for the sequential mode.
    pub fn label(&self) -> &'static str {
        match self {
            ComputeMode::Single => "single-thread",
            ComputeMode::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ComputeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/compute/{mode}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub count: i64,
}

/// One element of the displayed bulk point set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePoint {
    pub z: Complex,
    pub w: Complex,
    pub color: String,
}

/// Response of `POST /api/compute/{mode}`. `count` echoes the produced
/// length and `requested` the raw client value, pre-normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub mode: String,
    #[serde(rename = "durationMs")]
    pub duration_ms: i64,
    pub points: Vec<SamplePoint>,
    pub count: usize,
    pub requested: i64,
}

/// Response of `GET /api/map-point`. The singular case is signaled by
/// an HTTP 422, not by this body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapPointResponse {
    pub w: Complex,
}
