//! Shared types for the conformal plot architecture
//!
//! This crate contains everything shared between the probe-client,
//! wasm-bridge, and server crates: complex arithmetic, the conformal
//! mapping itself, screen/plane coordinate transforms, the probe
//! sequencing state machine, and the JSON wire contracts. It has no
//! browser or runtime dependencies and compiles on native and wasm32.

pub mod complex;
pub mod conformal;
pub mod errors;
pub mod plane;
pub mod probe;
pub mod wire;

pub use complex::Complex;
pub use conformal::{map_checked, map_z_to_w, SINGULARITY_EPS};
pub use errors::{ConformalError, ConformalResult};
pub use plane::{ScreenPoint, ViewConfig, VIEW_SIZE, W_VIEW, Z_VIEW};
pub use probe::{HoverState, ProbeMachine, ProbeTicket};
pub use wire::{
    ComputeMode, ComputeRequest, ComputeResponse, MapPointResponse, SamplePoint,
    DEFAULT_POINT_COUNT,
};
