//! Browser-side transport for the conformal plot client
//!
//! Thin, typed adapters over the browser's fetch API: the abortable
//! single-point probe query and the bulk point-set request. All state
//! decisions (supersede/merge/drop) live in
//! `conformal_shared::probe::ProbeMachine`; this crate only moves
//! bytes and classifies failures.

pub mod fetch;
pub mod points;
pub mod probe;

pub use fetch::FetchClient;
pub use points::request_points;
pub use probe::{fetch_mapped_point, ProbeTransport};
