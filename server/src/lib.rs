//! Backend for the conformal plot: bulk point computation and the
//! single-point mapping endpoint, plus static asset serving.

pub mod compute;
pub mod handlers;
pub mod static_files;
