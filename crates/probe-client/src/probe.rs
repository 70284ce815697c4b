//! Abortable transport for the hover probe
//!
//! Each cursor move issues a new map-point query and aborts the
//! previous one. The abort is advisory (the response may already be in
//! flight); the authoritative supersede check happens in
//! `ProbeMachine::complete`, so a raced abort can never corrupt state.

use crate::fetch::{js_error, response_json, FetchClient};
use conformal_shared::wire::MapPointResponse;
use conformal_shared::{Complex, ConformalError, ConformalResult};
use web_sys::{AbortController, AbortSignal};

/// Holds the abort handle of the most recently issued probe query.
/// At most one is live at a time.
#[derive(Debug, Default)]
pub struct ProbeTransport {
    current: Option<AbortController>,
}

impl ProbeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort whatever query is in flight and arm a fresh controller
    /// for the next one. Returns the signal to attach to the request.
    pub fn supersede(&mut self) -> ConformalResult<AbortSignal> {
        self.cancel();
        let controller = AbortController::new().map_err(js_error)?;
        let signal = controller.signal();
        self.current = Some(controller);
        Ok(signal)
    }

    /// Cursor left: abort any in-flight query and drop the handle.
    pub fn cancel(&mut self) {
        if let Some(controller) = self.current.take() {
            controller.abort();
        }
    }
}

/// Query the mapping service for a single point. `Ok(None)` means the
/// mapping is undefined at `z` (HTTP 422, the singularity); the caller
/// renders "no target point" rather than treating it as a failure.
pub async fn fetch_mapped_point(
    client: &FetchClient,
    z: Complex,
    signal: &AbortSignal,
) -> ConformalResult<Option<Complex>> {
    let path = format!("/api/map-point?re={}&im={}", z.re, z.im);
    let resp = client.get(&path, Some(signal)).await?;

    if resp.status() == 422 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(ConformalError::Network {
            message: format!("map-point failed: {}", resp.status()),
        });
    }

    let body: MapPointResponse = response_json(resp).await?;
    Ok(Some(body.w))
}
