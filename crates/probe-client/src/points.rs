//! Bulk point-set requests
//!
//! Thin adapter over `POST /api/compute/{mode}`. Re-entrancy (no two
//! bulk fetches at once) is enforced by the caller holding the app
//! state; on failure the caller keeps its prior point set.

use crate::fetch::FetchClient;
use conformal_shared::wire::{ComputeMode, ComputeRequest, ComputeResponse};
use conformal_shared::ConformalResult;

/// Request `count` mapped sample points computed with the given
/// strategy. The response carries the points, the server-reported mode
/// string, and the elapsed time in milliseconds.
pub async fn request_points(
    client: &FetchClient,
    mode: ComputeMode,
    count: i64,
) -> ConformalResult<ComputeResponse> {
    let path = format!("/api/compute/{mode}");
    let response: ComputeResponse = client.post_json(&path, &ComputeRequest { count }).await?;
    log::info!(
        "compute {} returned {} points in {} ms",
        response.mode,
        response.points.len(),
        response.duration_ms
    );
    Ok(response)
}
