//! HTTP handlers and request routing
//!
//! Top-level service dispatches on (method, path). Generation work runs
//! on the blocking pool so the accept loop never stalls; every response
//! carries CORS headers and OPTIONS preflights are answered directly.

use std::convert::Infallible;
use std::time::Instant;

use hyper::{Body, Method, Request, Response, StatusCode};

use conformal_shared::wire::{ComputeMode, ComputeRequest, ComputeResponse, MapPointResponse};
use conformal_shared::{map_checked, Complex};

use crate::compute::{generate_points_parallel, generate_points_sequential, normalize_count};
use crate::static_files::serve_static;

/// Top-level service function: dispatches API requests and falls back
/// to static assets for everything else.
pub async fn service_handler(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    if req.method() == Method::OPTIONS {
        return Ok(with_cors(
            Response::builder()
                .status(StatusCode::OK)
                .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
                .header("Access-Control-Allow-Headers", "Content-Type")
                .body(Body::empty())
                .unwrap(),
        ));
    }

    let response = match (req.method(), req.uri().path()) {
        (&Method::POST, "/api/compute/single") => {
            handle_compute(req, ComputeMode::Single).await
        }
        (&Method::POST, "/api/compute/parallel") => {
            handle_compute(req, ComputeMode::Parallel).await
        }
        (&Method::GET, "/api/map-point") => handle_map_point(&req),
        (_, "/api/compute/single" | "/api/compute/parallel" | "/api/map-point") => {
            text_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
        }
        (&Method::GET, path) => serve_static(path).await,
        _ => text_response(StatusCode::NOT_FOUND, "Not Found"),
    };

    Ok(with_cors(response))
}

/// `POST /api/compute/{mode}`: decode the request, normalize the
/// count, generate the point set off the event loop, report elapsed
/// wall time.
async fn handle_compute(req: Request<Body>, mode: ComputeMode) -> Response<Body> {
    let body = match hyper::body::to_bytes(req.into_body()).await {
        Ok(body) => body,
        Err(err) => {
            log::warn!("failed to read compute body: {err}");
            return text_response(StatusCode::BAD_REQUEST, "unreadable body");
        }
    };
    let request: ComputeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return text_response(StatusCode::BAD_REQUEST, "invalid payload"),
    };

    let requested = request.count;
    let count = normalize_count(requested);
    log::info!("compute request mode={mode} requested={requested} normalized={count}");

    let start = Instant::now();
    let generated = tokio::task::spawn_blocking(move || match mode {
        ComputeMode::Single => generate_points_sequential(count),
        ComputeMode::Parallel => generate_points_parallel(count),
    })
    .await;

    let points = match generated {
        Ok(points) => points,
        Err(err) => {
            log::error!("generation task failed: {err}");
            return text_response(StatusCode::INTERNAL_SERVER_ERROR, "generation failed");
        }
    };

    json_response(&ComputeResponse {
        mode: mode.label().to_string(),
        duration_ms: start.elapsed().as_millis() as i64,
        count: points.len(),
        points,
        requested,
    })
}

/// `GET /api/map-point?re=&im=`: map one point. 422 with a plain
/// message signals the singularity so the client can render "no target
/// point" instead of failing.
pub fn handle_map_point(req: &Request<Body>) -> Response<Body> {
    let (re, im) = match parse_point_query(req.uri().query()) {
        Ok(parts) => parts,
        Err(message) => return text_response(StatusCode::BAD_REQUEST, message),
    };

    log::info!("map-point request re={re} im={im}");
    match map_checked(Complex::new(re, im)) {
        Some(w) => json_response(&MapPointResponse { w }),
        None => text_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "mapping undefined for this point",
        ),
    }
}

/// Extract `re` and `im` floats from the query string.
pub fn parse_point_query(query: Option<&str>) -> Result<(f64, f64), &'static str> {
    let query = query.ok_or("invalid real part")?;

    let mut re = None;
    let mut im = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "re" => re = value.parse::<f64>().ok(),
            "im" => im = value.parse::<f64>().ok(),
            _ => {}
        }
    }

    let re = re.ok_or("invalid real part")?;
    let im = im.ok_or("invalid imaginary part")?;
    Ok((re, im))
}

fn with_cors(mut response: Response<Body>) -> Response<Body> {
    response
        .headers_mut()
        .insert("Access-Control-Allow-Origin", "*".parse().unwrap());
    response
}

fn json_response<T: serde::Serialize>(payload: &T) -> Response<Body> {
    match serde_json::to_vec(payload) {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        Err(err) => {
            log::error!("response serialization failed: {err}");
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "serialization failed")
        }
    }
}

fn text_response(status: StatusCode, message: &'static str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(message))
        .unwrap()
}
