use conformal_server::handlers::{handle_map_point, parse_point_query, service_handler};
use conformal_server::compute::generate_points_sequential;
use conformal_shared::wire::MapPointResponse;
use conformal_shared::{map_z_to_w, Complex};
use hyper::{Body, Method, Request, StatusCode};

fn map_point_request(query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(format!("/api/map-point{query}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_parse_point_query() {
    assert_eq!(parse_point_query(Some("re=1.5&im=-0.25")), Ok((1.5, -0.25)));
    assert_eq!(
        parse_point_query(Some("im=2&re=3")),
        Ok((3.0, 2.0)),
        "parameter order must not matter"
    );
    assert!(parse_point_query(Some("re=abc&im=1")).is_err());
    assert!(parse_point_query(Some("re=1")).is_err());
    assert!(parse_point_query(None).is_err());
}

#[tokio::test]
async fn test_map_point_at_origin() {
    let resp = handle_map_point(&map_point_request("?re=0&im=0"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    let parsed: MapPointResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.w, Complex::ZERO);
}

#[tokio::test]
async fn test_map_point_singularity_is_422() {
    let resp = handle_map_point(&map_point_request("?re=0&im=1"));
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_map_point_invalid_input_is_400() {
    let resp = handle_map_point(&map_point_request("?re=abc&im=1"));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = handle_map_point(&map_point_request(""));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_map_point_matches_shared_mapping() {
    let z = Complex::new(1.5, -0.5);
    let resp = handle_map_point(&map_point_request("?re=1.5&im=-0.5"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    let parsed: MapPointResponse = serde_json::from_slice(&body).unwrap();

    let expected = map_z_to_w(z).unwrap();
    assert!((parsed.w.re - expected.re).abs() < 1e-9);
    assert!((parsed.w.im - expected.im).abs() < 1e-9);
}

#[tokio::test]
async fn test_map_point_via_service_has_cors() {
    let resp = service_handler(map_point_request("?re=2&im=3")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("Access-Control-Allow-Origin"));
}

#[tokio::test]
async fn test_bulk_and_single_point_paths_agree() {
    // The bulk generator and the map-point endpoint must report the
    // same image for the same input.
    for p in generate_points_sequential(25) {
        let resp = handle_map_point(&map_point_request(&format!(
            "?re={}&im={}",
            p.z.re, p.z.im
        )));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
        let parsed: MapPointResponse = serde_json::from_slice(&body).unwrap();
        assert!((parsed.w.re - p.w.re).abs() < 1e-9);
        assert!((parsed.w.im - p.w.im).abs() < 1e-9);
    }
}
