use conformal_server::handlers::service_handler;
use conformal_server::static_files::serve_static;
use hyper::{Body, Method, Request, StatusCode};

#[tokio::test]
async fn test_index_is_served_at_root() {
    let resp = serve_static("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );
}

#[tokio::test]
async fn test_assets_under_static_prefix_are_served() {
    // The /static/ URL prefix maps onto the root of STATIC_DIR, so
    // /static/js/app.js must resolve to <STATIC_DIR>/js/app.js.
    let resp = serve_static("/static/js/app.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["Content-Type"], "application/javascript");

    let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let resp = serve_static("/static/js/missing.js").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_paths_outside_the_static_mount_are_404() {
    let resp = serve_static("/src/main.rs").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = serve_static("/static/").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_parent_traversal_is_rejected() {
    let resp = serve_static("/static/../src/main.rs").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_assets_via_service() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/static/js/app.js")
        .body(Body::empty())
        .unwrap();
    let resp = service_handler(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("Access-Control-Allow-Origin"));
}
