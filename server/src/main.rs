// main.rs

use std::net::SocketAddr;

use hyper::{server::conn::Http, service::service_fn};
use tokio::net::TcpListener;

use conformal_server::handlers::service_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    log::info!("server starting at http://{addr}");

    loop {
        let (stream, _peer_addr) = listener.accept().await?;
        // Disable Nagle's algorithm for interactive latency.
        let _ = stream.set_nodelay(true);

        tokio::spawn(async move {
            if let Err(err) = Http::new()
                .serve_connection(stream, service_fn(service_handler))
                .await
            {
                log::warn!("connection error: {err}");
            }
        });
    }
}
