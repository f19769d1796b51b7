//! Standalone mock Canvas server
//!
//! Binds the echo router to a local port for poking the client by hand:
//!
//!   PORT=8080 cargo run --package canvas-mock

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canvas_mock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("mock Canvas server listening on http://{addr}");

    let app = canvas_mock::app().layer(TraceLayer::new_for_http());
    axum::serve(listener, app).await
}
