use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::error::WebError;

/// Bind the dev server to localhost.
pub async fn bind(port: u16) -> Result<TcpListener, WebError> {
    TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|source| WebError::Bind { port, source })
}

/// Static file router over `dir`; `/` resolves to `index.html`.
pub fn router(dir: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(TraceLayer::new_for_http())
}

/// Serve `dir` until the listener fails.
pub async fn serve(listener: TcpListener, dir: PathBuf) -> Result<(), WebError> {
    axum::serve(listener, router(dir))
        .await
        .map_err(WebError::Serve)
}
