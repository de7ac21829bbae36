use std::path::Path;

use axum::{body::Body, extract::Request, middleware::{self, Next}, response::Response, Router};
use tower_http::{services::{ServeDir, ServeFile}, trace::TraceLayer};

/// Serves the built frontend. Every path outside the asset directory gets
/// `index.html` so the single-page app can boot from any URL.
pub fn app(dist_dir: &Path) -> Router {
    Router::new()
        .nest_service("/frontend/dist", ServeDir::new(dist_dir))
        .fallback_service(ServeFile::new(dist_dir.join("index.html")))
        .layer(middleware::from_fn(log_visit))
        .layer(TraceLayer::new_for_http())
}

async fn log_visit(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    // One visit loads js, wasm and css. Count the js only
    if path.starts_with("/frontend/dist/") && path.ends_with(".js") {
        tracing::debug!("Visit: {}", path);
    }

    next.run(req).await
}
