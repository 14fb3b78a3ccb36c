use std::time::Instant;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};

use super::handlers;
use crate::application::anagram::AnagramService;

pub fn build_router(service: AnagramService) -> Router {
    Router::new()
        .route("/get", get(handlers::get))
        .route("/load", post(handlers::load).patch(handlers::add))
        .route("/add", patch(handlers::add))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(log_requests))
        .with_state(service)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let t0 = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    log::info!(
        "http.request method={} path={} status={} perf.us={}",
        method,
        path,
        response.status().as_u16(),
        t0.elapsed().as_micros()
    );
    response
}
