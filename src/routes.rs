// src/routes.rs
use axum::routing::{get, post};
use axum::Router;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::services::PollService;

pub fn create_routes(service: PollService, cors_origin: Option<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/createPoll", post(handlers::create_poll))
        .route("/api/getPoll", post(handlers::get_poll))
        .route("/api/castVote", post(handlers::cast_vote))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(service)
}

fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
