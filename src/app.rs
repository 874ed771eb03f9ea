use axum::{
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::{
    config::Config,
    holdem,
    shared::{AppError, AppState},
};

/// Builds the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin.clone()]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health))
        .route("/evaluate-hand", post(holdem::evaluate_hand))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    AppError::Internal.into_response()
}
