use axum::{routing::get, Router};

use crate::handlers::api::health_check;
use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
