use axum::{routing::{get, post}, Router};

use crate::handlers::check::{check_email, check_form, check_phone, check_website};
use crate::AppState;

pub fn check_routes() -> Router<AppState> {
    Router::new()
        .route("/check", get(check_form))
        .route("/check/email", post(check_email))
        .route("/check/phone", post(check_phone))
        .route("/check/website", post(check_website))
}
