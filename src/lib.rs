pub mod bootstrap;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
pub use models::verdict::{FieldKind, Outcome, Verdict};
pub use services::validation::{validate_email, validate_phone, validate_website};
pub use utils::AppConfig;

/// Application shared state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}
