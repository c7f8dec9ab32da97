pub mod config;
pub mod error;
pub mod logger;
pub mod validator;

pub use config::{load_config, AppConfig};
pub use error::ApiError;
pub use logger::init_logger;
pub use validator::{is_valid_email, is_valid_phone, is_valid_website};
