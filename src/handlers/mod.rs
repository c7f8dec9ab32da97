pub mod api;
pub mod check;

pub use api::{health_check, method_not_allowed, not_found};
pub use check::{check_email, check_form, check_phone, check_website};
