pub mod validation;

pub use validation::{validate, validate_email, validate_form, validate_phone, validate_website};
