pub mod api;
pub mod check;

pub use api::api_routes;
pub use check::check_routes;
