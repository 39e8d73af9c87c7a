//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod submit;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use submit::submit_handler;
