//! Business logic services for the application layer.

pub mod shortener_service;
pub mod validation_service;

pub use shortener_service::ShortenerService;
pub use validation_service::ValidationService;
