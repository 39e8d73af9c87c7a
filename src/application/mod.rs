//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and validation rules and provide a
//! small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Identifier assignment and lookup
//! - [`services::validation_service::ValidationService`] - Syntax and DNS checks for submissions

pub mod services;
