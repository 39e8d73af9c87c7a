//! Utility functions shared across the application.
//!
//! - [`url_validator`] - Syntactic URL validation and host extraction

pub mod url_validator;
