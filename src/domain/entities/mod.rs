//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted mapping from a short identifier to a URL

pub mod url_record;

pub use url_record::UrlRecord;
