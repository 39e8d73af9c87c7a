//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname resolution contract used by URL validation
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod resolver;
