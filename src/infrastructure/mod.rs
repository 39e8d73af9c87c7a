//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution through the system resolver
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod dns;
pub mod persistence;
