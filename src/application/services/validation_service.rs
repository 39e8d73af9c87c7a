//! Validation of submitted URLs.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::url_validator::{extract_host, is_valid_url};

/// Decides whether a submitted value may be shortened.
///
/// Checks run in order and stop at the first failure:
///
/// 1. A value is present
/// 2. It is an absolute `http`/`https` URL
/// 3. Its host resolves through the configured [`HostResolver`]
pub struct ValidationService {
    resolver: Arc<dyn HostResolver>,
}

impl ValidationService {
    /// Creates a new validation service.
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates a candidate and returns it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the candidate is missing, malformed
    /// or uses a scheme other than `http`/`https`.
    ///
    /// Returns [`AppError::UnresolvableHost`] if the host does not resolve.
    pub async fn validate(&self, candidate: Option<String>) -> Result<String, AppError> {
        let Some(candidate) = candidate else {
            debug!("Rejected submission without url field");
            return Err(AppError::InvalidUrl);
        };

        if !is_valid_url(&candidate) {
            debug!("Rejected malformed url: {}", candidate);
            return Err(AppError::InvalidUrl);
        }

        let host = extract_host(&candidate).ok_or(AppError::InvalidUrl)?;

        if !self.resolver.resolves(&host).await {
            warn!("Rejected url with unresolvable host: {}", host);
            return Err(AppError::UnresolvableHost { host });
        }

        Ok(candidate)
    }
}
