//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ShortenerService, ValidationService};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub validation_service: Arc<ValidationService>,
}

impl AppState {
    /// Wires services on top of a repository and a hostname resolver.
    pub fn new(url_repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            shortener_service: Arc::new(ShortenerService::new(url_repository)),
            validation_service: Arc::new(ValidationService::new(resolver)),
        }
    }
}
