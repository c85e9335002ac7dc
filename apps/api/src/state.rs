use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::document::DocumentReader;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document reader. Default: PdfDocumentReader.
    pub reader: Arc<dyn DocumentReader>,
    /// Process start, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, reader: Arc<dyn DocumentReader>) -> Self {
        AppState {
            config,
            reader,
            started_at: Instant::now(),
        }
    }
}
