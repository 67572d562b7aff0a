use std::sync::Arc;

use crate::config::Config;
use crate::scan::taxonomy::KeywordTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The taxonomy is the only process-wide state: loaded once at startup and
/// never mutated, so concurrent scans share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub taxonomy: Arc<KeywordTaxonomy>,
}
