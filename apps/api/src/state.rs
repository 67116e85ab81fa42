use std::sync::Arc;

use crate::notifications::Notifier;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    /// Pluggable push delivery. Default: LogNotifier.
    pub notifier: Arc<dyn Notifier>,
}
