use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::store::BookStore;

/// The shared application state.
///
/// Passed to every handler through Axum's `State` extractor. Cloning is cheap:
/// the pool, config and counters are all shared handles.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool, used directly by readiness checks.
    pub db: sqlx::SqlitePool,
    /// The book table.
    pub books: BookStore,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Book lifecycle counters.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self {
            books: BookStore::new(db.clone()),
            db,
            config: Arc::new(config),
            metrics: Metrics::new(),
        }
    }
}
