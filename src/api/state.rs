use std::sync::Arc;

use sqlx::SqlitePool;

use crate::services::catalog::CatalogProvider;

/// Shared application state
///
/// The pool replaces any request-global database handle; handlers receive
/// it through the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(db: SqlitePool, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { db, catalog }
    }
}
