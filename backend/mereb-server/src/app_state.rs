use crate::{PersonService, ValidatingPersonService};

use mereb_db::SqlitePersonRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub person_service: Arc<dyn PersonService>,
}

impl AppState {
    /// Wire the SQLite repository and validating service onto `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqlitePersonRepository::new(pool.clone()));
        let person_service = Arc::new(ValidatingPersonService::new(repository));

        Self {
            pool,
            person_service,
        }
    }

    pub fn with_person_service(pool: SqlitePool, person_service: Arc<dyn PersonService>) -> Self {
        Self {
            pool,
            person_service,
        }
    }
}
