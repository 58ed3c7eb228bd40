use th_app::{DefaultTicketService, TicketService};
use th_core::Clock;
use th_db::{SqliteTicketStore, TicketStore};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Raw pool, for health probes
    pub pool: SqlitePool,
    pub store: Arc<dyn TicketStore>,
    pub tickets: Arc<dyn TicketService>,
}

impl AppState {
    /// Wire the SQLite store and the ticket service over `pool`.
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        let store: Arc<dyn TicketStore> = Arc::new(SqliteTicketStore::new(pool.clone(), clock));
        let tickets: Arc<dyn TicketService> = Arc::new(DefaultTicketService::new(store.clone()));

        Self {
            pool,
            store,
            tickets,
        }
    }
}
