pub mod connection;
pub mod error;
pub mod repositories;


pub use connection::database::{MIGRATOR, open_in_memory_pool, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::sqlite_ticket_store::SqliteTicketStore;
pub use repositories::ticket_store::TicketStore;
