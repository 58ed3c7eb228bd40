pub mod sqlite_ticket_store;
pub mod ticket_store;
