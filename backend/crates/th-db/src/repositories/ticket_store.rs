use crate::Result as DbErrorResult;

use th_core::Ticket;

use async_trait::async_trait;

/// Durable CRUD over tickets.
///
/// Each write is committed before the call returns. Concurrent updates to
/// the same id are last-write-wins.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// All tickets, newest `date` first
    async fn list_all(&self) -> DbErrorResult<Vec<Ticket>>;

    async fn get_by_id(&self, id: i64) -> DbErrorResult<Option<Ticket>>;

    /// Insert a ticket. The store assigns `id` and stamps `date` with the
    /// current time; caller values for both are ignored.
    async fn create(&self, ticket: Ticket) -> DbErrorResult<Ticket>;

    /// Replace every field of the row matching `ticket.id`, including `date`.
    ///
    /// Fails with `DbError::TicketNotFound` when there is no such row.
    async fn update(&self, ticket: Ticket) -> DbErrorResult<Ticket>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> DbErrorResult<bool>;

    /// Flush pending changes to durable storage.
    ///
    /// Returns whether anything was actually written.
    async fn persist(&self) -> DbErrorResult<bool>;
}
