//! Application-facing ticket operations.
//!
//! The service speaks [`TicketDto`] and delegates persistence to a
//! [`TicketStore`]. Create is the only operation that validates input
//! itself; update relies on the caller and on the schema constraints.

use crate::{AppError, Result as AppErrorResult};

use th_core::{Ticket, TicketDto};
use th_db::TicketStore;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

#[async_trait]
pub trait TicketService: Send + Sync {
    /// All tickets, newest first.
    async fn list_tickets(&self) -> AppErrorResult<Vec<TicketDto>>;

    async fn get_ticket(&self, id: i64) -> AppErrorResult<Option<TicketDto>>;

    /// Validate and insert a new ticket. The store assigns `id` and `date`.
    async fn create_ticket(&self, dto: TicketDto) -> AppErrorResult<TicketDto>;

    /// Replace an existing ticket, keeping the caller's `date`.
    async fn update_ticket(&self, dto: TicketDto) -> AppErrorResult<TicketDto>;

    /// Returns whether a ticket with `id` existed and was removed.
    async fn delete_ticket(&self, id: i64) -> AppErrorResult<bool>;
}

pub struct DefaultTicketService {
    store: Arc<dyn TicketStore>,
}

impl DefaultTicketService {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TicketService for DefaultTicketService {
    async fn list_tickets(&self) -> AppErrorResult<Vec<TicketDto>> {
        let tickets = self.store.list_all().await?;
        debug!("Listing {} ticket(s)", tickets.len());

        Ok(tickets.into_iter().map(TicketDto::from).collect())
    }

    async fn get_ticket(&self, id: i64) -> AppErrorResult<Option<TicketDto>> {
        let ticket = self.store.get_by_id(id).await?;
        if ticket.is_none() {
            debug!("Ticket {} not found", id);
        }

        Ok(ticket.map(TicketDto::from))
    }

    async fn create_ticket(&self, dto: TicketDto) -> AppErrorResult<TicketDto> {
        // 1. Content rules, before anything touches the store
        if let Some(violation) = dto.validate_content().into_iter().next() {
            warn!("Rejected ticket create: {}", violation);
            return Err(AppError::from(violation));
        }

        // 2. DTO -> entity (parses priority)
        let ticket = Ticket::try_from(dto).map_err(|e| {
            let err = AppError::from(e);
            warn!("Rejected ticket create: {}", err);
            err
        })?;

        // 3. Insert
        let created = self.store.create(ticket).await?;
        info!("Ticket {} created with priority {}", created.id, created.priority);

        Ok(TicketDto::from(created))
    }

    async fn update_ticket(&self, dto: TicketDto) -> AppErrorResult<TicketDto> {
        let ticket = Ticket::try_from(dto).map_err(|e| {
            let err = AppError::from(e);
            warn!("Rejected ticket update: {}", err);
            err
        })?;

        let updated = self.store.update(ticket).await?;
        info!("Ticket {} updated", updated.id);

        Ok(TicketDto::from(updated))
    }

    async fn delete_ticket(&self, id: i64) -> AppErrorResult<bool> {
        let removed = self.store.delete(id).await?;
        if removed {
            info!("Ticket {} deleted", id);
        } else {
            debug!("Delete of ticket {} found nothing", id);
        }

        Ok(removed)
    }
}
