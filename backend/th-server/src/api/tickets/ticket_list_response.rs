use th_core::TicketDto;

use serde::Serialize;

/// List of tickets response, newest first
#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketDto>,
}
