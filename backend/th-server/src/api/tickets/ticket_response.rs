use th_core::TicketDto;

use serde::Serialize;

/// Single ticket response
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket: TicketDto,
}
