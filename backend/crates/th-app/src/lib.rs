pub mod error;
pub mod services;


pub use error::{AppError, Result};
pub use services::ticket_service::{DefaultTicketService, TicketService};
