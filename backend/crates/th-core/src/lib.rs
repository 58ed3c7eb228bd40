pub mod clock;
pub mod error;
pub mod models;


pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::field_violation::FieldViolation;
pub use models::ticket::Ticket;
pub use models::ticket_dto::{
    FIELD_NAME, FIELD_PRIORITY, FIELD_PROBLEM_DESCRIPTION, FIELD_STATUS, TicketDto,
};
pub use models::ticket_priority::TicketPriority;

/// Maximum length of a ticket name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length of a ticket problem description, in characters.
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: usize = 1000;
/// Maximum length of a ticket status, in characters.
pub const MAX_STATUS_LENGTH: usize = 50;
/// Status assigned to newly opened tickets.
pub const DEFAULT_STATUS: &str = "Open";
