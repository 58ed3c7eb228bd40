pub mod field_violation;
pub mod ticket;
pub mod ticket_dto;
pub mod ticket_priority;
