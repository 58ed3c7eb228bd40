pub mod create_ticket_request;
pub mod ticket_list_response;
pub mod ticket_response;
#[allow(clippy::module_inception)]
pub mod tickets;
