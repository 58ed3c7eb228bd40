pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    tickets::{
        create_ticket_request::CreateTicketRequest,
        ticket_list_response::TicketListResponse,
        ticket_response::TicketResponse,
        tickets::{create_ticket, delete_ticket, get_ticket, list_tickets, update_ticket},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
