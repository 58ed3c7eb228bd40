use crate::{Ticket, TicketPriority};

use chrono::{DateTime, Utc};

#[test]
fn test_ticket_new() {
    let ticket = Ticket::new("Printer jam".to_string(), "Tray 2 is stuck".to_string());

    assert_eq!(ticket.id, 0);
    assert_eq!(ticket.name, "Printer jam");
    assert_eq!(ticket.problem_description, "Tray 2 is stuck");
    assert_eq!(ticket.status, "Open");
    assert_eq!(ticket.priority, TicketPriority::Medium);
    assert_eq!(ticket.date, DateTime::<Utc>::default());
}
