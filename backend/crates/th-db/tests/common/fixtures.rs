use th_core::{Ticket, TicketPriority};

use chrono::{DateTime, TimeZone, Utc};

/// Creates an unsaved Ticket with sensible defaults
pub fn create_test_ticket(name: &str) -> Ticket {
    Ticket {
        id: 0,
        name: name.to_string(),
        date: DateTime::<Utc>::default(),
        problem_description: format!("Problem report for {}", name),
        status: "Open".to_string(),
        priority: TicketPriority::Medium,
    }
}

/// Creates an unsaved Ticket with a specific priority
pub fn create_test_ticket_with_priority(name: &str, priority: TicketPriority) -> Ticket {
    Ticket {
        priority,
        ..create_test_ticket(name)
    }
}

/// A fixed date well away from any clock used by the tests
pub fn far_past_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap()
}
