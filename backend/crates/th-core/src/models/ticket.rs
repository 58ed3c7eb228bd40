use crate::{DEFAULT_STATUS, TicketPriority};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A helpdesk ticket as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Assigned by the store on insert, never reused
    pub id: i64,
    pub name: String,

    /// Stamped by the store on insert
    pub date: DateTime<Utc>,
    pub problem_description: String,

    // Workflow
    pub status: String,
    pub priority: TicketPriority,
}

impl Ticket {
    /// Build an unsaved ticket with the default status and priority.
    ///
    /// `id` and `date` are placeholders until the store assigns them.
    pub fn new(name: String, problem_description: String) -> Self {
        Self {
            id: 0,
            name,
            date: DateTime::<Utc>::default(),
            problem_description,
            status: DEFAULT_STATUS.to_string(),
            priority: TicketPriority::default(),
        }
    }
}
