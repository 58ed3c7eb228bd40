//! Transfer representation of a ticket and its validation rules.
//!
//! `priority` travels as its string name here and is only parsed into
//! [`TicketPriority`] when a DTO is mapped back onto a [`Ticket`].

use crate::{
    CoreError, DEFAULT_STATUS, FieldViolation, MAX_NAME_LENGTH, MAX_PROBLEM_DESCRIPTION_LENGTH,
    Result as CoreErrorResult, Ticket, TicketPriority,
};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FIELD_NAME: &str = "name";
pub const FIELD_PROBLEM_DESCRIPTION: &str = "problemDescription";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_PRIORITY: &str = "priority";

/// Ticket DTO for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketDto {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub problem_description: String,
    pub status: String,
    /// One of "Low", "Medium", "High"
    pub priority: String,
}

impl Default for TicketDto {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            date: DateTime::<Utc>::default(),
            problem_description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            priority: TicketPriority::default().as_str().to_string(),
        }
    }
}

impl TicketDto {
    /// Run every field rule and collect the violations.
    ///
    /// Rules are independent; an empty result means the DTO is valid.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = self.validate_content();

        if self.status.trim().is_empty() {
            violations.push(FieldViolation::new(FIELD_STATUS, "Status is required"));
        }

        if self.priority.trim().is_empty() {
            violations.push(FieldViolation::new(FIELD_PRIORITY, "Priority is required"));
        } else if TicketPriority::from_str(&self.priority).is_err() {
            violations.push(FieldViolation::new(
                FIELD_PRIORITY,
                format!(
                    "Priority must be one of Low, Medium, High (got '{}')",
                    self.priority
                ),
            ));
        }

        violations
    }

    /// Rules for the user-authored text fields: `name` and `problemDescription`.
    pub fn validate_content(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new(FIELD_NAME, "Name is required"));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            violations.push(FieldViolation::new(
                FIELD_NAME,
                format!("Name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }

        if self.problem_description.trim().is_empty() {
            violations.push(FieldViolation::new(
                FIELD_PROBLEM_DESCRIPTION,
                "Problem description is required",
            ));
        }
        if self.problem_description.chars().count() > MAX_PROBLEM_DESCRIPTION_LENGTH {
            violations.push(FieldViolation::new(
                FIELD_PROBLEM_DESCRIPTION,
                format!(
                    "Description cannot exceed {} characters",
                    MAX_PROBLEM_DESCRIPTION_LENGTH
                ),
            ));
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl From<Ticket> for TicketDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            name: t.name,
            date: t.date,
            problem_description: t.problem_description,
            status: t.status,
            priority: t.priority.as_str().to_string(),
        }
    }
}

impl TryFrom<TicketDto> for Ticket {
    type Error = CoreError;

    #[track_caller]
    fn try_from(dto: TicketDto) -> CoreErrorResult<Self> {
        let priority = TicketPriority::from_str(&dto.priority)?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
            date: dto.date,
            problem_description: dto.problem_description,
            status: dto.status,
            priority,
        })
    }
}
