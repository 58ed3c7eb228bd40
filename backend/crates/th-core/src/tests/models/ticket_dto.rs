use crate::{Ticket, TicketDto, TicketPriority};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn valid_dto() -> TicketDto {
    TicketDto {
        name: "VPN drops".to_string(),
        problem_description: "The VPN disconnects every ten minutes.".to_string(),
        ..TicketDto::default()
    }
}

fn fields(dto: &TicketDto) -> Vec<&'static str> {
    dto.validate().into_iter().map(|v| v.field).collect()
}

// =========================================================================
// Defaults
// =========================================================================

#[test]
fn given_default_dto_then_status_open_and_priority_medium() {
    let dto = TicketDto::default();

    assert_that!(dto.id, eq(0));
    assert_that!(dto.name, eq(""));
    assert_that!(dto.problem_description, eq(""));
    assert_that!(dto.status, eq("Open"));
    assert_that!(dto.priority, eq("Medium"));
}

#[test]
fn given_valid_dto_when_validate_then_no_violations() {
    let dto = valid_dto();

    assert_that!(dto.validate(), is_empty());
    assert_that!(dto.is_valid(), eq(true));
}

// =========================================================================
// Name
// =========================================================================

#[test]
fn given_empty_name_when_validate_then_name_violation() {
    let dto = TicketDto {
        name: String::new(),
        ..valid_dto()
    };

    assert_that!(fields(&dto), eq(&vec!["name"]));
}

#[test]
fn given_whitespace_name_when_validate_then_name_violation() {
    let dto = TicketDto {
        name: "   \t".to_string(),
        ..valid_dto()
    };

    let violations = dto.validate();
    assert_that!(violations, len(eq(1)));
    assert_that!(violations[0].field, eq("name"));
    assert_that!(violations[0].message, contains_substring("required"));
}

#[test]
fn given_name_of_exactly_100_chars_when_validate_then_ok() {
    let dto = TicketDto {
        name: "a".repeat(100),
        ..valid_dto()
    };

    assert_that!(dto.validate(), is_empty());
}

#[test]
fn given_name_of_101_chars_when_validate_then_violation_mentions_100() {
    let dto = TicketDto {
        name: "a".repeat(101),
        ..valid_dto()
    };

    let violations = dto.validate();
    assert_that!(violations, len(eq(1)));
    assert_that!(violations[0].field, eq("name"));
    assert_that!(violations[0].message, contains_substring("100"));
}

#[test]
fn given_name_of_100_multibyte_chars_when_validate_then_ok() {
    let dto = TicketDto {
        name: "é".repeat(100),
        ..valid_dto()
    };

    assert_that!(dto.validate(), is_empty());
}

// =========================================================================
// Problem description
// =========================================================================

#[test]
fn given_empty_description_when_validate_then_description_violation() {
    let dto = TicketDto {
        problem_description: String::new(),
        ..valid_dto()
    };

    assert_that!(fields(&dto), eq(&vec!["problemDescription"]));
}

#[test]
fn given_description_of_exactly_1000_chars_when_validate_then_ok() {
    let dto = TicketDto {
        problem_description: "x".repeat(1000),
        ..valid_dto()
    };

    assert_that!(dto.validate(), is_empty());
}

#[test]
fn given_description_of_1001_chars_when_validate_then_violation_mentions_1000() {
    let dto = TicketDto {
        problem_description: "x".repeat(1001),
        ..valid_dto()
    };

    let violations = dto.validate();
    assert_that!(violations, len(eq(1)));
    assert_that!(violations[0].field, eq("problemDescription"));
    assert_that!(violations[0].message, contains_substring("1000"));
}

// =========================================================================
// Status and priority
// =========================================================================

#[test]
fn given_empty_status_when_validate_then_status_violation() {
    let dto = TicketDto {
        status: String::new(),
        ..valid_dto()
    };

    assert_that!(fields(&dto), eq(&vec!["status"]));
}

#[test]
fn given_free_form_status_when_validate_then_ok() {
    let dto = TicketDto {
        status: "Waiting on vendor".to_string(),
        ..valid_dto()
    };

    assert_that!(dto.validate(), is_empty());
}

#[test]
fn given_empty_priority_when_validate_then_single_required_violation() {
    let dto = TicketDto {
        priority: String::new(),
        ..valid_dto()
    };

    let violations = dto.validate();
    assert_that!(violations, len(eq(1)));
    assert_that!(violations[0].field, eq("priority"));
    assert_that!(violations[0].message, contains_substring("required"));
}

#[test]
fn given_wrong_case_priority_when_validate_then_priority_violation() {
    let dto = TicketDto {
        priority: "high".to_string(),
        ..valid_dto()
    };

    assert_that!(fields(&dto), eq(&vec!["priority"]));
}

#[test]
fn given_each_known_priority_when_validate_then_ok() {
    for name in ["Low", "Medium", "High"] {
        let dto = TicketDto {
            priority: name.to_string(),
            ..valid_dto()
        };
        assert_that!(dto.validate(), is_empty());
    }
}

#[test]
fn given_everything_invalid_when_validate_then_all_rules_reported() {
    let dto = TicketDto {
        name: String::new(),
        problem_description: "x".repeat(1001),
        status: String::new(),
        priority: "Urgent".to_string(),
        ..TicketDto::default()
    };

    assert_that!(
        fields(&dto),
        eq(&vec!["name", "problemDescription", "status", "priority"])
    );
}

#[test]
fn given_invalid_status_and_priority_when_validate_content_then_ignored() {
    let dto = TicketDto {
        status: String::new(),
        priority: "nope".to_string(),
        ..valid_dto()
    };

    assert_that!(dto.validate_content(), is_empty());
}

// =========================================================================
// Mapping
// =========================================================================

#[test]
fn given_ticket_when_mapped_to_dto_and_back_then_fields_preserved() {
    let date = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
    for priority in TicketPriority::ALL {
        let ticket = Ticket {
            id: 42,
            name: "Monitor flickers".to_string(),
            date,
            problem_description: "Second monitor flickers after lunch.".to_string(),
            status: "In Progress".to_string(),
            priority,
        };

        let dto = TicketDto::from(ticket.clone());
        assert_that!(dto.priority, eq(priority.as_str()));

        let back = Ticket::try_from(dto).unwrap();
        assert_that!(back, eq(&ticket));
    }
}

#[test]
fn given_dto_with_unknown_priority_when_mapped_then_error() {
    let dto = TicketDto {
        priority: "Critical".to_string(),
        ..valid_dto()
    };

    assert_that!(Ticket::try_from(dto), err(anything()));
}

#[test]
fn given_dto_when_serialized_then_uses_camel_case_keys() {
    let dto = valid_dto();

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["problemDescription"], dto.problem_description.as_str());
    assert_eq!(json["priority"], "Medium");
    assert!(json.get("problem_description").is_none());
}

#[test]
fn given_partial_json_when_deserialized_then_defaults_fill_in() {
    let dto: TicketDto =
        serde_json::from_str(r#"{"name":"Laptop","problemDescription":"Won't boot"}"#).unwrap();

    assert_that!(dto.name, eq("Laptop"));
    assert_that!(dto.status, eq("Open"));
    assert_that!(dto.priority, eq("Medium"));
    assert_that!(dto.id, eq(0));
}
