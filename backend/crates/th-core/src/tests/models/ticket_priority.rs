use crate::{CoreError, TicketPriority};

use std::str::FromStr;

#[test]
fn test_ticket_priority_as_str() {
    assert_eq!(TicketPriority::Low.as_str(), "Low");
    assert_eq!(TicketPriority::Medium.as_str(), "Medium");
    assert_eq!(TicketPriority::High.as_str(), "High");
}

#[test]
fn test_ticket_priority_from_str() {
    for priority in TicketPriority::ALL {
        assert_eq!(TicketPriority::from_str(priority.as_str()).unwrap(), priority);
    }
}

#[test]
fn test_ticket_priority_from_str_is_case_sensitive() {
    assert!(TicketPriority::from_str("high").is_err());
    assert!(TicketPriority::from_str("MEDIUM").is_err());
    assert!(TicketPriority::from_str(" Low").is_err());
    assert!(TicketPriority::from_str("").is_err());
}

#[test]
fn test_ticket_priority_from_str_reports_value() {
    let err = TicketPriority::from_str("Urgent").unwrap_err();

    assert!(matches!(err, CoreError::InvalidPriority { ref value, .. } if value == "Urgent"));
    assert!(err.to_string().contains("Urgent"));
}

#[test]
fn test_ticket_priority_codes() {
    assert_eq!(i64::from(TicketPriority::Low), 0);
    assert_eq!(i64::from(TicketPriority::Medium), 1);
    assert_eq!(i64::from(TicketPriority::High), 2);

    for priority in TicketPriority::ALL {
        assert_eq!(TicketPriority::try_from(priority.code()).unwrap(), priority);
    }
}

#[test]
fn test_ticket_priority_unknown_code_is_error() {
    assert!(matches!(
        TicketPriority::try_from(3),
        Err(CoreError::InvalidPriorityCode { value: 3, .. })
    ));
    assert!(TicketPriority::try_from(-1).is_err());
}

#[test]
fn test_ticket_priority_default() {
    assert_eq!(TicketPriority::default(), TicketPriority::Medium);
}
