//! Field validators for accounts and alarms.
//!
//! Each rule is a pure predicate over one field paired with the violation it
//! reports. Rules run in declaration order and the first failure wins, so the
//! order of `ACCOUNT_RULES` and `ALARM_RULES` is part of the API contract.

use chrono::{DateTime, NaiveDateTime};
use thiserror::Error;
use tracing::debug;

use crate::models::{Account, Alarm, WeekMask};

pub const PHONE_DIGITS: usize = 10;

/// A rejected payload. `Display` is the message returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Problem: All fields must be filled")]
    MissingFields,

    #[error("Problem: Password must only contain ASCII characters")]
    NonAsciiPassword,

    #[error("Problem: Phone number is invalid - must be 10 digits and only contain numbers")]
    InvalidPhone,

    #[error("Timestamp is not in ISO format")]
    InvalidTimestamp,

    #[error("Problem: Week needs at least one true value OR JSON be malformed")]
    EmptyRecurrence,
}

pub struct Rule<T> {
    pub name: &'static str,
    pub holds: fn(&T) -> bool,
    pub violation: ValidationError,
}

pub const ACCOUNT_RULES: &[Rule<Account>] = &[
    Rule {
        name: "all_fields_filled",
        holds: validate_account_fields,
        violation: ValidationError::MissingFields,
    },
    Rule {
        name: "ascii_password",
        holds: password_is_ascii,
        violation: ValidationError::NonAsciiPassword,
    },
    Rule {
        name: "phone_format",
        holds: phone_is_valid,
        violation: ValidationError::InvalidPhone,
    },
];

pub const ALARM_RULES: &[Rule<Alarm>] = &[
    Rule {
        name: "iso_timestamp",
        holds: time_is_valid,
        violation: ValidationError::InvalidTimestamp,
    },
    Rule {
        name: "recurrence_mask",
        holds: days_are_valid,
        violation: ValidationError::EmptyRecurrence,
    },
];

/// Apply `rules` in order, stopping at the first one that does not hold.
pub fn check<T>(rules: &[Rule<T>], subject: &T) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !(rule.holds)(subject)) {
        Some(rule) => {
            debug!("Rule {} rejected input", rule.name);
            Err(rule.violation)
        }
        None => Ok(()),
    }
}

pub fn validate_account(account: &Account) -> Result<(), ValidationError> {
    check(ACCOUNT_RULES, account)
}

pub fn validate_alarm(alarm: &Alarm) -> Result<(), ValidationError> {
    check(ALARM_RULES, alarm)
}

pub fn validate_account_fields(account: &Account) -> bool {
    [
        &account.email,
        &account.username,
        &account.password,
        &account.phone,
    ]
    .iter()
    .all(|field| !field.is_empty())
}

pub fn validate_ascii_password(password: &str) -> bool {
    password.is_ascii()
}

pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_timestamp(text: &str) -> bool {
    parse_timestamp(text).is_some()
}

pub fn validate_recurrence_mask(mask: &WeekMask) -> bool {
    mask.any()
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parse an ISO-8601 date-time, returning its wall-clock value. The offset,
/// if any, is checked but not applied.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    if let Some(utc) = text.strip_suffix('Z') {
        return parse_naive(utc);
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| parse_naive(text))
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

fn password_is_ascii(account: &Account) -> bool {
    validate_ascii_password(&account.password)
}

fn phone_is_valid(account: &Account) -> bool {
    validate_phone(&account.phone)
}

fn time_is_valid(alarm: &Alarm) -> bool {
    validate_timestamp(&alarm.time)
}

fn days_are_valid(alarm: &Alarm) -> bool {
    validate_recurrence_mask(&alarm.days)
}
