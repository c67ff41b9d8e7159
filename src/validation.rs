//! Validation Engine
//!
//! Walks each field's schema rule list in order and stops at the first
//! failure for that field. One surfaced error per field, message text only.

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::{EmployeeRecord, FieldId};
use crate::schema::{rules_for, Rule};

/// What the rules are checked against besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// Derived age, when the birth date is present and not in the future.
    pub age: Option<u32>,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: FieldId,
    pub rule: Rule,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn clean() -> Self {
        Self { valid: true, errors: vec![] }
    }

    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Validate the whole record. At most one error per field, in display order.
pub fn validate_record(record: &EmployeeRecord, ctx: &ValidationContext) -> ValidationReport {
    let errors: Vec<FieldError> = FieldId::ALL
        .iter()
        .filter_map(|&field| check_field(record, field, ctx))
        .collect();
    ValidationReport { valid: errors.is_empty(), errors }
}

/// First failing rule for one field, or `None` when the field passes.
pub fn check_field(
    record: &EmployeeRecord,
    field: FieldId,
    ctx: &ValidationContext,
) -> Option<FieldError> {
    for &rule in rules_for(field) {
        if let Some(message) = apply_rule(record, field, rule, ctx) {
            return Some(FieldError { field, rule, message });
        }
    }
    None
}

fn apply_rule(
    record: &EmployeeRecord,
    field: FieldId,
    rule: Rule,
    ctx: &ValidationContext,
) -> Option<String> {
    match rule {
        Rule::Required => required_failure(record, field),
        Rule::MaxChars(max) => {
            let text = text_value(record, field)?;
            if text.chars().count() > max {
                Some(format!("Maximum length is {max} characters"))
            } else {
                None
            }
        }
        Rule::MinChars(min) => {
            let text = text_value(record, field)?;
            // Optional fields skip the floor when left empty.
            if !text.is_empty() && text.chars().count() < min {
                Some(format!("Minimum length is {min} characters"))
            } else {
                None
            }
        }
        Rule::NotInFuture => match record.birth_date {
            Some(date) if date > ctx.today => {
                Some("Birth date cannot be in the future".to_string())
            }
            _ => None,
        },
        Rule::AtLeast(min) => match record.experience {
            Some(value) if value >= min => None,
            _ => Some(format!("Experience must be at least {min} year")),
        },
        Rule::AtMost(max) => match record.experience {
            Some(value) if value > max => Some(format!("Maximum experience is {max} years")),
            _ => None,
        },
        Rule::NotAboveAge => match (record.experience, ctx.age) {
            (Some(value), Some(age)) if value > age => {
                Some("Experience cannot exceed age".to_string())
            }
            _ => None,
        },
        Rule::EmailShape => {
            if email_shape_ok(&record.email) {
                None
            } else {
                Some("Enter a valid email".to_string())
            }
        }
    }
}

fn required_failure(record: &EmployeeRecord, field: FieldId) -> Option<String> {
    let missing = match field {
        FieldId::FullName => record.full_name.trim().is_empty(),
        FieldId::BirthDate => record.birth_date.is_none(),
        FieldId::Position => record.position.is_none(),
        FieldId::Login => record.login.trim().is_empty(),
        FieldId::Email => record.email.trim().is_empty(),
        _ => false,
    };
    if !missing {
        return None;
    }
    let message = match field {
        FieldId::FullName => "Please enter the full name",
        FieldId::BirthDate => "Please select a birth date",
        FieldId::Position => "Please select a position",
        FieldId::Login => "Please enter a login",
        FieldId::Email => "Please enter an email",
        _ => "This field is required",
    };
    Some(message.to_string())
}

fn text_value(record: &EmployeeRecord, field: FieldId) -> Option<&str> {
    match field {
        FieldId::FullName => Some(&record.full_name),
        FieldId::Login => Some(&record.login),
        FieldId::Password => Some(&record.password),
        FieldId::Email => Some(&record.email),
        FieldId::Phone => Some(&record.phone),
        FieldId::Note => Some(&record.note),
        _ => None,
    }
}

/// Loose RFC-shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is the backend's problem.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && tld.len() >= 2,
        None => false,
    }
}
