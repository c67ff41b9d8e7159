//! Field Schema - Static Rule Lists
//!
//! Each field carries an ordered list of tagged rules. Evaluation order is
//! the list order; the first failing rule is the one surfaced for the field.

use serde::Serialize;

use crate::record::FieldId;

/// A single validation rule tag. Rules carry their own parameters; the
/// messages live with the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present and non-empty.
    Required,
    /// Text length cap, in characters.
    MaxChars(usize),
    /// Text length floor, in characters. Skipped on empty optional fields.
    MinChars(usize),
    /// Date must not lie after today.
    NotInFuture,
    /// Numeric floor; a missing value fails too (required-equivalent).
    AtLeast(u32),
    /// Numeric cap.
    AtMost(u32),
    /// Value must not exceed the derived age, when the age is known.
    NotAboveAge,
    /// Loose RFC-shape email check.
    EmailShape,
}

/// Static rule list for a field, in evaluation order.
///
/// Phone deliberately has no rules: the source form only masks the input
/// and never marks it required. The gap is kept, not repaired.
pub fn rules_for(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::FullName => &[Rule::Required, Rule::MaxChars(100)],
        FieldId::BirthDate => &[Rule::Required, Rule::NotInFuture],
        FieldId::Experience => &[Rule::AtLeast(1), Rule::NotAboveAge, Rule::AtMost(100)],
        FieldId::Position => &[Rule::Required],
        FieldId::Login => &[Rule::Required, Rule::MinChars(3), Rule::MaxChars(20)],
        FieldId::Password => &[Rule::MinChars(6), Rule::MaxChars(12)],
        FieldId::Email => &[Rule::Required, Rule::EmailShape],
        FieldId::Phone => &[],
        FieldId::Note => &[Rule::MaxChars(400)],
    }
}

/// Placeholder text shown in empty inputs.
pub fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::FullName => "Enter the full name",
        FieldId::BirthDate => "Select a date",
        FieldId::Experience => "",
        FieldId::Position => "Select a position",
        FieldId::Login => "Enter a login",
        FieldId::Password => "Enter a password",
        FieldId::Email => crate::masks::EMAIL_PLACEHOLDER,
        FieldId::Phone => crate::masks::PHONE_PLACEHOLDER,
        FieldId::Note => "Enter a note",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_field_has_no_rules() {
        // Matches the source form: phone is masked but never validated.
        assert!(rules_for(FieldId::Phone).is_empty());
    }

    #[test]
    fn test_login_rules_ordered_required_first() {
        assert_eq!(
            rules_for(FieldId::Login),
            &[Rule::Required, Rule::MinChars(3), Rule::MaxChars(20)]
        );
    }

    #[test]
    fn test_experience_floor_precedes_age_cap() {
        let rules = rules_for(FieldId::Experience);
        assert_eq!(rules[0], Rule::AtLeast(1));
        assert_eq!(rules[1], Rule::NotAboveAge);
        assert_eq!(rules[2], Rule::AtMost(100));
    }
}
