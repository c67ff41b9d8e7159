//! Employee Record - Form Data Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The record behind the profile form. `password` may stay empty; the
/// backend keeps the stored one when it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub note: String,
}

/// The three positions an employee can hold. Encoding this as an enum is
/// what enforces the one-of-three constraint; no list rule needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Director,
    AccountManager,
    SupportSpecialist,
}

impl Position {
    pub const ALL: [Position; 3] = [
        Position::Director,
        Position::AccountManager,
        Position::SupportSpecialist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Director => "Director",
            Position::AccountManager => "Account manager",
            Position::SupportSpecialist => "Technical support specialist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    BirthDate,
    Experience,
    Position,
    Login,
    Password,
    Email,
    Phone,
    Note,
}

impl FieldId {
    /// Display order of the form.
    pub const ALL: [FieldId; 9] = [
        FieldId::FullName,
        FieldId::BirthDate,
        FieldId::Experience,
        FieldId::Position,
        FieldId::Login,
        FieldId::Password,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Note,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::BirthDate => "Birth date",
            FieldId::Experience => "Experience (years)",
            FieldId::Position => "Position",
            FieldId::Login => "Login",
            FieldId::Password => "Password",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone number",
            FieldId::Note => "Note",
        }
    }
}

/// A single typed change to a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    FullName(String),
    BirthDate(Option<NaiveDate>),
    Experience(Option<u32>),
    Position(Option<Position>),
    Login(String),
    Password(String),
    Email(String),
    Phone(String),
    Note(String),
}

impl FieldPatch {
    pub fn field(&self) -> FieldId {
        match self {
            FieldPatch::FullName(_) => FieldId::FullName,
            FieldPatch::BirthDate(_) => FieldId::BirthDate,
            FieldPatch::Experience(_) => FieldId::Experience,
            FieldPatch::Position(_) => FieldId::Position,
            FieldPatch::Login(_) => FieldId::Login,
            FieldPatch::Password(_) => FieldId::Password,
            FieldPatch::Email(_) => FieldId::Email,
            FieldPatch::Phone(_) => FieldId::Phone,
            FieldPatch::Note(_) => FieldId::Note,
        }
    }

    pub fn apply_to(self, record: &mut EmployeeRecord) {
        match self {
            FieldPatch::FullName(v) => record.full_name = v,
            FieldPatch::BirthDate(v) => record.birth_date = v,
            FieldPatch::Experience(v) => record.experience = v,
            FieldPatch::Position(v) => record.position = v,
            FieldPatch::Login(v) => record.login = v,
            FieldPatch::Password(v) => record.password = v,
            FieldPatch::Email(v) => record.email = v,
            FieldPatch::Phone(v) => record.phone = v,
            FieldPatch::Note(v) => record.note = v,
        }
    }
}

/// Explicit field-by-field diff. Dirty tracking goes through this, never
/// through blanket structural equality, so the changed set is reportable.
pub fn changed_fields(baseline: &EmployeeRecord, current: &EmployeeRecord) -> Vec<FieldId> {
    let mut changed = Vec::new();
    if baseline.full_name != current.full_name {
        changed.push(FieldId::FullName);
    }
    if baseline.birth_date != current.birth_date {
        changed.push(FieldId::BirthDate);
    }
    if baseline.experience != current.experience {
        changed.push(FieldId::Experience);
    }
    if baseline.position != current.position {
        changed.push(FieldId::Position);
    }
    if baseline.login != current.login {
        changed.push(FieldId::Login);
    }
    if baseline.password != current.password {
        changed.push(FieldId::Password);
    }
    if baseline.email != current.email {
        changed.push(FieldId::Email);
    }
    if baseline.phone != current.phone {
        changed.push(FieldId::Phone);
    }
    if baseline.note != current.note {
        changed.push(FieldId::Note);
    }
    changed
}

/// Partial record for batch edits (CLI payloads). Absent keys leave the
/// field untouched; fields cannot be cleared through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordPatch {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl RecordPatch {
    pub fn into_patches(self) -> Vec<FieldPatch> {
        let mut patches = Vec::new();
        if let Some(v) = self.full_name {
            patches.push(FieldPatch::FullName(v));
        }
        if let Some(v) = self.birth_date {
            patches.push(FieldPatch::BirthDate(Some(v)));
        }
        if let Some(v) = self.experience {
            patches.push(FieldPatch::Experience(Some(v)));
        }
        if let Some(v) = self.position {
            patches.push(FieldPatch::Position(Some(v)));
        }
        if let Some(v) = self.login {
            patches.push(FieldPatch::Login(v));
        }
        if let Some(v) = self.password {
            patches.push(FieldPatch::Password(v));
        }
        if let Some(v) = self.email {
            patches.push(FieldPatch::Email(v));
        }
        if let Some(v) = self.phone {
            patches.push(FieldPatch::Phone(v));
        }
        if let Some(v) = self.note {
            patches.push(FieldPatch::Note(v));
        }
        patches
    }
}
