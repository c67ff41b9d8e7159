//! Text Presentation
//!
//! Plain-text rendering of the form state for the CLI host. Not part of
//! the core; anything fancier should bind to `FormController` directly.

use crate::masks::format_phone;
use crate::record::FieldId;
use crate::schema::placeholder;
use crate::session::{FormController, FormMode};

pub fn render_form(ctrl: &FormController) -> String {
    match ctrl.mode() {
        FormMode::Loading => return "Loading...\n".to_string(),
        FormMode::LoadFailed => return "Failed to load data\n".to_string(),
        FormMode::Viewing | FormMode::Editing => {}
    }

    let mut out = String::new();
    let record = ctrl.current();

    for field in FieldId::ALL {
        let value = match field {
            FieldId::FullName => record.full_name.clone(),
            FieldId::BirthDate => record
                .birth_date
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default(),
            FieldId::Experience => record
                .experience
                .map(|e| e.to_string())
                .unwrap_or_default(),
            FieldId::Position => record
                .position
                .map(|p| p.label().to_string())
                .unwrap_or_default(),
            FieldId::Login => record.login.clone(),
            FieldId::Password => "*".repeat(record.password.chars().count()),
            FieldId::Email => record.email.clone(),
            FieldId::Phone => format_phone(&record.phone),
            FieldId::Note => record.note.clone(),
        };
        let shown = if value.is_empty() {
            format!("<{}>", placeholder(field))
        } else {
            value
        };
        out.push_str(&format!("{:<20} {}\n", field.label(), shown));
        if let Some(err) = ctrl.error_for(field) {
            out.push_str(&format!("{:<20} ! {}\n", "", err.message));
        }
    }

    if let Some(age) = ctrl.age() {
        out.push_str(&format!("{:<20} {}\n", "Age (derived)", age));
    }

    match ctrl.mode() {
        FormMode::Editing => {
            let save = if ctrl.can_submit() { "[ Save ]" } else { "( Save )" };
            out.push_str(&format!("\n{save}  [ Cancel ]\n"));
        }
        _ => out.push_str("\n[ Edit ]\n"),
    }
    out
}
