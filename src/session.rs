//! Form Session Controller - Single Entry Point
//!
//! Owns the edit-mode state machine, the baseline/current pair, dirty
//! tracking and validation invocation. All mutation goes through `&mut self`,
//! so at most one load or save is ever in flight.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::age::derive_age;
use crate::gateway::{LoadError, RecordGateway, SaveError};
use crate::record::{changed_fields, EmployeeRecord, FieldId, FieldPatch};
use crate::validation::{validate_record, FieldError, ValidationContext, ValidationReport};

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_PASS_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_pass_count() -> u32 {
    VALIDATION_PASS_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_pass_count() {
    VALIDATION_PASS_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Initial fetch in progress.
    Loading,
    /// Initial fetch failed; the form stays unusable. No retry path.
    LoadFailed,
    Viewing,
    Editing,
}

/// User-facing notification queued by the controller. The host drains
/// these and shows them however it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoadFailed(String),
    SaveSucceeded,
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LoadFailed(_) => "Failed to load data",
            Notice::SaveSucceeded => "Data saved successfully",
            Notice::SaveFailed(_) => "Failed to save data",
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{op} is only available in {expected} mode")]
    WrongMode { op: &'static str, expected: &'static str },

    #[error("Submit requires unsaved changes that pass validation")]
    SubmitBlocked,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The form session and its controller.
///
/// `baseline` is the last confirmed saved state; `current` is what the
/// inputs show. Editing always begins from a clean Viewing state, so the
/// baseline doubles as the editing-start snapshot for both dirty
/// comparison and cancel.
pub struct FormController {
    gateway: Arc<dyn RecordGateway>,
    id: Uuid,
    mode: FormMode,
    baseline: EmployeeRecord,
    current: EmployeeRecord,
    dirty: bool,
    age: Option<u32>,
    report: ValidationReport,
    notices: Vec<Notice>,
}

impl FormController {
    pub fn new(gateway: Arc<dyn RecordGateway>) -> Self {
        Self {
            gateway,
            id: Uuid::new_v4(),
            mode: FormMode::Loading,
            baseline: EmployeeRecord::default(),
            current: EmployeeRecord::default(),
            dirty: false,
            age: None,
            report: ValidationReport::clean(),
            notices: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn current(&self) -> &EmployeeRecord {
        &self.current
    }

    pub fn baseline(&self) -> &EmployeeRecord {
        &self.baseline
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Derived age of the current record, when computable.
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The one error the UI surfaces for a field, if any.
    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.report.error_for(field)
    }

    /// Drain queued notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Fetch the record through the gateway. Success populates both
    /// baseline and current; failure parks the form in LoadFailed.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        if self.mode != FormMode::Loading {
            return Err(SessionError::WrongMode { op: "load", expected: "Loading" });
        }
        match self.gateway.fetch_record().await {
            Ok(record) => {
                tracing::info!(session = %self.id, "record loaded");
                self.baseline = record.clone();
                self.current = record;
                self.dirty = false;
                self.recompute_age();
                self.revalidate();
                self.mode = FormMode::Viewing;
                Ok(())
            }
            Err(err) => {
                tracing::error!(session = %self.id, error = %err, "load failed");
                self.mode = FormMode::LoadFailed;
                self.notices.push(Notice::LoadFailed(err.0.clone()));
                Err(err.into())
            }
        }
    }

    /// Viewing -> Editing. Current equals baseline here, so dirty starts
    /// false without copying anything.
    pub fn enter_edit(&mut self) -> Result<(), SessionError> {
        if self.mode != FormMode::Viewing {
            return Err(SessionError::WrongMode { op: "enter_edit", expected: "Viewing" });
        }
        self.mode = FormMode::Editing;
        self.dirty = false;
        self.revalidate();
        Ok(())
    }

    /// Apply one field change. Birth-date changes recompute the derived
    /// age before revalidation so the experience rule sees the new value.
    pub fn apply(&mut self, patch: FieldPatch) -> Result<(), SessionError> {
        if self.mode != FormMode::Editing {
            return Err(SessionError::WrongMode { op: "apply", expected: "Editing" });
        }
        let field = patch.field();
        patch.apply_to(&mut self.current);
        if field == FieldId::BirthDate {
            self.recompute_age();
        }
        self.revalidate();
        self.dirty = !changed_fields(&self.baseline, &self.current).is_empty();
        tracing::debug!(session = %self.id, ?field, dirty = self.dirty, "field changed");
        Ok(())
    }

    /// Editing -> Viewing, discarding every change made since editing began.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if self.mode != FormMode::Editing {
            return Err(SessionError::WrongMode { op: "cancel", expected: "Editing" });
        }
        self.current = self.baseline.clone();
        self.dirty = false;
        self.recompute_age();
        self.revalidate();
        self.mode = FormMode::Viewing;
        Ok(())
    }

    /// Submit is allowed only with unsaved changes and a clean report.
    pub fn can_submit(&self) -> bool {
        self.mode == FormMode::Editing && self.dirty && self.report.valid
    }

    /// Persist the current record. On success the saved state becomes the
    /// new baseline; on failure the edits stay on screen for retry.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        if !self.can_submit() {
            return Err(SessionError::SubmitBlocked);
        }
        match self.gateway.save_record(&self.current).await {
            Ok(()) => {
                tracing::info!(session = %self.id, "record saved");
                self.baseline = self.current.clone();
                self.dirty = false;
                self.mode = FormMode::Viewing;
                self.notices.push(Notice::SaveSucceeded);
                Ok(())
            }
            Err(err) => {
                tracing::error!(session = %self.id, error = %err, "save failed");
                self.notices.push(Notice::SaveFailed(err.0.clone()));
                Err(err.into())
            }
        }
    }

    fn recompute_age(&mut self) {
        self.age = derive_age(self.current.birth_date, today());
    }

    fn revalidate(&mut self) {
        #[cfg(feature = "test-hooks")]
        VALIDATION_PASS_COUNT.fetch_add(1, Ordering::SeqCst);

        let ctx = ValidationContext { age: self.age, today: today() };
        self.report = validate_record(&self.current, &ctx);
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
