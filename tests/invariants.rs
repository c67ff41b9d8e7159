//! Form Contract Invariant Tests
//!
//! These tests verify the state-machine guarantees end to end, through the
//! mock gateway.

use std::sync::Arc;

use chrono::{Days, Local, Months, NaiveDate};

use staffform_core::{
    gateway::sample_record,
    EmployeeRecord, FieldId, FieldPatch, FormController, FormMode, MockGateway, Notice, Rule,
    SessionError,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Sample record with the birth date pinned 34 years back so the derived
/// age is stable no matter when the suite runs.
fn record_aged_34() -> EmployeeRecord {
    let mut record = sample_record();
    record.birth_date = today().checked_sub_months(Months::new(12 * 34));
    record
}

async fn loaded_controller(gateway: Arc<MockGateway>) -> FormController {
    let mut ctrl = FormController::new(gateway);
    ctrl.load().await.expect("mock load");
    ctrl
}

#[tokio::test]
async fn invariant_load_populates_session() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let ctrl = loaded_controller(gateway).await;

    assert_eq!(ctrl.mode(), FormMode::Viewing);
    assert_eq!(ctrl.current(), ctrl.baseline());
    assert_eq!(ctrl.age(), Some(34));
    assert!(!ctrl.is_dirty());
    assert!(ctrl.report().valid);
}

#[tokio::test]
async fn invariant_load_failure_parks_form() {
    let gateway = Arc::new(MockGateway::new());
    gateway.set_fail_loads(true);

    let mut ctrl = FormController::new(gateway);
    assert!(ctrl.load().await.is_err());
    assert_eq!(ctrl.mode(), FormMode::LoadFailed);

    let notices = ctrl.take_notices();
    assert!(matches!(notices.as_slice(), [Notice::LoadFailed(_)]));
    assert_eq!(notices[0].message(), "Failed to load data");

    // The form stays unusable; there is no retry path.
    assert!(matches!(
        ctrl.enter_edit(),
        Err(SessionError::WrongMode { .. })
    ));
}

#[tokio::test]
async fn invariant_submit_requires_dirty_and_valid() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;
    ctrl.enter_edit().unwrap();

    // Untouched form: nothing to save.
    assert!(!ctrl.can_submit());
    assert!(matches!(
        ctrl.submit().await,
        Err(SessionError::SubmitBlocked)
    ));

    ctrl.apply(FieldPatch::Note("Updated note".into())).unwrap();
    assert!(ctrl.can_submit());

    ctrl.apply(FieldPatch::Login("ab".into())).unwrap();
    assert!(!ctrl.can_submit());
    let err = ctrl.error_for(FieldId::Login).unwrap();
    assert_eq!(err.rule, Rule::MinChars(3));
    assert_eq!(err.message, "Minimum length is 3 characters");

    ctrl.apply(FieldPatch::Login("petrov".into())).unwrap();
    assert!(ctrl.can_submit());
}

#[tokio::test]
async fn invariant_cancel_restores_editing_start_record() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;

    let before_edit = ctrl.current().clone();
    ctrl.enter_edit().unwrap();
    ctrl.apply(FieldPatch::FullName("Petr Petrov".into())).unwrap();
    ctrl.apply(FieldPatch::Experience(Some(10))).unwrap();
    ctrl.apply(FieldPatch::BirthDate(today().checked_sub_months(Months::new(12 * 20))))
        .unwrap();
    assert!(ctrl.is_dirty());

    ctrl.cancel().unwrap();
    assert_eq!(ctrl.mode(), FormMode::Viewing);
    assert_eq!(ctrl.current(), &before_edit);
    assert!(!ctrl.is_dirty());
    // Derived age follows the restored birth date.
    assert_eq!(ctrl.age(), Some(34));
}

#[tokio::test]
async fn invariant_save_roundtrip() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway.clone()).await;

    ctrl.enter_edit().unwrap();
    ctrl.apply(FieldPatch::Note("Edited and saved".into())).unwrap();
    ctrl.apply(FieldPatch::Experience(Some(12))).unwrap();
    ctrl.submit().await.expect("save through mock");

    assert_eq!(ctrl.mode(), FormMode::Viewing);
    assert!(!ctrl.is_dirty());
    assert_eq!(ctrl.baseline(), ctrl.current());
    assert!(matches!(
        ctrl.take_notices().as_slice(),
        [Notice::SaveSucceeded]
    ));

    // A fresh session against the same store sees the saved record.
    let reloaded = loaded_controller(gateway).await;
    assert_eq!(reloaded.current(), ctrl.current());
}

#[tokio::test]
async fn invariant_save_failure_preserves_edits() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway.clone()).await;
    let original = ctrl.baseline().clone();

    ctrl.enter_edit().unwrap();
    ctrl.apply(FieldPatch::Note("Doomed edit".into())).unwrap();

    gateway.set_fail_saves(true);
    assert!(matches!(
        ctrl.submit().await,
        Err(SessionError::Save(_))
    ));
    assert_eq!(ctrl.mode(), FormMode::Editing);
    assert_eq!(ctrl.current().note, "Doomed edit");
    assert_eq!(ctrl.baseline(), &original);
    assert!(matches!(
        ctrl.take_notices().as_slice(),
        [Notice::SaveFailed(_)]
    ));

    // Backend recovers; the preserved edits go through on retry.
    gateway.set_fail_saves(false);
    ctrl.submit().await.expect("retry succeeds");
    assert_eq!(ctrl.mode(), FormMode::Viewing);
    assert_eq!(ctrl.baseline().note, "Doomed edit");
}

#[tokio::test]
async fn invariant_experience_above_age_blocks_submit() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;
    ctrl.enter_edit().unwrap();

    ctrl.apply(FieldPatch::Experience(Some(40))).unwrap();
    let err = ctrl.error_for(FieldId::Experience).unwrap();
    assert_eq!(err.message, "Experience cannot exceed age");
    assert!(ctrl.is_dirty());
    assert!(!ctrl.can_submit());
}

#[tokio::test]
async fn invariant_birth_date_change_revalidates_experience() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;
    ctrl.enter_edit().unwrap();

    // Experience 5 is fine at age 34...
    assert!(ctrl.error_for(FieldId::Experience).is_none());

    // ...but not once the birth date implies an age of 3.
    ctrl.apply(FieldPatch::BirthDate(today().checked_sub_months(Months::new(12 * 3))))
        .unwrap();
    assert_eq!(ctrl.age(), Some(3));
    let err = ctrl.error_for(FieldId::Experience).unwrap();
    assert_eq!(err.message, "Experience cannot exceed age");
}

#[tokio::test]
async fn invariant_future_birth_date_rejected() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;
    ctrl.enter_edit().unwrap();

    let tomorrow = today().checked_add_days(Days::new(1));
    ctrl.apply(FieldPatch::BirthDate(tomorrow)).unwrap();

    let err = ctrl.error_for(FieldId::BirthDate).unwrap();
    assert_eq!(err.rule, Rule::NotInFuture);
    // The calculator never sees a future date.
    assert_eq!(ctrl.age(), None);
    assert!(!ctrl.can_submit());
}

#[tokio::test]
async fn invariant_mutations_rejected_outside_editing() {
    let gateway = Arc::new(MockGateway::seeded(record_aged_34()));
    let mut ctrl = loaded_controller(gateway).await;

    assert!(matches!(
        ctrl.apply(FieldPatch::Note("nope".into())),
        Err(SessionError::WrongMode { .. })
    ));
    assert!(matches!(ctrl.cancel(), Err(SessionError::WrongMode { .. })));
    assert_eq!(ctrl.mode(), FormMode::Viewing);
    assert!(!ctrl.is_dirty());
}
