//! Load/Save Gateway
//!
//! The form never talks to a backend directly; everything goes through
//! `RecordGateway`. The mock implementation backs demos and tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::record::{EmployeeRecord, Position};

#[derive(Debug, Clone, Error)]
#[error("Failed to load data: {0}")]
pub struct LoadError(pub String);

#[derive(Debug, Clone, Error)]
#[error("Failed to save data: {0}")]
pub struct SaveError(pub String);

/// Request/response contract for fetching and persisting the record.
/// No partial saves; the whole record goes over each time.
#[async_trait]
pub trait RecordGateway: Send + Sync {
    async fn fetch_record(&self) -> Result<EmployeeRecord, LoadError>;

    async fn save_record(&self, record: &EmployeeRecord) -> Result<(), SaveError>;
}

/// In-memory gateway seeded with the demo record. Latency imitates the
/// mock backend's response delay; failure switches let tests exercise the
/// error paths.
pub struct MockGateway {
    store: Arc<RwLock<EmployeeRecord>>,
    latency: Duration,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::seeded(sample_record())
    }

    pub fn seeded(record: EmployeeRecord) -> Self {
        Self {
            store: Arc::new(RwLock::new(record)),
            latency: Duration::ZERO,
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordGateway for MockGateway {
    async fn fetch_record(&self) -> Result<EmployeeRecord, LoadError> {
        self.simulate_latency().await;
        if self.fail_loads.load(Ordering::SeqCst) {
            tracing::warn!("mock gateway refusing load");
            return Err(LoadError("backend unavailable".to_string()));
        }
        Ok(self.store.read().await.clone())
    }

    async fn save_record(&self, record: &EmployeeRecord) -> Result<(), SaveError> {
        self.simulate_latency().await;
        if self.fail_saves.load(Ordering::SeqCst) {
            tracing::warn!("mock gateway refusing save");
            return Err(SaveError("backend unavailable".to_string()));
        }
        *self.store.write().await = record.clone();
        Ok(())
    }
}

/// The record the demo backend starts with.
pub fn sample_record() -> EmployeeRecord {
    EmployeeRecord {
        full_name: "Ivan Ivanov".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
        experience: Some(5),
        position: Some(Position::AccountManager),
        login: "ivanov".to_string(),
        password: "password123".to_string(),
        email: "ivanov@example.com".to_string(),
        phone: "+79991234567".to_string(),
        note: "Sample note".to_string(),
    }
}
