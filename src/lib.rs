//! StaffForm Core - Employee Profile Form Engine
//!
//! # Ground Rules
//! 1. The schema is the single source of field rules
//! 2. Every mutation passes through the controller
//! 3. Dirty means an explicit field diff, not pointer luck
//! 4. Age is derived, never stored
//! 5. The gateway is the only road to the backend

pub mod age;
pub mod gateway;
pub mod masks;
pub mod record;
pub mod render;
pub mod schema;
pub mod session;
pub mod validation;

pub use gateway::{LoadError, MockGateway, RecordGateway, SaveError};
pub use record::{EmployeeRecord, FieldId, FieldPatch, Position, RecordPatch};
pub use schema::{rules_for, Rule};
pub use session::{FormController, FormMode, Notice, SessionError};
pub use validation::{check_field, validate_record, FieldError, ValidationContext, ValidationReport};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
