//! Entity contract shared by every repository-managed record.
//!
//! # Responsibility
//! - Expose identity accessors the repository needs to assign and match ids.
//! - Provide a validation hook that write paths run before mutating storage.
//!
//! # Invariants
//! - `id()` is `None` only for records that were never stored.
//! - `assign_id()` is called by repositories only.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned identifier.
///
/// Fresh identifiers start at 1 and are never reused within one store.
pub type EntityId = u64;

/// Field-level validation failure raised by `Entity::validate()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field (`name`, `birth_date`, ...).
    pub field: &'static str,
    /// Human-readable explanation, safe to show to users.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

/// Record type that can be stored in a `Repository`.
pub trait Entity: Clone {
    /// Returns the stored identifier, or `None` before first insert.
    fn id(&self) -> Option<EntityId>;

    /// Overwrites the identifier. Called by repositories on insert/update.
    fn assign_id(&mut self, id: EntityId);

    /// Checks record-level invariants before a write.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
