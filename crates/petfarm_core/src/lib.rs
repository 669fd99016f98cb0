//! Core domain logic for the pet farm registry.
//! Model, storage and console presentation live here; the binary only wires them.

pub mod logging;
pub mod model;
pub mod repo;
pub mod ui;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{Entity, EntityId, ValidationError};
pub use model::pet::{ParsePetKindError, Pet, PetClass, PetKind};
pub use repo::{InMemoryRepository, PetRepository, RepoError, RepoResult, Repository};
pub use ui::controller::{ActionResponse, PetController, PetDraft, PetPatch};
pub use ui::menu::{ConsoleMenu, MenuAction, MenuState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
