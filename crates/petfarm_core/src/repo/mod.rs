//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the generic CRUD contract over any `Entity`.
//! - Keep storage details out of controller/menu orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Entity::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod memory;

use crate::model::entity::{Entity, EntityId, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use memory::{InMemoryRepository, PetRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entity storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(EntityId),
    DuplicateId(EntityId),
    /// Every fresh id has been handed out.
    IdsExhausted,
    Validation(ValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
            Self::DuplicateId(id) => write!(f, "entity id already in use: {id}"),
            Self::IdsExhausted => write!(f, "no fresh entity ids left"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) | Self::IdsExhausted => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for entity CRUD operations.
pub trait Repository<T: Entity> {
    /// Stores `entity`, assigning a fresh id when it has none.
    fn add(&mut self, entity: T) -> RepoResult<T>;
    fn get(&self, id: EntityId) -> RepoResult<T>;
    /// Replaces all fields of the stored entity; the stored id is kept.
    fn update(&mut self, id: EntityId, entity: T) -> RepoResult<T>;
    fn remove(&mut self, id: EntityId) -> RepoResult<T>;
    /// Returns every entity in insertion order.
    fn list(&self) -> Vec<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity, R: Repository<T> + ?Sized> Repository<T> for &mut R {
    fn add(&mut self, entity: T) -> RepoResult<T> {
        (**self).add(entity)
    }

    fn get(&self, id: EntityId) -> RepoResult<T> {
        (**self).get(id)
    }

    fn update(&mut self, id: EntityId, entity: T) -> RepoResult<T> {
        (**self).update(id, entity)
    }

    fn remove(&mut self, id: EntityId) -> RepoResult<T> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<T> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
