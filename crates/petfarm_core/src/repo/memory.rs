//! In-memory repository implementation.
//!
//! # Responsibility
//! - Hold entities for the lifetime of the process.
//! - Hand out monotonically increasing ids.
//!
//! # Invariants
//! - `entities` is kept in insertion order.
//! - `next_id` is always greater than every id ever stored; `None` once the
//!   id space is used up.

use super::{RepoError, RepoResult, Repository};
use crate::model::entity::{Entity, EntityId};
use crate::model::pet::Pet;
use log::debug;

/// Registry store for pets.
pub type PetRepository = InMemoryRepository<Pet>;

/// Vec-backed repository; lookups are linear, which is fine for a farm.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: Vec<T>,
    next_id: Option<EntityId>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: Some(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    fn position(&self, id: EntityId) -> RepoResult<usize> {
        self.entities
            .iter()
            .position(|entity| entity.id() == Some(id))
            .ok_or(RepoError::NotFound(id))
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, mut entity: T) -> RepoResult<T> {
        entity.validate()?;

        let id = match entity.id() {
            Some(id) => id,
            None => self.next_id.ok_or(RepoError::IdsExhausted)?,
        };
        if self.position(id).is_ok() {
            debug!("event=entity_add module=repo status=error error_code=duplicate_id id={id}");
            return Err(RepoError::DuplicateId(id));
        }
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }

        entity.assign_id(id);
        self.entities.push(entity.clone());
        debug!(
            "event=entity_add module=repo status=ok id={id} total={}",
            self.entities.len()
        );
        Ok(entity)
    }

    fn get(&self, id: EntityId) -> RepoResult<T> {
        let index = self.position(id)?;
        Ok(self.entities[index].clone())
    }

    fn update(&mut self, id: EntityId, mut entity: T) -> RepoResult<T> {
        let index = self.position(id)?;
        entity.validate()?;

        entity.assign_id(id);
        self.entities[index] = entity.clone();
        debug!("event=entity_update module=repo status=ok id={id}");
        Ok(entity)
    }

    fn remove(&mut self, id: EntityId) -> RepoResult<T> {
        let index = self.position(id)?;
        let removed = self.entities.remove(index);
        debug!(
            "event=entity_remove module=repo status=ok id={id} total={}",
            self.entities.len()
        );
        Ok(removed)
    }

    fn list(&self) -> Vec<T> {
        self.entities.clone()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}
