//! Pet registry controller.
//!
//! # Responsibility
//! - Provide one use-case entry point per menu action.
//! - Delegate storage to a `Repository<Pet>` implementation.
//! - Turn repository failures into display-ready messages.
//!
//! # Invariants
//! - Controller APIs never return raw `RepoError` values.
//! - Controller holds no state besides the repository handle.
//! - Log lines carry ids and counts only, never pet names or commands.

use crate::model::entity::EntityId;
use crate::model::pet::{Pet, PetKind};
use crate::repo::{RepoError, Repository};
use chrono::NaiveDate;
use log::{info, warn};

/// Input for creating a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDraft {
    pub name: String,
    pub kind: PetKind,
    pub birth_date: NaiveDate,
    /// Initial commands; blanks and duplicates are dropped.
    pub commands: Vec<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetPatch {
    pub name: Option<String>,
    pub kind: Option<PetKind>,
    pub birth_date: Option<NaiveDate>,
    /// Replaces the full command list when set.
    pub commands: Option<Vec<String>>,
}

/// Result envelope returned to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Pet the action targeted or created, when known.
    pub pet_id: Option<EntityId>,
    /// Text printed to the user as-is.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, pet_id: Option<EntityId>) -> Self {
        Self {
            ok: true,
            pet_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, pet_id: Option<EntityId>) -> Self {
        Self {
            ok: false,
            pet_id,
            message: message.into(),
        }
    }
}

/// Mediator between the console menu and pet storage.
pub struct PetController<R: Repository<Pet>> {
    repo: R,
}

impl<R: Repository<Pet>> PetController<R> {
    /// Creates a controller over the provided repository (usually `&mut repo`).
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new pet.
    pub fn create_pet(&mut self, draft: PetDraft) -> ActionResponse {
        let mut pet = Pet::new(draft.name, draft.kind, draft.birth_date);
        for command in &draft.commands {
            pet.teach(command);
        }

        match self.repo.add(pet) {
            Ok(stored) => {
                info!(
                    "event=pet_create module=controller status=ok id={} kind={}",
                    stored.id.unwrap_or_default(),
                    stored.kind
                );
                ActionResponse::success(format!("Pet added: {stored}"), stored.id)
            }
            Err(err) => failure("pet_create", None, err),
        }
    }

    /// Lists every pet in registration order.
    pub fn list_pets(&self) -> ActionResponse {
        let pets = self.repo.list();
        info!(
            "event=pet_list module=controller status=ok count={}",
            pets.len()
        );
        ActionResponse::success(render_list(&pets, "No pets registered yet."), None)
    }

    /// Shows one pet with its commands.
    pub fn show_pet(&self, id: EntityId) -> ActionResponse {
        match self.repo.get(id) {
            Ok(pet) => {
                let message = format!("{pet}\n  commands: {}", render_commands(&pet));
                ActionResponse::success(message, Some(id))
            }
            Err(err) => failure("pet_show", Some(id), err),
        }
    }

    /// Applies `patch` on top of the stored pet and writes it back.
    pub fn update_pet(&mut self, id: EntityId, patch: PetPatch) -> ActionResponse {
        let mut pet = match self.repo.get(id) {
            Ok(pet) => pet,
            Err(err) => return failure("pet_update", Some(id), err),
        };

        if let Some(name) = patch.name {
            pet.name = name.trim().to_string();
        }
        if let Some(kind) = patch.kind {
            pet.kind = kind;
        }
        if let Some(birth_date) = patch.birth_date {
            pet.birth_date = birth_date;
        }
        if let Some(commands) = patch.commands {
            pet.commands.clear();
            for command in &commands {
                pet.teach(command);
            }
        }

        match self.repo.update(id, pet) {
            Ok(stored) => {
                info!("event=pet_update module=controller status=ok id={id}");
                ActionResponse::success(format!("Pet updated: {stored}"), Some(id))
            }
            Err(err) => failure("pet_update", Some(id), err),
        }
    }

    /// Removes a pet from the registry.
    pub fn delete_pet(&mut self, id: EntityId) -> ActionResponse {
        match self.repo.remove(id) {
            Ok(removed) => {
                info!(
                    "event=pet_delete module=controller status=ok id={id} remaining={}",
                    self.repo.len()
                );
                ActionResponse::success(format!("Pet removed: {removed}"), Some(id))
            }
            Err(err) => failure("pet_delete", Some(id), err),
        }
    }

    /// Lists the commands a pet knows.
    pub fn show_commands(&self, id: EntityId) -> ActionResponse {
        match self.repo.get(id) {
            Ok(pet) => ActionResponse::success(
                format!("{} knows: {}", pet.name, render_commands(&pet)),
                Some(id),
            ),
            Err(err) => failure("pet_commands", Some(id), err),
        }
    }

    /// Teaches a pet one new command.
    pub fn teach_command(&mut self, id: EntityId, command: &str) -> ActionResponse {
        let mut pet = match self.repo.get(id) {
            Ok(pet) => pet,
            Err(err) => return failure("pet_teach", Some(id), err),
        };

        let command = command.trim();
        if command.is_empty() {
            return ActionResponse::failure("Command cannot be empty.", Some(id));
        }
        if !pet.teach(command) {
            return ActionResponse::failure(
                format!("{} already knows `{command}`.", pet.name),
                Some(id),
            );
        }

        match self.repo.update(id, pet) {
            Ok(stored) => {
                info!(
                    "event=pet_teach module=controller status=ok id={id} commands={}",
                    stored.commands.len()
                );
                ActionResponse::success(
                    format!("{} learned `{command}`.", stored.name),
                    Some(id),
                )
            }
            Err(err) => failure("pet_teach", Some(id), err),
        }
    }

    /// Lists pets oldest first; ties keep registration order.
    pub fn list_by_birth_date(&self) -> ActionResponse {
        let mut pets = self.repo.list();
        pets.sort_by_key(|pet| pet.birth_date);
        ActionResponse::success(render_list(&pets, "No pets registered yet."), None)
    }

    /// Reports how many pets are registered.
    pub fn count_pets(&self) -> ActionResponse {
        let count = self.repo.len();
        ActionResponse::success(format!("Total pets: {count}"), None)
    }
}

fn failure(event: &str, id: Option<EntityId>, err: RepoError) -> ActionResponse {
    let message = match &err {
        RepoError::NotFound(missing) => format!("No pet with id {missing}."),
        RepoError::DuplicateId(taken) => format!("Id {taken} is already taken."),
        RepoError::IdsExhausted => "The registry has no free ids left.".to_string(),
        RepoError::Validation(invalid) => format!("Rejected: {}.", invalid.message),
    };
    let error_code = match &err {
        RepoError::NotFound(_) => "not_found",
        RepoError::DuplicateId(_) => "duplicate_id",
        RepoError::IdsExhausted => "ids_exhausted",
        RepoError::Validation(_) => "validation_failed",
    };
    warn!(
        "event={event} module=controller status=error id={} error_code={error_code}",
        id.map_or_else(|| "-".to_string(), |id| id.to_string())
    );
    ActionResponse::failure(message, id)
}

fn render_list(pets: &[Pet], empty_message: &str) -> String {
    if pets.is_empty() {
        return empty_message.to_string();
    }
    pets.iter()
        .map(|pet| pet.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_commands(pet: &Pet) -> String {
    if pet.commands.is_empty() {
        "(none)".to_string()
    } else {
        pet.commands.join(", ")
    }
}
