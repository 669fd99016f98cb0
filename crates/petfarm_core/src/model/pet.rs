//! Pet domain model.
//!
//! # Responsibility
//! - Define the record managed by the farm registry.
//! - Group pet kinds into domestic and pack animal classes.
//! - Own command-teaching rules (trim, dedupe case-insensitively).
//!
//! # Invariants
//! - `name` is non-blank and at most `MAX_NAME_CHARS` characters.
//! - `birth_date` is never later than the current local date.
//! - `commands` holds no blank or case-insensitive duplicate entries.

use super::entity::{Entity, EntityId, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MAX_NAME_CHARS: usize = 64;
pub const MAX_COMMAND_CHARS: usize = 64;

/// Animal species supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetKind {
    Dog,
    Cat,
    Hamster,
    Horse,
    Camel,
    Donkey,
}

/// Top-level grouping used for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetClass {
    /// Animals kept in the house.
    Domestic,
    /// Working animals used for carrying loads.
    PackAnimal,
}

impl PetKind {
    pub const ALL: [PetKind; 6] = [
        PetKind::Dog,
        PetKind::Cat,
        PetKind::Hamster,
        PetKind::Horse,
        PetKind::Camel,
        PetKind::Donkey,
    ];

    pub fn class(self) -> PetClass {
        match self {
            Self::Dog | Self::Cat | Self::Hamster => PetClass::Domestic,
            Self::Horse | Self::Camel | Self::Donkey => PetClass::PackAnimal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Hamster => "hamster",
            Self::Horse => "horse",
            Self::Camel => "camel",
            Self::Donkey => "donkey",
        }
    }
}

impl Display for PetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PetClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::PackAnimal => "pack animal",
        }
    }
}

impl Display for PetClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a known `PetKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePetKindError(pub String);

impl Display for ParsePetKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown pet kind `{}`; expected dog|cat|hamster|horse|camel|donkey",
            self.0
        )
    }
}

impl Error for ParsePetKindError {}

impl FromStr for PetKind {
    type Err = ParsePetKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or(ParsePetKindError(normalized))
    }
}

/// Canonical registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Assigned by the repository on first insert.
    pub id: Option<EntityId>,
    pub name: String,
    pub kind: PetKind,
    /// Serialized as ISO-8601 (`YYYY-MM-DD`).
    pub birth_date: NaiveDate,
    /// Commands in the order they were taught.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Pet {
    /// Creates an unsaved pet that knows no commands yet.
    pub fn new(name: impl Into<String>, kind: PetKind, birth_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into().trim().to_string(),
            kind,
            birth_date,
            commands: Vec::new(),
        }
    }

    pub fn class(&self) -> PetClass {
        self.kind.class()
    }

    /// Returns whether `command` is already known, ignoring case and padding.
    pub fn knows(&self, command: &str) -> bool {
        let needle = command.trim();
        self.commands
            .iter()
            .any(|known| known.eq_ignore_ascii_case(needle))
    }

    /// Adds a trimmed command unless it is blank or already known.
    ///
    /// Returns `true` when the command list changed.
    pub fn teach(&mut self, command: &str) -> bool {
        let trimmed = command.trim();
        if trimmed.is_empty() || self.knows(trimmed) {
            return false;
        }
        self.commands.push(trimmed.to_string());
        true
    }

    /// Validates against an explicit "today" so callers can pin the clock.
    pub fn validate_as_of(&self, today: NaiveDate) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ValidationError::new(
                "name",
                format!("name must be at most {MAX_NAME_CHARS} characters"),
            ));
        }
        if self.birth_date > today {
            return Err(ValidationError::new(
                "birth_date",
                format!(
                    "birth date {} is later than today ({today})",
                    self.birth_date
                ),
            ));
        }

        for (index, command) in self.commands.iter().enumerate() {
            let trimmed = command.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::new("commands", "command cannot be empty"));
            }
            if trimmed.chars().count() > MAX_COMMAND_CHARS {
                return Err(ValidationError::new(
                    "commands",
                    format!("command must be at most {MAX_COMMAND_CHARS} characters"),
                ));
            }
            if self.commands[..index]
                .iter()
                .any(|earlier| earlier.trim().eq_ignore_ascii_case(trimmed))
            {
                return Err(ValidationError::new(
                    "commands",
                    format!("command `{trimmed}` is listed more than once"),
                ));
            }
        }

        Ok(())
    }
}

impl Entity for Pet {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_as_of(Local::now().date_naive())
    }
}

impl Display for Pet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{id} ")?,
            None => f.write_str("#- ")?,
        }
        write!(
            f,
            "{} ({}, {}, born {})",
            self.name,
            self.kind,
            self.class(),
            self.birth_date
        )
    }
}
