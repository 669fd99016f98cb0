//! Domain model for the pet farm registry.
//!
//! # Responsibility
//! - Define the records managed by repositories.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every stored record carries a repository-assigned `EntityId`.

pub mod entity;
pub mod pet;
