//! Console presentation layer.
//!
//! # Responsibility
//! - Map menu selections onto controller use-cases.
//! - Keep terminal I/O out of the repository layer.
//!
//! # Invariants
//! - The menu talks to the controller only, never to a repository.

pub mod controller;
pub mod menu;
