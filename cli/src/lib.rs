//! # orr-admin
//!
//! Administrative command-line tool for the ORR ontology registry.
//!
//! This crate authenticates against the registry API, lists entries,
//! filters them, and updates or deletes selected entries.

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod utils;

pub use utils::error::{OrrError, OrrResult};
