// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Animals registry.
//!
//! This crate stores animal records in `SQLite` through Diesel. The schema
//! is managed by embedded migrations (`migrations/`) applied whenever a
//! connection is opened.
//!
//! ## Testing Philosophy
//!
//! - Every test opens its own isolated in-memory database
//! - No test depends on external infrastructure

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use ::animals::{TransitionKind, TransitionResult};
use animals_domain::{Animal, AnimalId, AnimalKind};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Persistence adapter for animal records.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so instances
    /// never observe each other's records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_animals_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Persists the record produced by a core transition.
    ///
    /// Created records are inserted, updated records overwrite the stored row.
    ///
    /// # Returns
    ///
    /// The record as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails, or `NotFound` if an updated
    /// record no longer exists.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<Animal, PersistenceError> {
        match result.kind {
            TransitionKind::Created => self.insert_animal(&result.animal),
            TransitionKind::Updated => {
                self.update_animal(&result.animal)?;
                Ok(result.animal.clone())
            }
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Inserts a new animal, which must already carry its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the animal has no id or the insert fails.
    pub fn insert_animal(&mut self, animal: &Animal) -> Result<Animal, PersistenceError> {
        mutations::insert_animal(&mut self.conn, animal)
    }

    /// Overwrites the name, description and group of a stored animal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no animal with this id exists in its collection.
    pub fn update_animal(&mut self, animal: &Animal) -> Result<(), PersistenceError> {
        mutations::update_animal(&mut self.conn, animal)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Retrieves an animal by id within a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_animal(
        &mut self,
        kind: AnimalKind,
        id: &AnimalId,
    ) -> Result<Option<Animal>, PersistenceError> {
        queries::get_animal(&mut self.conn, kind, id)
    }

    /// Lists every animal in a collection in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_animals(&mut self, kind: AnimalKind) -> Result<Vec<Animal>, PersistenceError> {
        queries::list_animals(&mut self.conn, kind)
    }

    /// Counts the animals in a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_animals(&mut self, kind: AnimalKind) -> Result<i64, PersistenceError> {
        queries::count_animals(&mut self.conn, kind)
    }
}
