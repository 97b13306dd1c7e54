// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Animal record queries.
//!
//! Every query is scoped to a single collection (`kind`), so an id is never
//! visible through a collection it was not created in.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use animals_domain::{Animal, AnimalId, AnimalKind};

use crate::data_models::AnimalRow;
use crate::diesel_schema::animals;
use crate::error::PersistenceError;

/// Retrieves an animal by id within a collection.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `kind` - The collection to search
/// * `id` - The animal's identifier
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
/// Returns `Ok(None)` if the animal is not found.
pub fn get_animal(
    conn: &mut SqliteConnection,
    kind: AnimalKind,
    id: &AnimalId,
) -> Result<Option<Animal>, PersistenceError> {
    debug!(kind = %kind, id = %id, "Looking up animal");

    let result: Result<AnimalRow, diesel::result::Error> = animals::table
        .filter(animals::kind.eq(kind.as_str()))
        .filter(animals::animal_id.eq(id.value()))
        .select(AnimalRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_animal()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every animal in a collection, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_animals(
    conn: &mut SqliteConnection,
    kind: AnimalKind,
) -> Result<Vec<Animal>, PersistenceError> {
    debug!(kind = %kind, "Listing animals");

    let rows: Vec<AnimalRow> = animals::table
        .filter(animals::kind.eq(kind.as_str()))
        .order(animals::animal_seq.asc())
        .select(AnimalRow::as_select())
        .load(conn)?;

    rows.into_iter().map(AnimalRow::into_animal).collect()
}

/// Counts the animals in a collection.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_animals(
    conn: &mut SqliteConnection,
    kind: AnimalKind,
) -> Result<i64, PersistenceError> {
    let count: i64 = animals::table
        .filter(animals::kind.eq(kind.as_str()))
        .count()
        .get_result(conn)?;

    debug!(kind = %kind, count, "Counted animals");
    Ok(count)
}
