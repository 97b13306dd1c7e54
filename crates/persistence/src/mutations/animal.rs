// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Animal record mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use animals_domain::{Animal, AnimalId};

use crate::data_models::AnimalRow;
use crate::diesel_schema::animals;
use crate::error::PersistenceError;

/// Inserts a newly created animal.
///
/// The animal must already carry its identifier; the stored row is read
/// back and returned.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `animal` - The animal to insert
///
/// # Errors
///
/// Returns an error if:
/// - The animal has no id
/// - The id is already taken
/// - The database operation fails
pub fn insert_animal(
    conn: &mut SqliteConnection,
    animal: &Animal,
) -> Result<Animal, PersistenceError> {
    let id: &AnimalId = animal.id().ok_or(PersistenceError::MissingAnimalId)?;

    debug!(kind = %animal.kind(), id = %id, "Inserting animal");

    let row: AnimalRow = diesel::insert_into(animals::table)
        .values((
            animals::animal_id.eq(id.value()),
            animals::kind.eq(animal.kind().as_str()),
            animals::name.eq(animal.name()),
            animals::description.eq(animal.description()),
            animals::animal_group.eq(animal.group().as_str()),
        ))
        .returning(AnimalRow::as_returning())
        .get_result(conn)?;

    info!(kind = %animal.kind(), id = %id, "Animal created");
    row.into_animal()
}

/// Overwrites the mutable fields of a stored animal.
///
/// The row is matched by id and kind; the id itself is never written.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row matches, or an error if
/// the database operation fails.
pub fn update_animal(conn: &mut SqliteConnection, animal: &Animal) -> Result<(), PersistenceError> {
    let id: &AnimalId = animal.id().ok_or(PersistenceError::MissingAnimalId)?;

    debug!(kind = %animal.kind(), id = %id, "Updating animal");

    let rows_affected: usize = diesel::update(animals::table)
        .filter(animals::animal_id.eq(id.value()))
        .filter(animals::kind.eq(animal.kind().as_str()))
        .set((
            animals::name.eq(animal.name()),
            animals::description.eq(animal.description()),
            animals::animal_group.eq(animal.group().as_str()),
            animals::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "{} with id {id} not found",
            animal.kind()
        )));
    }

    info!(kind = %animal.kind(), id = %id, "Animal updated");
    Ok(())
}
