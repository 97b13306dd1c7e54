// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use std::str::FromStr;

use animals_domain::{Animal, AnimalId, AnimalKind, Group};

use crate::diesel_schema::animals;
use crate::error::PersistenceError;

/// Diesel Queryable struct for animal rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = animals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnimalRow {
    pub animal_id: String,
    pub kind: String,
    pub name: String,
    pub description: String,
    pub animal_group: String,
}

impl AnimalRow {
    /// Converts a stored row into a domain `Animal`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the stored id,
    /// kind, or group is not a valid domain value.
    pub fn into_animal(self) -> Result<Animal, PersistenceError> {
        let id: AnimalId = AnimalId::parse(&self.animal_id)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let kind: AnimalKind = AnimalKind::from_str(&self.kind)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let group: Group = Group::from_str(&self.animal_group)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        Ok(Animal::with_id(
            id,
            kind,
            self.name,
            self.description,
            group,
        ))
    }
}
