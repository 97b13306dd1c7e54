// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the animal collections.
//!
//! Every handler takes the resolved collection kind and a mutable borrow of
//! the persistence layer. Commands are validated by the core before anything
//! is written.

use animals::{Command, apply, fixture_commands};
use animals_domain::{Animal, AnimalId, AnimalKind};
use animals_persistence::Persistence;
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    AnimalRequest, AnimalResponse, SeedFixturesResponse, SeededCollection,
};

/// Converts a stored animal into its API representation.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the animal carries no identifier.
pub fn animal_to_response(animal: &Animal) -> Result<AnimalResponse, ApiError> {
    let id: &AnimalId = animal.id().ok_or_else(|| ApiError::Internal {
        message: format!("{} '{}' has no identifier", animal.kind(), animal.name()),
    })?;

    Ok(AnimalResponse {
        id: id.value().to_string(),
        name: animal.name().to_string(),
        description: animal.description().to_string(),
        group: animal.group(),
    })
}

/// Creates an animal in the collection of `kind`.
///
/// Any id in the request body is ignored; the server assigns a fresh one.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `kind` - The collection to create in
/// * `request` - The animal to create
///
/// # Errors
///
/// Returns an error if:
/// - The name or description is invalid
/// - The database write fails
pub fn create_animal(
    persistence: &mut Persistence,
    kind: AnimalKind,
    request: AnimalRequest,
) -> Result<AnimalResponse, ApiError> {
    if let Some(ignored) = &request.id {
        debug!(kind = %kind, id = %ignored, "Ignoring client-supplied id on create");
    }

    let command: Command = Command::CreateAnimal {
        kind,
        name: request.name,
        description: request.description,
        group: request.group,
    };

    let result = apply(None, command).map_err(translate_core_error)?;
    let stored: Animal = persistence.persist_transition(&result)?;
    let response: AnimalResponse = animal_to_response(&stored)?;

    info!(kind = %kind, id = %response.id, "Created animal");
    Ok(response)
}

/// Lists every animal in the collection of `kind`, in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_animals(
    persistence: &mut Persistence,
    kind: AnimalKind,
) -> Result<Vec<AnimalResponse>, ApiError> {
    let animals: Vec<Animal> = persistence.list_animals(kind)?;
    debug!(kind = %kind, count = animals.len(), "Listed animals");
    animals.iter().map(animal_to_response).collect()
}

/// Retrieves one animal from the collection of `kind`.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no animal of `kind` has `id`.
pub fn get_animal(
    persistence: &mut Persistence,
    kind: AnimalKind,
    id: &AnimalId,
) -> Result<AnimalResponse, ApiError> {
    let animal: Animal =
        persistence
            .get_animal(kind, id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: kind.to_string(),
                message: format!("{kind} with id '{id}' does not exist"),
            })?;

    animal_to_response(&animal)
}

/// Replaces the name, description and group of an existing animal.
///
/// The id comes from the path. An id in the request body is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - No animal of `kind` has `id`
/// - The name or description is invalid
/// - The database write fails
pub fn update_animal(
    persistence: &mut Persistence,
    kind: AnimalKind,
    id: AnimalId,
    request: AnimalRequest,
) -> Result<AnimalResponse, ApiError> {
    let current: Option<Animal> = persistence.get_animal(kind, &id)?;

    let command: Command = Command::UpdateAnimal {
        id,
        kind,
        name: request.name,
        description: request.description,
        group: request.group,
    };

    let result = apply(current.as_ref(), command).map_err(translate_core_error)?;
    let stored: Animal = persistence.persist_transition(&result)?;
    let response: AnimalResponse = animal_to_response(&stored)?;

    info!(kind = %kind, id = %response.id, "Updated animal");
    Ok(response)
}

/// Seeds every empty collection with its fixtures.
///
/// Collections that already hold at least one record are left untouched,
/// so calling this repeatedly is safe.
///
/// # Errors
///
/// Returns an error if a database query or write fails.
pub fn seed_fixtures(persistence: &mut Persistence) -> Result<SeedFixturesResponse, ApiError> {
    let mut collections: Vec<SeededCollection> = Vec::new();

    for kind in AnimalKind::all() {
        let existing: i64 = persistence.count_animals(kind)?;
        let mut inserted: usize = 0;

        if existing == 0 {
            for command in fixture_commands(kind) {
                let result = apply(None, command).map_err(translate_core_error)?;
                persistence.persist_transition(&result)?;
                inserted += 1;
            }
            info!(kind = %kind, inserted, "Seeded fixtures");
        } else {
            debug!(kind = %kind, existing, "Collection already populated, skipping fixtures");
        }

        collections.push(SeededCollection {
            resource: kind.url_suffix().to_string(),
            inserted,
        });
    }

    Ok(SeedFixturesResponse { collections })
}
