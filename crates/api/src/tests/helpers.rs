// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use animals_domain::{AnimalId, AnimalKind, Group};
use animals_persistence::Persistence;

use crate::{AnimalRequest, AnimalResponse, create_animal, parse_animal_id};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_valid_request() -> AnimalRequest {
    AnimalRequest::new("Test 1", "Default animal description", Group::Amphibian)
}

pub fn create_update_request() -> AnimalRequest {
    AnimalRequest::new("Updated name", "Updated desc", Group::Reptile)
}

/// Stores `create_valid_request()` in the collection of `kind`.
pub fn store_valid_animal(persistence: &mut Persistence, kind: AnimalKind) -> AnimalResponse {
    create_animal(persistence, kind, create_valid_request()).expect("create should succeed")
}

pub fn id_of(response: &AnimalResponse) -> AnimalId {
    parse_animal_id(&response.id).expect("stored ids are well formed")
}
