// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use ::animals::{Command, TransitionResult, apply};
use animals_domain::{Animal, AnimalKind, Group};

use crate::Persistence;

pub fn create_test_animal(kind: AnimalKind, name: &str) -> Animal {
    let command: Command = Command::CreateAnimal {
        kind,
        name: name.to_string(),
        description: format!("{name} description"),
        group: Group::Amphibian,
    };
    let result: TransitionResult = apply(None, command).unwrap();
    result.animal
}

/// Inserts a freshly created animal and returns the stored record.
pub fn insert_test_animal(persistence: &mut Persistence, kind: AnimalKind, name: &str) -> Animal {
    let animal: Animal = create_test_animal(kind, name);
    persistence.insert_animal(&animal).unwrap()
}
