// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, apply};
use animals_domain::{Animal, AnimalKind, Group};

pub fn create_test_command(kind: AnimalKind, name: &str, description: &str) -> Command {
    Command::CreateAnimal {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        group: Group::Amphibian,
    }
}

/// Creates a stored cat as the starting point for update tests.
pub fn create_test_cat() -> Animal {
    let command: Command = create_test_command(AnimalKind::Cat, "Tom", "Bob cat");
    let result: TransitionResult = apply(None, command).unwrap();
    result.animal
}
