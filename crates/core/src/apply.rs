// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{TransitionKind, TransitionResult};
use animals_domain::{Animal, AnimalId, validate_animal_fields};

/// Applies a command to the current record, producing the next record.
///
/// This function is pure apart from id generation on create.
///
/// # Arguments
///
/// * `current` - The stored record the command targets, if any
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the record to persist
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The name or description violates field rules
/// - A create targets an existing record
/// - An update targets a missing record, or one from another collection
pub fn apply(current: Option<&Animal>, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateAnimal {
            kind,
            name,
            description,
            group,
        } => {
            if let Some(id) = current.and_then(Animal::id) {
                return Err(CoreError::AlreadyCreated(id.clone()));
            }

            validate_animal_fields(&name, &description)?;

            let animal: Animal =
                Animal::with_id(AnimalId::generate(), kind, name, description, group);

            Ok(TransitionResult {
                animal,
                kind: TransitionKind::Created,
            })
        }
        Command::UpdateAnimal {
            id,
            kind,
            name,
            description,
            group,
        } => {
            // Rule: the record must exist and be addressed through its own collection
            let matches_target: bool =
                current.is_some_and(|animal| animal.id() == Some(&id) && animal.kind() == kind);
            if !matches_target {
                return Err(CoreError::AnimalNotFound { kind, id });
            }

            validate_animal_fields(&name, &description)?;

            Ok(TransitionResult {
                animal: Animal::with_id(id, kind, name, description, group),
                kind: TransitionKind::Updated,
            })
        }
    }
}
