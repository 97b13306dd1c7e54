// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use animals::CoreError;
use animals_domain::{AnimalId, AnimalKind, DomainError};
use animals_persistence::PersistenceError;

use crate::{
    ApiError, ResourcePathError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};

#[test]
fn test_field_errors_become_invalid_input() {
    let message = String::from("Name cannot be empty");
    let err = translate_domain_error(DomainError::InvalidName(message));
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Name cannot be empty"),
        }
    );
}

#[test]
fn test_missing_animal_becomes_not_found() {
    let err = translate_core_error(CoreError::AnimalNotFound {
        kind: AnimalKind::Dog,
        id: AnimalId::generate(),
    });
    let ApiError::ResourceNotFound { resource_type, .. } = err else {
        panic!("expected ResourceNotFound, got {err:?}");
    };
    assert_eq!(resource_type, "Dog");
}

#[test]
fn test_recreate_is_a_rule_violation() {
    let err = translate_core_error(CoreError::AlreadyCreated(AnimalId::generate()));
    let ApiError::DomainRuleViolation { rule, .. } = err else {
        panic!("expected DomainRuleViolation, got {err:?}");
    };
    assert_eq!(rule, "immutable_id");
}

#[test]
fn test_storage_failures_are_internal() {
    let err = translate_persistence_error(PersistenceError::QueryFailed(String::from("boom")));
    assert_eq!(err.to_string(), "Internal error: Query failed: boom");
}

#[test]
fn test_path_errors_are_not_found() {
    let err: ApiError = ResourcePathError::UnknownResource {
        suffix: String::from("horses"),
    }
    .into();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));

    let err: ApiError = ResourcePathError::MalformedId {
        id: String::from("42"),
    }
    .into();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}
