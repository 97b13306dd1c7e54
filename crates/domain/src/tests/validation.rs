// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, validate_animal_fields};

#[test]
fn test_validate_animal_fields_accepts_valid_fields() {
    let result: Result<(), DomainError> =
        validate_animal_fields("Default animal name", "Default animal description");
    assert!(result.is_ok());
}

#[test]
fn test_validate_animal_fields_accepts_empty_description() {
    assert!(validate_animal_fields("Tom", "").is_ok());
}

#[test]
fn test_validate_animal_fields_rejects_empty_name() {
    let result: Result<(), DomainError> = validate_animal_fields("", "desc");
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_animal_fields_rejects_blank_name() {
    let result: Result<(), DomainError> = validate_animal_fields("   ", "desc");
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_animal_fields_enforces_name_length() {
    let at_limit: String = "a".repeat(MAX_NAME_LENGTH);
    assert!(validate_animal_fields(&at_limit, "desc").is_ok());

    let too_long: String = "a".repeat(MAX_NAME_LENGTH + 1);
    let result: Result<(), DomainError> = validate_animal_fields(&too_long, "desc");
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_animal_fields_counts_characters_not_bytes() {
    let name: String = "é".repeat(MAX_NAME_LENGTH);
    assert!(validate_animal_fields(&name, "desc").is_ok());
}

#[test]
fn test_validate_animal_fields_enforces_description_length() {
    let too_long: String = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
    let result: Result<(), DomainError> = validate_animal_fields("Tom", &too_long);
    assert!(matches!(result, Err(DomainError::InvalidDescription(_))));
}
