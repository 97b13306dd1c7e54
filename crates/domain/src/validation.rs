// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum length of an animal name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an animal description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Validates the free-text fields of an animal.
///
/// The group is not checked here: it is a closed enum and cannot hold
/// an invalid value once decoded.
///
/// # Arguments
///
/// * `name` - The animal's name
/// * `description` - The animal's description
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The name exceeds `MAX_NAME_LENGTH` characters
/// - The description exceeds `MAX_DESCRIPTION_LENGTH` characters
pub fn validate_animal_fields(name: &str, description: &str) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }

    // Empty descriptions are allowed
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::InvalidDescription(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }

    Ok(())
}
