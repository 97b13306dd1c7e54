// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use animals_domain::{AnimalId, AnimalKind, DomainError};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The animal targeted by an update does not exist in its collection.
    AnimalNotFound {
        /// The collection that was searched.
        kind: AnimalKind,
        /// The identifier that was requested.
        id: AnimalId,
    },
    /// A create command was applied to an existing record.
    AlreadyCreated(AnimalId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::AnimalNotFound { kind, id } => {
                write!(f, "{kind} with id '{id}' not found")
            }
            Self::AlreadyCreated(id) => write!(f, "Animal '{id}' already exists"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
