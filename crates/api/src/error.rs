// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use animals::CoreError;
use animals_domain::DomainError;
use animals_persistence::PersistenceError;

use crate::resource_path::ResourcePathError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ResourcePathError> for ApiError {
    fn from(err: ResourcePathError) -> Self {
        match err {
            ResourcePathError::UnknownResource { .. } => Self::ResourceNotFound {
                resource_type: String::from("Resource"),
                message: err.to_string(),
            },
            // A malformed id cannot name a stored animal
            ResourcePathError::MalformedId { .. } => Self::ResourceNotFound {
                resource_type: String::from("Animal"),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::InvalidGroup(group) => ApiError::InvalidInput {
            field: String::from("group"),
            message: format!("Unknown group '{group}'"),
        },
        DomainError::InvalidKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Unknown animal kind '{kind}'"),
        },
        DomainError::InvalidId(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Animal"),
            message: format!("'{id}' is not a valid animal id"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::AnimalNotFound { kind, id } => ApiError::ResourceNotFound {
            resource_type: kind.to_string(),
            message: format!("{kind} with id '{id}' does not exist"),
        },
        CoreError::AlreadyCreated(id) => ApiError::DomainRuleViolation {
            rule: String::from("immutable_id"),
            message: format!("Animal '{id}' already exists and cannot be created again"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage details are reported as internal errors. A missing row is the
/// only persistence outcome a client can cause.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Animal"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
