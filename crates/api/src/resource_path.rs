// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of `/api/1/{resource}/{id}` path segments.

use animals_domain::{AnimalId, AnimalKind};
use thiserror::Error;

/// Version prefix shared by every collection.
pub const API_PREFIX: &str = "/api/1";

/// Path resolution errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourcePathError {
    /// No collection is served under the suffix.
    #[error("No animal collection is served under '{suffix}'")]
    UnknownResource { suffix: String },

    /// The id segment cannot name any animal.
    #[error("'{id}' is not a valid animal id")]
    MalformedId { id: String },
}

/// Resolves a collection suffix to the kind it serves.
///
/// # Errors
///
/// Returns `ResourcePathError::UnknownResource` if no collection matches.
pub fn parse_resource_suffix(suffix: &str) -> Result<AnimalKind, ResourcePathError> {
    AnimalKind::from_url_suffix(suffix).ok_or_else(|| ResourcePathError::UnknownResource {
        suffix: suffix.to_string(),
    })
}

/// Parses the id segment of an item path.
///
/// # Errors
///
/// Returns `ResourcePathError::MalformedId` if the segment is not a valid id.
pub fn parse_animal_id(id: &str) -> Result<AnimalId, ResourcePathError> {
    AnimalId::parse(id).map_err(|_| ResourcePathError::MalformedId { id: id.to_string() })
}

/// The collection path of a kind, e.g. `/api/1/cats`.
#[must_use]
pub fn collection_path(kind: AnimalKind) -> String {
    format!("{API_PREFIX}/{}", kind.url_suffix())
}

/// The item path of an animal, e.g. `/api/1/cats/{id}`.
#[must_use]
pub fn item_path(kind: AnimalKind, id: &str) -> String {
    format!("{}/{id}", collection_path(kind))
}
