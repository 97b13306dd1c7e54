// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Taxonomic classification of an animal.
///
/// The set is closed. Values travel over the wire in upper case
/// (e.g. `AMPHIBIAN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Group {
    Amphibian,
    Bird,
    Fish,
    Invertebrate,
    Mammal,
    Reptile,
}

impl Group {
    /// Converts this group to its wire and storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Amphibian => "AMPHIBIAN",
            Self::Bird => "BIRD",
            Self::Fish => "FISH",
            Self::Invertebrate => "INVERTEBRATE",
            Self::Mammal => "MAMMAL",
            Self::Reptile => "REPTILE",
        }
    }
}

impl FromStr for Group {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMPHIBIAN" => Ok(Self::Amphibian),
            "BIRD" => Ok(Self::Bird),
            "FISH" => Ok(Self::Fish),
            "INVERTEBRATE" => Ok(Self::Invertebrate),
            "MAMMAL" => Ok(Self::Mammal),
            "REPTILE" => Ok(Self::Reptile),
            _ => Err(DomainError::InvalidGroup(s.to_string())),
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The subtype of an animal.
///
/// Each kind is served from its own resource collection, identified by
/// its URL suffix, while sharing the same field contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Cat,
    Dog,
    Arachnid,
}

impl AnimalKind {
    /// Every kind served by the registry.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Cat, Self::Dog, Self::Arachnid]
    }

    /// Converts this kind to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
            Self::Arachnid => "Arachnid",
        }
    }

    /// The path segment of this kind's collection under `/api/1/`.
    #[must_use]
    pub const fn url_suffix(&self) -> &'static str {
        match self {
            Self::Cat => "cats",
            Self::Dog => "dogs",
            Self::Arachnid => "arachnids",
        }
    }

    /// Resolves a collection path segment to its kind.
    ///
    /// Returns `None` if no collection is served under `suffix`.
    #[must_use]
    pub fn from_url_suffix(suffix: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.url_suffix() == suffix)
    }
}

impl FromStr for AnimalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cat" => Ok(Self::Cat),
            "Dog" => Ok(Self::Dog),
            "Arachnid" => Ok(Self::Arachnid),
            _ => Err(DomainError::InvalidKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque identifier of a persisted animal.
///
/// Identifiers are UUID v4 values rendered as lowercase hyphenated strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(String);

impl AnimalId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses an identifier received from a client or from storage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if `value` is not a well-formed UUID.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| DomainError::InvalidId(value.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An animal record.
///
/// Before creation the record carries no identifier. Once persisted the
/// identifier never changes; name, description and group may be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// `None` indicates the animal has not been created yet.
    id: Option<AnimalId>,
    kind: AnimalKind,
    name: String,
    description: String,
    group: Group,
}

impl Animal {
    /// Creates a new `Animal` without an identifier.
    #[must_use]
    pub const fn new(kind: AnimalKind, name: String, description: String, group: Group) -> Self {
        Self {
            id: None,
            kind,
            name,
            description,
            group,
        }
    }

    /// Creates an `Animal` with an existing identifier.
    #[must_use]
    pub const fn with_id(
        id: AnimalId,
        kind: AnimalKind,
        name: String,
        description: String,
        group: Group,
    ) -> Self {
        Self {
            id: Some(id),
            kind,
            name,
            description,
            group,
        }
    }

    /// Returns the identifier, if the animal has been created.
    #[must_use]
    pub const fn id(&self) -> Option<&AnimalId> {
        self.id.as_ref()
    }

    #[must_use]
    pub const fn kind(&self) -> AnimalKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn group(&self) -> Group {
        self.group
    }
}
