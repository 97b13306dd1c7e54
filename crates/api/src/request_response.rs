// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use animals_domain::Group;
use serde::{Deserialize, Serialize};

/// API request carrying an animal representation, used for both create and update.
///
/// A client may echo an `id` back in the body; it is ignored. The server
/// assigns ids on create and takes the id from the URL on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRequest {
    /// Ignored if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The animal's name.
    pub name: String,
    /// The animal's description. Defaults to empty.
    #[serde(default)]
    pub description: String,
    /// The animal's taxonomic group.
    pub group: Group,
}

impl AnimalRequest {
    /// Creates a request without an id.
    #[must_use]
    pub fn new(name: &str, description: &str, group: Group) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            group,
        }
    }
}

/// API representation of a stored animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalResponse {
    /// The server-assigned identifier.
    pub id: String,
    /// The animal's name.
    pub name: String,
    /// The animal's description.
    pub description: String,
    /// The animal's taxonomic group.
    pub group: Group,
}

/// Number of fixture records inserted into one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededCollection {
    /// The collection's URL suffix.
    pub resource: String,
    /// Records inserted; zero if the collection already had data.
    pub inserted: usize,
}

/// API response for fixture seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFixturesResponse {
    /// One entry per collection, in a stable order.
    pub collections: Vec<SeededCollection>,
}

impl SeedFixturesResponse {
    /// Total records inserted across all collections.
    #[must_use]
    pub fn total_inserted(&self) -> usize {
        self.collections.iter().map(|c| c.inserted).sum()
    }
}
