// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use animals_domain::{AnimalId, AnimalKind, Group};

/// A command represents client intent as data only.
///
/// Commands are the only way to request changes to animal records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new animal in the collection of `kind`.
    CreateAnimal {
        /// The collection the animal belongs to.
        kind: AnimalKind,
        /// The animal's name.
        name: String,
        /// The animal's description.
        description: String,
        /// The animal's taxonomic group.
        group: Group,
    },
    /// Replace the mutable fields of an existing animal.
    UpdateAnimal {
        /// The identifier of the animal to update.
        id: AnimalId,
        /// The collection the animal is addressed through.
        kind: AnimalKind,
        /// The new name.
        name: String,
        /// The new description.
        description: String,
        /// The new taxonomic group.
        group: Group,
    },
}
