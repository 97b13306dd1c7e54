// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records every collection starts with.

use crate::types::{AnimalKind, Group};

/// A pre-seeded animal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub description: &'static str,
    pub group: Group,
}

const fn fixture(name: &'static str, description: &'static str, group: Group) -> Fixture {
    Fixture {
        name,
        description,
        group,
    }
}

const CATS: [Fixture; 7] = [
    fixture("Tom", "Bob cat", Group::Mammal),
    fixture("Jerry", "Mouse cat", Group::Mammal),
    fixture("Bill", "Lazy cat", Group::Mammal),
    fixture("Garfield", "Lasagne lover", Group::Mammal),
    fixture("Silvester", "Silvester", Group::Mammal),
    fixture("Smokey", "Grey tabby", Group::Mammal),
    fixture("Tigger", "Bouncy orange cat", Group::Mammal),
];

const DOGS: [Fixture; 5] = [
    fixture("Rex", "German shepherd", Group::Mammal),
    fixture("Lassie", "Rough collie", Group::Mammal),
    fixture("Snoopy", "Beagle", Group::Mammal),
    fixture("Odie", "Yellow terrier", Group::Mammal),
    fixture("Scooby", "Great dane", Group::Mammal),
];

const ARACHNIDS: [Fixture; 4] = [
    fixture("Charlotte", "Barn spider", Group::Invertebrate),
    fixture("Aragog", "Acromantula", Group::Invertebrate),
    fixture("Shelob", "Giant spider", Group::Invertebrate),
    fixture("Scorpius", "Emperor scorpion", Group::Invertebrate),
];

/// Returns the records a fresh collection of `kind` is seeded with.
#[must_use]
pub const fn fixtures(kind: AnimalKind) -> &'static [Fixture] {
    match kind {
        AnimalKind::Cat => &CATS,
        AnimalKind::Dog => &DOGS,
        AnimalKind::Arachnid => &ARACHNIDS,
    }
}
