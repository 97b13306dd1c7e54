// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use animals_domain::{AnimalKind, fixtures};

use animals_persistence::Persistence;

use super::helpers::{create_test_persistence, store_valid_animal};
use crate::{list_animals, seed_fixtures};

fn stored_count(persistence: &mut Persistence, kind: AnimalKind) -> usize {
    list_animals(persistence, kind).unwrap().len()
}

#[test]
fn test_seed_fills_every_empty_collection() {
    let mut persistence = create_test_persistence();

    let summary = seed_fixtures(&mut persistence).unwrap();

    assert_eq!(summary.collections.len(), AnimalKind::all().len());
    for kind in AnimalKind::all() {
        let listed = list_animals(&mut persistence, kind).unwrap();
        assert_eq!(listed.len(), fixtures(kind).len());
    }
    assert_eq!(summary.total_inserted(), 7 + 5 + 4);
}

#[test]
fn test_seed_is_idempotent() {
    let mut persistence = create_test_persistence();
    seed_fixtures(&mut persistence).unwrap();

    let second = seed_fixtures(&mut persistence).unwrap();

    assert_eq!(second.total_inserted(), 0);
    assert_eq!(stored_count(&mut persistence, AnimalKind::Cat), 7);
}

#[test]
fn test_seed_skips_populated_collection() {
    let mut persistence = create_test_persistence();
    store_valid_animal(&mut persistence, AnimalKind::Dog);

    let summary = seed_fixtures(&mut persistence).unwrap();

    let dogs = summary
        .collections
        .iter()
        .find(|c| c.resource == "dogs")
        .unwrap();
    assert_eq!(dogs.inserted, 0);
    assert_eq!(list_animals(&mut persistence, AnimalKind::Dog).unwrap().len(), 1);
    assert_eq!(stored_count(&mut persistence, AnimalKind::Cat), 7);
}

#[test]
fn test_seeded_fixtures_keep_their_order() {
    let mut persistence = create_test_persistence();
    seed_fixtures(&mut persistence).unwrap();

    let names: Vec<String> = list_animals(&mut persistence, AnimalKind::Arachnid)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();

    let expected: Vec<&str> = fixtures(AnimalKind::Arachnid)
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, expected);
}
