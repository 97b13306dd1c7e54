// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, apply, fixture_commands};
use animals_domain::{AnimalKind, fixtures};

#[test]
fn test_fixture_commands_match_fixtures() {
    for kind in AnimalKind::all() {
        let commands: Vec<Command> = fixture_commands(kind);
        assert_eq!(commands.len(), fixtures(kind).len());
    }
}

#[test]
fn test_fixture_commands_target_their_collection() {
    for command in fixture_commands(AnimalKind::Arachnid) {
        match command {
            Command::CreateAnimal { kind, .. } => assert_eq!(kind, AnimalKind::Arachnid),
            Command::UpdateAnimal { .. } => panic!("fixtures must only create"),
        }
    }
}

#[test]
fn test_fixture_commands_apply_cleanly() {
    for kind in AnimalKind::all() {
        for command in fixture_commands(kind) {
            let result: TransitionResult = apply(None, command).unwrap();
            assert_eq!(result.animal.kind(), kind);
        }
    }
}
