// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use animals_domain::{AnimalKind, fixtures};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{TransitionKind, TransitionResult};

/// Builds the create commands that seed an empty collection.
///
/// # Arguments
///
/// * `kind` - The collection to seed
#[must_use]
pub fn fixture_commands(kind: AnimalKind) -> Vec<Command> {
    fixtures(kind)
        .iter()
        .map(|fixture| Command::CreateAnimal {
            kind,
            name: fixture.name.to_string(),
            description: fixture.description.to_string(),
            group: fixture.group,
        })
        .collect()
}
