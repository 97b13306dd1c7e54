// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use animals_domain::Animal;

/// What a transition did to the stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// A new record must be inserted.
    Created,
    /// An existing record must be overwritten.
    Updated,
}

/// The result of applying a command.
///
/// The animal always carries an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The record after the transition.
    pub animal: Animal,
    /// Whether the record is new or replaces an existing one.
    pub kind: TransitionKind,
}
