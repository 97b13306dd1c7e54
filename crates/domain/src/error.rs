// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Animal name is empty or invalid.
    InvalidName(String),
    /// Animal description is invalid.
    InvalidDescription(String),
    /// Taxonomic group string is not recognized.
    InvalidGroup(String),
    /// Animal kind string is not recognized.
    InvalidKind(String),
    /// Animal identifier is malformed.
    InvalidId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidGroup(group) => write!(f, "Invalid group: '{group}'"),
            Self::InvalidKind(kind) => write!(f, "Invalid animal kind: '{kind}'"),
            Self::InvalidId(id) => write!(f, "Invalid animal id: '{id}'"),
        }
    }
}

impl std::error::Error for DomainError {}
