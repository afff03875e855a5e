// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Community discussion board types.
//!
//! Posts and comments carry either an identified author or a pseudonym,
//! never both. Upvotes are keyed by voter (user id or anonymous id) and a
//! voter may upvote a post at most once.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// An identified post or comment author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Opaque user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
}

/// Who wrote a post or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authorship {
    /// Written under a real identity.
    Identified(Author),
    /// Written under a generated pseudonym, e.g. `BraveOtter123`.
    Pseudonymous {
        /// The pseudonym shown to readers.
        pseudonym: String,
    },
}

impl Authorship {
    /// The display name shown on the board.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Identified(author) => &author.name,
            Self::Pseudonymous { pseudonym } => pseudonym,
        }
    }
}

/// Validates post or comment content.
///
/// # Errors
///
/// Returns `DomainError::EmptyContent` if the content is blank.
pub fn validate_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::EmptyContent);
    }
    Ok(content.to_string())
}

/// Resolves authorship from intake fields.
///
/// An identified author and a pseudonym are mutually exclusive. When neither
/// is supplied the caller is expected to generate a pseudonym first.
///
/// # Errors
///
/// Returns `DomainError::ConflictingAuthorship` if both an author and a
/// pseudonym are supplied, or `DomainError::MissingField` if neither is.
pub fn resolve_authorship(
    author: Option<Author>,
    pseudonym: Option<String>,
) -> Result<Authorship, DomainError> {
    match (author, pseudonym) {
        (Some(_), Some(_)) => Err(DomainError::ConflictingAuthorship),
        (Some(author), None) => Ok(Authorship::Identified(author)),
        (None, Some(pseudonym)) => Ok(Authorship::Pseudonymous { pseudonym }),
        (None, None) => Err(DomainError::MissingField("author or pseudonym")),
    }
}
