// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-case message threads.
//!
//! Messages are owned exclusively by their parent complaint and are
//! append-only: there is no edit or delete path anywhere in the system.
//! Order is append order.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role of the party who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// A case officer replying through the triage dashboard.
    Officer,
    /// The identified reporter of the complaint.
    Complainee,
    /// An anonymous reporter using the public tracking view.
    Public,
}

impl MessageSender {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::Complainee => "complainee",
            Self::Public => "public",
        }
    }

    /// The display name used when the sender did not supply one.
    #[must_use]
    pub const fn default_sender_name(&self) -> &'static str {
        match self {
            Self::Officer => "Officer",
            Self::Complainee | Self::Public => "Anonymous",
        }
    }
}

impl FromStr for MessageSender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "officer" => Ok(Self::Officer),
            "complainee" => Ok(Self::Complainee),
            "public" => Ok(Self::Public),
            _ => Err(DomainError::InvalidSender(s.to_string())),
        }
    }
}

impl std::fmt::Display for MessageSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a case thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    pub sender: MessageSender,
    /// Display name of the writer.
    pub sender_name: String,
    /// The message text.
    pub body: String,
    /// Server-assigned timestamp (ISO 8601).
    pub timestamp: String,
}

/// Validates a message body and resolves the sender name.
///
/// Returns the trimmed body and the name to store: the supplied name if
/// present and non-blank, otherwise the sender role's default.
///
/// # Errors
///
/// Returns `DomainError::EmptyMessageBody` if the body is empty after
/// trimming.
pub fn validate_message(
    sender: MessageSender,
    sender_name: Option<&str>,
    body: &str,
) -> Result<(String, String), DomainError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(DomainError::EmptyMessageBody);
    }

    let name = match sender_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => sender.default_sender_name().to_string(),
    };

    Ok((name, body.to_string()))
}
