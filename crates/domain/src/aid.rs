// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aid requests from reporters to support staff (counsellors and lawyers).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle of an aid request, advanced by officers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AidStatus {
    /// Submitted, staff member not yet contacted.
    Pending,
    /// The staff member has been put in contact with the requester.
    Contacted,
    /// Handled and closed.
    Closed,
}

impl AidStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Contacted => "CONTACTED",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for AidStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONTACTED" => Ok(Self::Contacted),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidAidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated aid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRequest {
    /// Name of the requester.
    pub requester_name: String,
    /// Contact email of the requester.
    pub requester_email: String,
    /// Operator id of the targeted staff member.
    pub target_id: String,
    /// Display name of the targeted staff member.
    pub target_name: String,
    /// Email of the targeted staff member.
    pub target_email: String,
    /// Subject line.
    pub subject: String,
    /// Request body.
    pub message: String,
    /// Current handling status.
    pub status: AidStatus,
}

impl AidRequest {
    /// Validates intake fields into an aid request with `Pending` status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` for the first blank required field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        requester_name: &str,
        requester_email: &str,
        target_id: &str,
        target_name: &str,
        target_email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, DomainError> {
        let require = |value: &str, field: &'static str| -> Result<String, DomainError> {
            let value = value.trim();
            if value.is_empty() {
                return Err(DomainError::MissingField(field));
            }
            Ok(value.to_string())
        };

        Ok(Self {
            requester_name: require(requester_name, "requester_name")?,
            requester_email: require(requester_email, "requester_email")?,
            target_id: require(target_id, "target_id")?,
            target_name: require(target_name, "target_name")?,
            target_email: require(target_email, "target_email")?,
            subject: require(subject, "subject")?,
            message: require(message, "message")?,
            status: AidStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let request = AidRequest::new(
            "Alex",
            "alex@example.org",
            "op-3",
            "Dr. Chen",
            "chen@example.org",
            "Need counselling",
            "I would like to talk to someone.",
        )
        .unwrap();

        assert_eq!(request.status, AidStatus::Pending);
    }

    #[test]
    fn test_blank_subject_rejected() {
        let result = AidRequest::new(
            "Alex",
            "alex@example.org",
            "op-3",
            "Dr. Chen",
            "chen@example.org",
            " ",
            "body",
        );

        assert_eq!(result, Err(DomainError::MissingField("subject")));
    }

    #[test]
    fn test_aid_status_round_trip() {
        for s in [AidStatus::Pending, AidStatus::Contacted, AidStatus::Closed] {
            assert_eq!(s.as_str().parse::<AidStatus>().unwrap(), s);
        }
    }
}
