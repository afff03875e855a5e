// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Complaint identifier does not match the `SHC-<year>-<4 digits>` format.
    InvalidComplaintId(String),
    /// Case status string is not a recognized status.
    InvalidCaseStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A status transition is not permitted by the case lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Priority string is not a recognized priority.
    InvalidPriority(String),
    /// Incident type string is not a recognized type.
    InvalidIncidentType(String),
    /// Emotional state string is not a recognized state.
    InvalidEmotionalState(String),
    /// Message sender string is not a recognized sender role.
    InvalidSender(String),
    /// A required field is missing or blank.
    MissingField(&'static str),
    /// Incident description is below the minimum length.
    DescriptionTooShort {
        /// The minimum number of characters required.
        min: usize,
        /// The number of characters supplied.
        len: usize,
    },
    /// Message body is empty after trimming.
    EmptyMessageBody,
    /// Post or comment content is empty after trimming.
    EmptyContent,
    /// A post cannot carry both an identified author and a pseudonym.
    ConflictingAuthorship,
    /// Aid request status string is not a recognized status.
    InvalidAidStatus(String),
    /// Latitude is outside [-90, 90] or longitude outside [-180, 180].
    InvalidCoordinates {
        /// The supplied latitude.
        latitude: f64,
        /// The supplied longitude.
        longitude: f64,
    },
    /// Failed to parse a date from its string representation.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidComplaintId(id) => {
                write!(f, "Invalid complaint id '{id}': expected SHC-<year>-<4 digits>")
            }
            Self::InvalidCaseStatus { status } => {
                write!(f, "Invalid case status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition case from {from} to {to}: {reason}")
            }
            Self::InvalidPriority(p) => write!(f, "Invalid priority: '{p}'"),
            Self::InvalidIncidentType(t) => write!(f, "Invalid incident type: '{t}'"),
            Self::InvalidEmotionalState(s) => write!(f, "Invalid emotional state: '{s}'"),
            Self::InvalidSender(s) => write!(f, "Invalid message sender: '{s}'"),
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::DescriptionTooShort { min, len } => {
                write!(
                    f,
                    "Incident description must be at least {min} characters, got {len}"
                )
            }
            Self::EmptyMessageBody => write!(f, "Message body cannot be empty"),
            Self::EmptyContent => write!(f, "Content cannot be empty"),
            Self::ConflictingAuthorship => {
                write!(f, "A post cannot have both an identified author and a pseudonym")
            }
            Self::InvalidAidStatus(s) => write!(f, "Invalid aid request status: '{s}'"),
            Self::InvalidCoordinates {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Invalid coordinates: latitude {latitude}, longitude {longitude}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
