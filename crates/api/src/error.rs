// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use caseline_domain::DomainError;
use caseline_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The case changed underneath the caller (lost update race).
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidComplaintId(id) => ApiError::InvalidInput {
            field: String::from("complaint_id"),
            message: format!("Invalid complaint id '{id}': expected SHC-<year>-<4 digits>"),
        },
        DomainError::InvalidCaseStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid case status: '{status}'"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!("Cannot transition case from {from} to {to}: {reason}"),
        },
        DomainError::InvalidPriority(p) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("Invalid priority: '{p}'"),
        },
        DomainError::InvalidIncidentType(t) => ApiError::InvalidInput {
            field: String::from("incident_type"),
            message: format!("Invalid incident type: '{t}'"),
        },
        DomainError::InvalidEmotionalState(s) => ApiError::InvalidInput {
            field: String::from("emotional_state"),
            message: format!("Invalid emotional state: '{s}'"),
        },
        DomainError::InvalidSender(s) => ApiError::InvalidInput {
            field: String::from("sender"),
            message: format!("Invalid message sender: '{s}'"),
        },
        DomainError::MissingField(field) => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Missing required field: {field}"),
        },
        DomainError::DescriptionTooShort { min, len } => ApiError::InvalidInput {
            field: String::from("incident_description"),
            message: format!("Incident description must be at least {min} characters, got {len}"),
        },
        DomainError::EmptyMessageBody => ApiError::InvalidInput {
            field: String::from("message"),
            message: String::from("Message body cannot be empty"),
        },
        DomainError::EmptyContent => ApiError::InvalidInput {
            field: String::from("content"),
            message: String::from("Content cannot be empty"),
        },
        DomainError::ConflictingAuthorship => ApiError::InvalidInput {
            field: String::from("author"),
            message: String::from("A post cannot have both an identified author and a pseudonym"),
        },
        DomainError::InvalidAidStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid aid request status: '{s}'"),
        },
        DomainError::InvalidCoordinates {
            latitude,
            longitude,
        } => ApiError::InvalidInput {
            field: String::from("coordinates"),
            message: format!("Invalid coordinates: latitude {latitude}, longitude {longitude}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found variants become `ResourceNotFound`; everything else is an
/// internal error so storage details never leak through the API contract.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ComplaintNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Complaint"),
            message: format!("Complaint {id} does not exist"),
        },
        PersistenceError::PostNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Post"),
            message: format!("Post {id} does not exist"),
        },
        PersistenceError::AidRequestNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Aid request"),
            message: format!("Aid request {id} does not exist"),
        },
        PersistenceError::OperatorNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: msg,
        },
        PersistenceError::AlreadyUpvoted { post_id, .. } => ApiError::DomainRuleViolation {
            rule: String::from("single_upvote"),
            message: format!("Post {post_id} was already upvoted by this voter"),
        },
        PersistenceError::DuplicateComplaintId(id) => ApiError::Internal {
            message: format!("Complaint id collision was not resolved: {id}"),
        },
        other => ApiError::Internal {
            message: format!("Persistence error: {other}"),
        },
    }
}
