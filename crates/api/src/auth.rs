// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use caseline_audit::Actor;
use caseline_persistence::{OperatorData, Persistence, PersistenceError, SessionData};
use time::{Duration, OffsetDateTime};
use time::format_description::well_known::Rfc3339;

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// Roles apply only to operators, never to people filing complaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: operators with account-management authority.
    ///
    /// Admins may additionally:
    /// - create, disable, and enable operator accounts
    /// - list operator accounts
    Admin,
    /// Officer role: operators who triage complaint cases.
    ///
    /// Officers may:
    /// - view the case dashboard
    /// - update case status and priority
    /// - reply on case message threads
    /// - view SOS alerts and aid requests
    Officer,
    /// Counsellor role: support staff listed in the public directory.
    Counsellor,
    /// Lawyer role: legal aid staff listed in the public directory.
    Lawyer,
}

impl Role {
    /// Returns the canonical string form, as stored in the operators table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Officer => "Officer",
            Self::Counsellor => "Counsellor",
            Self::Lawyer => "Lawyer",
        }
    }

    /// Parses a stored role string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(Self::Admin),
            "Officer" => Some(Self::Officer),
            "Counsellor" => Some(Self::Counsellor),
            "Lawyer" => Some(Self::Lawyer),
            _ => None,
        }
    }

    /// Lowercase form used as the audit actor type.
    #[must_use]
    pub const fn audit_type(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Officer => "officer",
            Self::Counsellor => "counsellor",
            Self::Lawyer => "lawyer",
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an operator who has been authenticated and has
/// permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor (operator login name).
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute triage
    /// actions to the authenticated operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.audit_type()))
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_triage(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::Officer => Ok(()),
            Role::Counsellor | Role::Lawyer => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Officer"),
            }),
        }
    }

    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Officer | Role::Counsellor | Role::Lawyer => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if an actor may view the triage dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_view_dashboard(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "view_dashboard")
    }

    /// Checks if an actor may update a case status.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_update_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "update_status")
    }

    /// Checks if an actor may update a case priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_update_priority(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "update_priority")
    }

    /// Checks if an actor may reply on a case message thread as an officer.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_officer_message(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "officer_message")
    }

    /// Checks if an actor may view a case audit timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_view_timeline(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "view_timeline")
    }

    /// Checks if an actor may view SOS alerts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_view_sos_alerts(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "view_sos_alerts")
    }

    /// Checks if an actor may view or update aid requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Officer or Admin role.
    pub fn authorize_manage_aid_requests(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_triage(actor, "manage_aid_requests")
    }

    /// Checks if an actor may manage operator accounts.
    ///
    /// Only Admin actors may create, disable, enable, or list operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_operators(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "manage_operators")
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an operator and creates a session.
    ///
    /// The password is checked against the stored bcrypt hash. A failed
    /// lookup and a failed password check produce the same error reason so
    /// login responses do not reveal which login names exist.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The operator login name
    /// * `password` - The plaintext password to verify
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &mut Persistence,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = persistence
            .get_operator_by_login(login_name)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid login name or password"),
            })?;

        let password_matches: bool = persistence
            .verify_password(password, &operator.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Password verification error: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid login name or password"),
            });
        }

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let role: Role =
            Role::parse(&operator.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", operator.role),
            })?;

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String =
            expires_at
                .format(&Rfc3339)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Failed to format expiration time: {e}"),
                })?;

        persistence
            .create_session(&session_token, operator.operator_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(operator.operator_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.login_name.clone(), role);

        Ok((session_token, authenticated_actor, operator))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, OperatorData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(&session.expires_at, &Rfc3339)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let operator: OperatorData = persistence
            .get_operator_by_id(session.operator_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Operator not found"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let role: Role =
            Role::parse(&operator.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", operator.role),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.login_name.clone(), role);

        Ok((authenticated_actor, operator))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates a session token.
    ///
    /// Combines a nanosecond timestamp with random material so two logins
    /// in the same instant still get distinct tokens.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionNotFound(msg) => AuthError::AuthenticationFailed {
                reason: msg,
            },
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn actor(role: Role) -> AuthenticatedActor {
        AuthenticatedActor::new(String::from("OFFICER.RILEY"), role)
    }

    #[test]
    fn test_role_round_trips_through_storage_form() {
        for role in [Role::Admin, Role::Officer, Role::Counsellor, Role::Lawyer] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Reporter"), None);
    }

    #[test]
    fn test_triage_actions_require_officer_or_admin() {
        assert!(AuthorizationService::authorize_update_status(&actor(Role::Officer)).is_ok());
        assert!(AuthorizationService::authorize_update_status(&actor(Role::Admin)).is_ok());

        let err = AuthorizationService::authorize_update_status(&actor(Role::Counsellor))
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::Unauthorized {
                action: String::from("update_status"),
                required_role: String::from("Officer"),
            }
        );
    }

    #[test]
    fn test_operator_management_requires_admin() {
        assert!(AuthorizationService::authorize_manage_operators(&actor(Role::Admin)).is_ok());

        for role in [Role::Officer, Role::Counsellor, Role::Lawyer] {
            assert!(AuthorizationService::authorize_manage_operators(&actor(role)).is_err());
        }
    }

    #[test]
    fn test_audit_actor_uses_lowercase_role() {
        let audit_actor = actor(Role::Officer).to_audit_actor();
        assert_eq!(audit_actor.id, "OFFICER.RILEY");
        assert_eq!(audit_actor.actor_type, "officer");
    }
}
