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
    clippy::all
)]

use caseline_domain::ComplaintId;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// In practice this is an authenticated officer or admin operating the
/// triage dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor (operator login name).
    pub id: String,
    /// The type of actor (e.g., "officer", "admin").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a state change was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`UpdateStatus`", "`UpdatePriority`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of case state at a point in time.
///
/// Captures the triage-relevant fields (status, priority) as a compact
/// string so a timeline reader can see what changed without replaying
/// the full document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a triage state change.
///
/// Every successful officer triage action must produce exactly one audit
/// event. Audit events are immutable once created and capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
/// - The complaint the change applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The complaint this event is scoped to.
    pub complaint_id: ComplaintId,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `complaint_id` - The complaint the change applies to
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        complaint_id: ComplaintId,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            complaint_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_complaint_id() -> ComplaintId {
        match ComplaintId::new(2026, 1234) {
            Ok(id) => id,
            Err(e) => panic!("Failed to build complaint id: {e}"),
        }
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("officer-7"), String::from("officer"));

        assert_eq!(actor.id, "officer-7");
        assert_eq!(actor.actor_type, "officer");
    }

    #[test]
    fn test_cause_creation_requires_all_fields() {
        let cause: Cause = Cause::new(String::from("req-456"), String::from("Triage request"));

        assert_eq!(cause.id, "req-456");
        assert_eq!(cause.description, "Triage request");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("UpdateStatus"),
            Some(String::from("PENDING -> IN_PROGRESS")),
        );

        assert_eq!(action.name, "UpdateStatus");
        assert_eq!(action.details, Some(String::from("PENDING -> IN_PROGRESS")));
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("officer-7"), String::from("officer"));
        let cause: Cause = Cause::new(String::from("req-456"), String::from("Triage request"));
        let action: Action = Action::new(String::from("UpdateStatus"), None);
        let before: StateSnapshot = StateSnapshot::new(String::from("status=PENDING"));
        let after: StateSnapshot = StateSnapshot::new(String::from("status=IN_PROGRESS"));

        let event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action.clone(),
            before.clone(),
            after.clone(),
            test_complaint_id(),
        );

        assert_eq!(event.actor, actor);
        assert_eq!(event.cause, cause);
        assert_eq!(event.action, action);
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
        assert_eq!(event.complaint_id, test_complaint_id());
    }

    #[test]
    fn test_audit_event_equality() {
        let make = || {
            AuditEvent::new(
                Actor::new(String::from("officer-7"), String::from("officer")),
                Cause::new(String::from("req-456"), String::from("Triage request")),
                Action::new(String::from("UpdatePriority"), None),
                StateSnapshot::new(String::from("priority=")),
                StateSnapshot::new(String::from("priority=HIGH")),
                test_complaint_id(),
            )
        };

        assert_eq!(make(), make());
    }
}
