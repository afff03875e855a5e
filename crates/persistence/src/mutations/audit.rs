// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event mutations.
//!
//! Audit events are insert-only. There is deliberately no update or delete
//! path for the `audit_events` table.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_audit::AuditEvent;

/// Persists an audit event for a complaint.
///
/// The caller resolves `complaint_pk` (the event's `complaint_id` must
/// name an existing case; the foreign key enforces it).
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    complaint_pk: i64,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::complaint_pk.eq(complaint_pk),
            audit_events::complaint_id.eq(event.complaint_id.value()),
            audit_events::actor_id.eq(&event.actor.id),
            audit_events::actor_type.eq(&event.actor.actor_type),
            audit_events::cause_id.eq(&event.cause.id),
            audit_events::cause_description.eq(&event.cause.description),
            audit_events::action_name.eq(&event.action.name),
            audit_events::action_details.eq(&event.action.details),
            audit_events::before_snapshot.eq(&event.before.data),
            audit_events::after_snapshot.eq(&event.after.data),
            audit_events::created_at.eq(&now),
        ))
        .execute(conn)?;

    let event_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        event_id,
        action = %event.action.name,
        "Audit event persisted"
    );

    Ok(event_id)
}
