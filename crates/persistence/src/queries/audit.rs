// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::AuditEventRecord;
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    event_id: i64,
    complaint_id: String,
    actor_id: String,
    actor_type: String,
    cause_id: String,
    cause_description: String,
    action_name: String,
    action_details: Option<String>,
    before_snapshot: String,
    after_snapshot: String,
    created_at: String,
}

/// Retrieves the ordered audit timeline for a case.
///
/// Events are returned oldest first, which is also insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_audit_timeline(
    conn: &mut SqliteConnection,
    complaint_pk: i64,
) -> Result<Vec<AuditEventRecord>, PersistenceError> {
    debug!(complaint_pk, "Loading audit timeline");

    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::complaint_pk.eq(complaint_pk))
        .order_by(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| AuditEventRecord {
            event_id: row.event_id,
            complaint_id: row.complaint_id,
            actor_id: row.actor_id,
            actor_type: row.actor_type,
            cause_id: row.cause_id,
            cause_description: row.cause_description,
            action_name: row.action_name,
            action_details: row.action_details,
            before_snapshot: row.before_snapshot,
            after_snapshot: row.after_snapshot,
            created_at: row.created_at,
        })
        .collect())
}
