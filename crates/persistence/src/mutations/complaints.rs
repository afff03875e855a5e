// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint case mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::complaints;
use crate::error::{PersistenceError, is_unique_violation};
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_domain::{CaseStatus, Complaint, Priority};

/// Inserts a validated complaint.
///
/// The UNIQUE constraint on `complaint_id` is the authority on tracking-id
/// collisions: a violation surfaces as `DuplicateComplaintId` so the caller
/// can regenerate the id and retry.
///
/// # Errors
///
/// Returns `DuplicateComplaintId` if the tracking id is already taken, or
/// another error if the insert fails.
pub fn insert_complaint(
    conn: &mut SqliteConnection,
    complaint: &Complaint,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;
    let witnesses_json: String = serde_json::to_string(&complaint.witnesses)?;

    info!(
        "Inserting complaint {} (anonymous: {})",
        complaint.complaint_id, complaint.is_anonymous
    );

    let result = diesel::insert_into(complaints::table)
        .values((
            complaints::complaint_id.eq(complaint.complaint_id.value()),
            complaints::is_anonymous.eq(complaint.is_anonymous),
            complaints::user_id.eq(&complaint.submitter.user_id),
            complaints::full_name.eq(&complaint.submitter.full_name),
            complaints::submitter_email.eq(&complaint.submitter.email),
            complaints::incident_type.eq(complaint.incident_type.as_str()),
            complaints::incident_description.eq(&complaint.incident_description),
            complaints::incident_date.eq(&complaint.incident_date),
            complaints::incident_time.eq(&complaint.incident_time),
            complaints::incident_location.eq(&complaint.incident_location),
            complaints::accused_name.eq(&complaint.accused_name),
            complaints::accused_position.eq(&complaint.accused_position),
            complaints::organization.eq(&complaint.organization),
            complaints::witnesses_json.eq(&witnesses_json),
            complaints::previous_incidents.eq(&complaint.previous_incidents),
            complaints::emotional_state.eq(complaint.emotional_state.map(|s| s.as_str())),
            complaints::need_immediate_help.eq(complaint.need_immediate_help),
            complaints::status.eq(complaint.status.as_str()),
            complaints::priority.eq(complaint.priority.map(|p| p.as_str())),
            complaints::created_at.eq(&now),
            complaints::updated_at.eq(&now),
        ))
        .execute(conn);

    match result {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(PersistenceError::DuplicateComplaintId(
                complaint.complaint_id.value().to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    let complaint_pk: i64 = get_last_insert_rowid(conn)?;
    info!(complaint_pk, "Complaint inserted");

    Ok(complaint_pk)
}

/// Compare-and-set status update.
///
/// The `WHERE` clause pins the expected current status, so a transition that
/// lost a race with another officer updates zero rows instead of skipping a
/// state. Returns the number of rows updated (0 or 1).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_complaint_status(
    conn: &mut SqliteConnection,
    complaint_id: &str,
    from: CaseStatus,
    to: CaseStatus,
) -> Result<usize, PersistenceError> {
    let now: String = now_rfc3339()?;

    info!(
        "Updating complaint {} status: {} -> {}",
        complaint_id, from, to
    );

    let rows_affected: usize = diesel::update(complaints::table)
        .filter(complaints::complaint_id.eq(complaint_id))
        .filter(complaints::status.eq(from.as_str()))
        .set((
            complaints::status.eq(to.as_str()),
            complaints::updated_at.eq(&now),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}

/// Sets the triage priority of a complaint. Last writer wins.
///
/// Returns the number of rows updated (0 if the complaint does not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_complaint_priority(
    conn: &mut SqliteConnection,
    complaint_id: &str,
    priority: Priority,
) -> Result<usize, PersistenceError> {
    let now: String = now_rfc3339()?;

    info!(
        "Updating complaint {} priority to {}",
        complaint_id, priority
    );

    let rows_affected: usize = diesel::update(complaints::table)
        .filter(complaints::complaint_id.eq(complaint_id))
        .set((
            complaints::priority.eq(Some(priority.as_str())),
            complaints::updated_at.eq(&now),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}
