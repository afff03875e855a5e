// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aid request mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::aid_requests;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_domain::{AidRequest, AidStatus};

/// Inserts a validated aid request.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_aid_request(
    conn: &mut SqliteConnection,
    request: &AidRequest,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;

    diesel::insert_into(aid_requests::table)
        .values((
            aid_requests::requester_name.eq(&request.requester_name),
            aid_requests::requester_email.eq(&request.requester_email),
            aid_requests::target_id.eq(&request.target_id),
            aid_requests::target_name.eq(&request.target_name),
            aid_requests::target_email.eq(&request.target_email),
            aid_requests::subject.eq(&request.subject),
            aid_requests::message.eq(&request.message),
            aid_requests::status.eq(request.status.as_str()),
            aid_requests::created_at.eq(&now),
            aid_requests::updated_at.eq(&now),
        ))
        .execute(conn)?;

    let request_id: i64 = get_last_insert_rowid(conn)?;
    info!(request_id, "Aid request created");

    Ok(request_id)
}

/// Updates the workflow status of an aid request.
///
/// Returns the number of rows updated (0 if the request does not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_aid_request_status(
    conn: &mut SqliteConnection,
    request_id: i64,
    status: AidStatus,
) -> Result<usize, PersistenceError> {
    let now: String = now_rfc3339()?;

    info!("Updating aid request {} status to {}", request_id, status);

    let rows_affected: usize = diesel::update(aid_requests::table)
        .filter(aid_requests::request_id.eq(request_id))
        .set((
            aid_requests::status.eq(status.as_str()),
            aid_requests::updated_at.eq(&now),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}
