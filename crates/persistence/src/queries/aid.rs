// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aid request queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::AidRequestRecord;
use crate::diesel_schema::aid_requests;
use crate::error::PersistenceError;

/// Diesel Queryable struct for aid request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = aid_requests)]
struct AidRequestRow {
    request_id: i64,
    requester_name: String,
    requester_email: String,
    target_id: String,
    target_name: String,
    target_email: String,
    subject: String,
    message: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl From<AidRequestRow> for AidRequestRecord {
    fn from(row: AidRequestRow) -> Self {
        Self {
            request_id: row.request_id,
            requester_name: row.requester_name,
            requester_email: row.requester_email,
            target_id: row.target_id,
            target_name: row.target_name,
            target_email: row.target_email,
            subject: row.subject,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Retrieves an aid request by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such request exists.
pub fn get_aid_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<AidRequestRecord>, PersistenceError> {
    let result: Result<AidRequestRow, diesel::result::Error> = aid_requests::table
        .filter(aid_requests::request_id.eq(request_id))
        .select(AidRequestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all aid requests, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_aid_requests(
    conn: &mut SqliteConnection,
) -> Result<Vec<AidRequestRecord>, PersistenceError> {
    let rows: Vec<AidRequestRow> = aid_requests::table
        .order_by(aid_requests::request_id.desc())
        .select(AidRequestRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
