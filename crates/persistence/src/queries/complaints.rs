// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint case queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::{ComplaintFilter, ComplaintPage, ComplaintRecord};
use crate::diesel_schema::complaints;
use crate::error::PersistenceError;

/// Diesel Queryable struct for complaint rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = complaints)]
struct ComplaintRow {
    complaint_pk: i64,
    complaint_id: String,
    is_anonymous: bool,
    user_id: Option<String>,
    full_name: Option<String>,
    submitter_email: Option<String>,
    incident_type: String,
    incident_description: String,
    incident_date: String,
    incident_time: Option<String>,
    incident_location: Option<String>,
    accused_name: Option<String>,
    accused_position: Option<String>,
    organization: Option<String>,
    witnesses_json: String,
    previous_incidents: Option<String>,
    emotional_state: Option<String>,
    need_immediate_help: bool,
    status: String,
    priority: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ComplaintRow {
    fn into_record(self) -> Result<ComplaintRecord, PersistenceError> {
        let witnesses: Vec<String> = serde_json::from_str(&self.witnesses_json)?;
        Ok(ComplaintRecord {
            complaint_pk: self.complaint_pk,
            complaint_id: self.complaint_id,
            is_anonymous: self.is_anonymous,
            user_id: self.user_id,
            full_name: self.full_name,
            submitter_email: self.submitter_email,
            incident_type: self.incident_type,
            incident_description: self.incident_description,
            incident_date: self.incident_date,
            incident_time: self.incident_time,
            incident_location: self.incident_location,
            accused_name: self.accused_name,
            accused_position: self.accused_position,
            organization: self.organization,
            witnesses,
            previous_incidents: self.previous_incidents,
            emotional_state: self.emotional_state,
            need_immediate_help: self.need_immediate_help,
            status: self.status,
            priority: self.priority,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Builds a boxed query applying the filter criteria (conjunction).
fn filtered(filter: &ComplaintFilter) -> complaints::BoxedQuery<'_, Sqlite> {
    let mut query = complaints::table.into_boxed();
    if let Some(status) = &filter.status {
        query = query.filter(complaints::status.eq(status));
    }
    if let Some(incident_type) = &filter.incident_type {
        query = query.filter(complaints::incident_type.eq(incident_type));
    }
    if let Some(priority) = &filter.priority {
        query = query.filter(complaints::priority.eq(priority));
    }
    if let Some(text_query) = &filter.text_query {
        // SQLite LIKE is case-insensitive for ASCII, matching the
        // dashboard's search semantics. LIKE wildcards in the query are
        // escaped so it stays a literal substring match.
        let escaped: String = text_query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern: String = format!("%{escaped}%");
        query = query.filter(
            complaints::complaint_id
                .like(pattern.clone())
                .escape('\\')
                .nullable()
                .or(complaints::submitter_email.like(pattern).escape('\\')),
        );
    }
    query
}

/// Looks up the internal row id for a tracking id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such complaint exists.
pub fn get_complaint_pk(
    conn: &mut SqliteConnection,
    complaint_id: &str,
) -> Result<Option<i64>, PersistenceError> {
    let result: Result<i64, diesel::result::Error> = complaints::table
        .filter(complaints::complaint_id.eq(complaint_id))
        .select(complaints::complaint_pk)
        .first(conn);

    match result {
        Ok(pk) => Ok(Some(pk)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a complaint by tracking id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such complaint exists.
pub fn get_complaint(
    conn: &mut SqliteConnection,
    complaint_id: &str,
) -> Result<Option<ComplaintRecord>, PersistenceError> {
    debug!("Looking up complaint by id: {}", complaint_id);

    let result: Result<ComplaintRow, diesel::result::Error> = complaints::table
        .filter(complaints::complaint_id.eq(complaint_id))
        .select(ComplaintRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_record()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists complaints for the officer dashboard, newest first.
///
/// `page` is 1-based. The returned page carries the total match count so
/// callers can compute page counts.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_complaints(
    conn: &mut SqliteConnection,
    filter: &ComplaintFilter,
    page: i64,
    page_size: i64,
) -> Result<ComplaintPage, PersistenceError> {
    debug!("Listing complaints, page {} (size {})", page, page_size);

    let total: i64 = filtered(filter).count().get_result(conn)?;

    let offset: i64 = (page.max(1) - 1) * page_size;
    // Newest first. Row ids are insertion-ordered, which avoids relying on
    // lexicographic comparison of timestamp strings.
    let rows: Vec<ComplaintRow> = filtered(filter)
        .order(complaints::complaint_pk.desc())
        .limit(page_size)
        .offset(offset)
        .select(ComplaintRow::as_select())
        .load(conn)?;

    let complaints: Vec<ComplaintRecord> = rows
        .into_iter()
        .map(ComplaintRow::into_record)
        .collect::<Result<_, _>>()?;

    Ok(ComplaintPage { complaints, total })
}
