// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case thread message queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::MessageRecord;
use crate::diesel_schema::case_messages;
use crate::error::PersistenceError;

/// Diesel Queryable struct for message rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = case_messages)]
struct MessageRow {
    message_id: i64,
    sender: String,
    sender_name: String,
    body: String,
    created_at: String,
}

/// Lists the message thread for a case, in append order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_messages(
    conn: &mut SqliteConnection,
    complaint_pk: i64,
) -> Result<Vec<MessageRecord>, PersistenceError> {
    let rows: Vec<MessageRow> = case_messages::table
        .filter(case_messages::complaint_pk.eq(complaint_pk))
        .order_by(case_messages::message_id.asc())
        .select(MessageRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| MessageRecord {
            message_id: row.message_id,
            sender: row.sender,
            sender_name: row.sender_name,
            body: row.body,
            created_at: row.created_at,
        })
        .collect())
}
