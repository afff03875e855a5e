// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case thread message mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::case_messages;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_domain::MessageSender;

/// Appends a message to a case thread.
///
/// The thread is append-only: rows are only ever inserted, and thread order
/// is insertion order (`message_id`). The caller resolves `complaint_pk`
/// first so a missing case fails before anything is written.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_message(
    conn: &mut SqliteConnection,
    complaint_pk: i64,
    sender: MessageSender,
    sender_name: &str,
    body: &str,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;

    diesel::insert_into(case_messages::table)
        .values((
            case_messages::complaint_pk.eq(complaint_pk),
            case_messages::sender.eq(sender.as_str()),
            case_messages::sender_name.eq(sender_name),
            case_messages::body.eq(body),
            case_messages::created_at.eq(&now),
        ))
        .execute(conn)?;

    let message_id: i64 = get_last_insert_rowid(conn)?;
    info!(complaint_pk, message_id, "Appended case message");

    Ok(message_id)
}
