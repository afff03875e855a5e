// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SOS alert mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::warn;

use crate::diesel_schema::sos_alerts;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_domain::SosAlert;

/// Inserts a validated SOS alert.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_sos_alert(
    conn: &mut SqliteConnection,
    alert: &SosAlert,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;

    diesel::insert_into(sos_alerts::table)
        .values((
            sos_alerts::user_id.eq(&alert.user_id),
            sos_alerts::name.eq(&alert.name),
            sos_alerts::email.eq(&alert.email),
            sos_alerts::latitude.eq(alert.latitude),
            sos_alerts::longitude.eq(alert.longitude),
            sos_alerts::location_link.eq(&alert.location_link),
            sos_alerts::message.eq(&alert.message),
            sos_alerts::created_at.eq(&now),
        ))
        .execute(conn)?;

    let alert_id: i64 = get_last_insert_rowid(conn)?;

    // An SOS alert is the one record worth shouting about in the log.
    warn!(
        alert_id,
        latitude = alert.latitude,
        longitude = alert.longitude,
        "SOS alert recorded"
    );

    Ok(alert_id)
}
