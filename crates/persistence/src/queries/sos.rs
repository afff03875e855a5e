// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SOS alert queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::SosAlertRecord;
use crate::diesel_schema::sos_alerts;
use crate::error::PersistenceError;

/// Diesel Queryable struct for SOS alert rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sos_alerts)]
struct SosAlertRow {
    alert_id: i64,
    user_id: Option<String>,
    name: String,
    email: String,
    latitude: f64,
    longitude: f64,
    location_link: String,
    message: String,
    created_at: String,
}

/// Lists all SOS alerts, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_sos_alerts(
    conn: &mut SqliteConnection,
) -> Result<Vec<SosAlertRecord>, PersistenceError> {
    let rows: Vec<SosAlertRow> = sos_alerts::table
        .order_by(sos_alerts::alert_id.desc())
        .select(SosAlertRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| SosAlertRecord {
            alert_id: row.alert_id,
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            latitude: row.latitude,
            longitude: row.longitude,
            location_link: row.location_link,
            message: row.message,
            created_at: row.created_at,
        })
        .collect())
}
