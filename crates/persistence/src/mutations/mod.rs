// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database mutations.
//!
//! Every write path lives here, one module per aggregate. Mutations take a
//! `SqliteConnection` and already-validated domain values; validation belongs
//! to the domain crate, not this layer.

pub mod aid;
pub mod audit;
pub mod board;
pub mod complaints;
pub mod messages;
pub mod operators;
pub mod sos;

pub use aid::{insert_aid_request, update_aid_request_status};
pub use audit::persist_audit_event;
pub use board::{insert_comment, insert_post, insert_upvote};
pub use complaints::{insert_complaint, update_complaint_priority, update_complaint_status};
pub use messages::append_message;
pub use operators::{
    create_operator, create_session, delete_expired_sessions, delete_session,
    delete_sessions_for_operator, disable_operator, enable_operator, update_last_login,
    update_password, update_session_activity,
};
pub use sos::insert_sos_alert;

use crate::error::PersistenceError;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Returns the current UTC time as an RFC 3339 string.
///
/// All row timestamps are written by this layer so that ordering
/// comparisons (pagination, session expiry) see a single clock.
pub(crate) fn now_rfc3339() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
