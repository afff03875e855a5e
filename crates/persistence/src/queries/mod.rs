// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database queries.
//!
//! Read paths only. One module per aggregate, mirroring `mutations/`.

pub mod aid;
pub mod audit;
pub mod board;
pub mod complaints;
pub mod messages;
pub mod operators;
pub mod sos;

pub use aid::{get_aid_request, list_aid_requests};
pub use audit::get_audit_timeline;
pub use board::{count_upvotes, get_post, list_comments, list_posts};
pub use complaints::{get_complaint, get_complaint_pk, list_complaints};
pub use messages::list_messages;
pub use operators::{
    get_operator_by_id, get_operator_by_login, get_session_by_token, list_operators,
    list_operators_by_role, verify_password,
};
pub use sos::list_sos_alerts;
