// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row-level data structures returned by the persistence layer.
//!
//! These are deliberately string-typed: the persistence layer stores and
//! retrieves what was written, and callers parse into domain types where
//! stronger guarantees are needed.

use serde::{Deserialize, Serialize};

/// A stored complaint case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_pk: i64,
    pub complaint_id: String,
    pub is_anonymous: bool,
    pub user_id: Option<String>,
    pub full_name: Option<String>,
    pub submitter_email: Option<String>,
    pub incident_type: String,
    pub incident_description: String,
    pub incident_date: String,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    pub accused_name: Option<String>,
    pub accused_position: Option<String>,
    pub organization: Option<String>,
    pub witnesses: Vec<String>,
    pub previous_incidents: Option<String>,
    pub emotional_state: Option<String>,
    pub need_immediate_help: bool,
    pub status: String,
    pub priority: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A single page of complaint records plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintPage {
    pub complaints: Vec<ComplaintRecord>,
    pub total: i64,
}

/// Filter criteria for officer dashboard listings.
///
/// All provided criteria must match (conjunction). Absent criteria
/// match everything. `text_query` is a case-insensitive substring match
/// against the tracking id or the submitter email (disjunction between
/// the two, conjunction with the rest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<String>,
    pub incident_type: Option<String>,
    pub priority: Option<String>,
    pub text_query: Option<String>,
}

/// A stored case thread message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub message_id: i64,
    pub sender: String,
    pub sender_name: String,
    pub body: String,
    pub created_at: String,
}

/// A stored community board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub post_id: i64,
    pub content: String,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub pseudonym: Option<String>,
    pub is_public: bool,
    pub created_at: String,
}

/// A board post together with its upvote and comment counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithCounts {
    pub post: PostRecord,
    pub upvote_count: i64,
    pub comment_count: i64,
}

/// A stored comment on a board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub comment_id: i64,
    pub post_id: i64,
    pub content: String,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub pseudonym: Option<String>,
    pub created_at: String,
}

/// A stored aid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRequestRecord {
    pub request_id: i64,
    pub requester_name: String,
    pub requester_email: String,
    pub target_id: String,
    pub target_name: String,
    pub target_email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A stored SOS alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlertRecord {
    pub alert_id: i64,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_link: String,
    pub message: String,
    pub created_at: String,
}

/// A stored operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorData {
    pub operator_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_disabled: bool,
    pub created_at: String,
    pub disabled_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// A stored operator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub operator_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// A stored audit event, as read back for a case timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventRecord {
    pub event_id: i64,
    pub complaint_id: String,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before_snapshot: String,
    pub after_snapshot: String,
    pub created_at: String,
}
