// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Identity fields never appear on public views of anonymous
//! complaints; that stripping happens at intake, so the DTOs here simply
//! mirror what was stored.

use caseline_persistence::{
    AidRequestRecord, AuditEventRecord, CommentRecord, ComplaintRecord, MessageRecord,
    OperatorData, PostWithCounts, SosAlertRecord,
};
use serde::{Deserialize, Serialize};

fn default_page() -> i64 {
    1
}

/// API request to submit a new complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitComplaintRequest {
    /// Whether the reporter asked to stay anonymous.
    #[serde(default)]
    pub is_anonymous: bool,
    /// Opaque identifier of the submitting user, ignored when anonymous.
    pub user_id: Option<String>,
    /// The submitter's full name, ignored when anonymous.
    pub full_name: Option<String>,
    /// The submitter's contact email, ignored when anonymous.
    pub email: Option<String>,
    /// Incident classification (VERBAL, PHYSICAL, ONLINE, WORKPLACE, OTHER).
    pub incident_type: Option<String>,
    /// Free-text incident description.
    pub incident_description: Option<String>,
    /// Date of the incident (ISO 8601 date).
    pub incident_date: Option<String>,
    /// Approximate time of the incident.
    pub incident_time: Option<String>,
    /// Where the incident happened.
    pub incident_location: Option<String>,
    /// Name of the accused.
    pub accused_name: Option<String>,
    /// Position or title of the accused.
    pub accused_position: Option<String>,
    /// Organization involved.
    pub organization: Option<String>,
    /// Names of witnesses.
    #[serde(default)]
    pub witnesses: Vec<String>,
    /// Free-text description of prior incidents.
    pub previous_incidents: Option<String>,
    /// The reporter's self-described emotional state.
    pub emotional_state: Option<String>,
    /// Whether the reporter flagged the need for immediate help.
    #[serde(default)]
    pub need_immediate_help: bool,
}

/// API response for a successful complaint submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitComplaintResponse {
    /// The tracking id the reporter uses to follow the case.
    pub complaint_id: String,
    /// The initial case status (always PENDING).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// Full case information for the officer dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInfo {
    /// The public tracking identifier.
    pub complaint_id: String,
    /// Whether the reporter asked to stay anonymous.
    pub is_anonymous: bool,
    /// Submitter user id (absent for anonymous cases).
    pub user_id: Option<String>,
    /// Submitter full name (absent for anonymous cases).
    pub full_name: Option<String>,
    /// Submitter email (absent for anonymous cases).
    pub email: Option<String>,
    /// Incident classification.
    pub incident_type: String,
    /// Incident description.
    pub incident_description: String,
    /// Date of the incident.
    pub incident_date: String,
    /// Approximate time of the incident.
    pub incident_time: Option<String>,
    /// Where the incident happened.
    pub incident_location: Option<String>,
    /// Name of the accused.
    pub accused_name: Option<String>,
    /// Position or title of the accused.
    pub accused_position: Option<String>,
    /// Organization involved.
    pub organization: Option<String>,
    /// Names of witnesses.
    pub witnesses: Vec<String>,
    /// Prior incidents, as described by the reporter.
    pub previous_incidents: Option<String>,
    /// The reporter's self-described emotional state.
    pub emotional_state: Option<String>,
    /// Whether the reporter flagged the need for immediate help.
    pub need_immediate_help: bool,
    /// Current case status.
    pub status: String,
    /// Assigned triage priority, if any.
    pub priority: Option<String>,
    /// When the complaint was submitted.
    pub created_at: String,
    /// When the case was last changed.
    pub updated_at: String,
}

impl From<ComplaintRecord> for CaseInfo {
    fn from(record: ComplaintRecord) -> Self {
        Self {
            complaint_id: record.complaint_id,
            is_anonymous: record.is_anonymous,
            user_id: record.user_id,
            full_name: record.full_name,
            email: record.submitter_email,
            incident_type: record.incident_type,
            incident_description: record.incident_description,
            incident_date: record.incident_date,
            incident_time: record.incident_time,
            incident_location: record.incident_location,
            accused_name: record.accused_name,
            accused_position: record.accused_position,
            organization: record.organization,
            witnesses: record.witnesses,
            previous_incidents: record.previous_incidents,
            emotional_state: record.emotional_state,
            need_immediate_help: record.need_immediate_help,
            status: record.status,
            priority: record.priority,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// The public tracking view of a case, looked up by tracking id.
///
/// Carries only triage state, never identity or incident detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingView {
    /// The public tracking identifier.
    pub complaint_id: String,
    /// Current case status.
    pub status: String,
    /// Assigned triage priority, if any.
    pub priority: Option<String>,
    /// When the complaint was submitted.
    pub created_at: String,
    /// When the case was last changed.
    pub updated_at: String,
}

/// API request to list cases for the officer dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCasesRequest {
    /// Filter by status (exact match).
    pub status: Option<String>,
    /// Filter by incident classification (exact match).
    pub incident_type: Option<String>,
    /// Filter by priority (exact match).
    pub priority: Option<String>,
    /// Case-insensitive substring match against the tracking id or the
    /// submitter email.
    pub q: Option<String>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
}

impl Default for ListCasesRequest {
    fn default() -> Self {
        Self {
            status: None,
            incident_type: None,
            priority: None,
            q: None,
            page: default_page(),
        }
    }
}

/// API response for a dashboard case listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCasesResponse {
    /// The cases on this page, newest first.
    pub cases: Vec<CaseInfo>,
    /// The 1-based page number served.
    pub page: i64,
    /// The fixed page size.
    pub page_size: i64,
    /// Total cases matching the filter.
    pub total: i64,
    /// Total pages for this filter.
    pub total_pages: i64,
}

/// API request to update a case status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The status to transition to.
    pub new_status: String,
}

/// API response for a successful status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The status before the transition.
    pub old_status: String,
    /// The status after the transition.
    pub new_status: String,
    /// The event id of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to update a case priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePriorityRequest {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The priority to assign (LOW, MEDIUM, HIGH).
    pub priority: String,
}

/// API response for a successful priority update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePriorityResponse {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The priority before the update, if any.
    pub old_priority: Option<String>,
    /// The priority after the update.
    pub new_priority: String,
    /// The event id of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to append a message to a case thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessageRequest {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// Sender role for public posts: "complainee" or "public".
    ///
    /// Ignored on the officer endpoint, which always posts as "officer".
    pub sender: Option<String>,
    /// Display name of the writer; defaulted per sender role when absent.
    pub sender_name: Option<String>,
    /// The message text.
    pub body: String,
}

/// A single message in a case thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    /// Who wrote the message (officer, complainee, public).
    pub sender: String,
    /// Display name of the writer.
    pub sender_name: String,
    /// The message text.
    pub body: String,
    /// When the message was appended.
    pub timestamp: String,
}

impl From<MessageRecord> for MessageInfo {
    fn from(record: MessageRecord) -> Self {
        Self {
            sender: record.sender,
            sender_name: record.sender_name,
            body: record.body,
            timestamp: record.created_at,
        }
    }
}

/// API response for a case message thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The thread in append order.
    pub messages: Vec<MessageInfo>,
}

/// A single audit event on a case timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// The event id.
    pub event_id: i64,
    /// Who performed the action.
    pub actor_id: String,
    /// The actor's role at the time (e.g. "officer").
    pub actor_type: String,
    /// Why the action was performed.
    pub cause_description: String,
    /// The action name (e.g. "`UpdateStatus`").
    pub action_name: String,
    /// Optional action details.
    pub action_details: Option<String>,
    /// Triage state before the action.
    pub before: String,
    /// Triage state after the action.
    pub after: String,
    /// When the event was recorded.
    pub created_at: String,
}

impl From<AuditEventRecord> for AuditEventInfo {
    fn from(record: AuditEventRecord) -> Self {
        Self {
            event_id: record.event_id,
            actor_id: record.actor_id,
            actor_type: record.actor_type,
            cause_description: record.cause_description,
            action_name: record.action_name,
            action_details: record.action_details,
            before: record.before_snapshot,
            after: record.after_snapshot,
            created_at: record.created_at,
        }
    }
}

/// API response for a case audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTimelineResponse {
    /// The tracking id of the case.
    pub complaint_id: String,
    /// The events in chronological order.
    pub events: Vec<AuditEventInfo>,
}

/// API request to create a community board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// The post content.
    pub content: String,
    /// Whether to post under a generated pseudonym.
    #[serde(default)]
    pub is_anonymous: bool,
    /// Author user id; required unless anonymous.
    pub user_id: Option<String>,
    /// Author display name; required unless anonymous.
    pub author_name: Option<String>,
    /// Author contact email.
    pub author_email: Option<String>,
    /// Whether the post is visible on the public board.
    #[serde(default = "CreatePostRequest::default_public")]
    pub is_public: bool,
}

impl CreatePostRequest {
    const fn default_public() -> bool {
        true
    }
}

/// API response for a successful post creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    /// The id of the new post.
    pub post_id: i64,
    /// The generated pseudonym, for anonymous posts.
    pub pseudonym: Option<String>,
    /// A success message.
    pub message: String,
}

/// A community board post with engagement counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInfo {
    /// The post id.
    pub post_id: i64,
    /// The post content.
    pub content: String,
    /// The display name shown to readers (author name or pseudonym).
    pub display_name: String,
    /// Whether the post was written pseudonymously.
    pub is_pseudonymous: bool,
    /// Number of upvotes.
    pub upvote_count: i64,
    /// Number of comments.
    pub comment_count: i64,
    /// When the post was created.
    pub created_at: String,
}

impl From<PostWithCounts> for PostInfo {
    fn from(value: PostWithCounts) -> Self {
        let is_pseudonymous: bool = value.post.pseudonym.is_some();
        let display_name: String = value
            .post
            .pseudonym
            .or(value.post.author_name)
            .unwrap_or_else(|| String::from("Anonymous"));
        Self {
            post_id: value.post.post_id,
            content: value.post.content,
            display_name,
            is_pseudonymous,
            upvote_count: value.upvote_count,
            comment_count: value.comment_count,
            created_at: value.post.created_at,
        }
    }
}

/// API response for the public board listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostsResponse {
    /// Public posts, newest first.
    pub posts: Vec<PostInfo>,
}

/// API request to upvote a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvotePostRequest {
    /// The post to upvote.
    pub post_id: i64,
    /// The voter key: a user id, or a client-held anonymous id.
    pub voter_key: String,
    /// Whether the voter key is an anonymous id.
    #[serde(default)]
    pub is_anonymous: bool,
}

/// API response for a successful upvote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvotePostResponse {
    /// The post that was upvoted.
    pub post_id: i64,
    /// The upvote count after this vote.
    pub upvote_count: i64,
}

/// API request to comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    /// The post to comment on.
    pub post_id: i64,
    /// The comment content.
    pub content: String,
    /// Whether to comment under a generated pseudonym.
    #[serde(default)]
    pub is_anonymous: bool,
    /// Author user id; required unless anonymous.
    pub user_id: Option<String>,
    /// Author display name; required unless anonymous.
    pub author_name: Option<String>,
    /// Author contact email.
    pub author_email: Option<String>,
}

/// API response for a successful comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentResponse {
    /// The id of the new comment.
    pub comment_id: i64,
    /// The post commented on.
    pub post_id: i64,
    /// The generated pseudonym, for anonymous comments.
    pub pseudonym: Option<String>,
}

/// A comment on a board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInfo {
    /// The comment id.
    pub comment_id: i64,
    /// The comment content.
    pub content: String,
    /// The display name shown to readers (author name or pseudonym).
    pub display_name: String,
    /// Whether the comment was written pseudonymously.
    pub is_pseudonymous: bool,
    /// When the comment was created.
    pub created_at: String,
}

impl From<CommentRecord> for CommentInfo {
    fn from(record: CommentRecord) -> Self {
        let is_pseudonymous: bool = record.pseudonym.is_some();
        let display_name: String = record
            .pseudonym
            .or(record.author_name)
            .unwrap_or_else(|| String::from("Anonymous"));
        Self {
            comment_id: record.comment_id,
            content: record.content,
            display_name,
            is_pseudonymous,
            created_at: record.created_at,
        }
    }
}

/// API response for a post's comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCommentsResponse {
    /// The post the comments belong to.
    pub post_id: i64,
    /// Comments in creation order.
    pub comments: Vec<CommentInfo>,
}

/// API response carrying a freshly generated pseudonym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePseudonymResponse {
    /// The generated pseudonym.
    pub pseudonym: String,
}

/// API request to submit an aid request to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAidRequestRequest {
    /// Name of the requester.
    pub requester_name: String,
    /// Contact email of the requester.
    pub requester_email: String,
    /// Operator id of the targeted staff member.
    pub target_id: String,
    /// Display name of the targeted staff member.
    pub target_name: String,
    /// Email of the targeted staff member.
    pub target_email: String,
    /// Subject line.
    pub subject: String,
    /// Request body.
    pub message: String,
}

/// API response for a successful aid request submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAidRequestResponse {
    /// The id of the new aid request.
    pub request_id: i64,
    /// The initial handling status (always PENDING).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// A stored aid request, as seen by officers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRequestInfo {
    /// The aid request id.
    pub request_id: i64,
    /// Name of the requester.
    pub requester_name: String,
    /// Contact email of the requester.
    pub requester_email: String,
    /// Operator id of the targeted staff member.
    pub target_id: String,
    /// Display name of the targeted staff member.
    pub target_name: String,
    /// Subject line.
    pub subject: String,
    /// Request body.
    pub message: String,
    /// Current handling status.
    pub status: String,
    /// When the request was submitted.
    pub created_at: String,
    /// When the request was last changed.
    pub updated_at: String,
}

impl From<AidRequestRecord> for AidRequestInfo {
    fn from(record: AidRequestRecord) -> Self {
        Self {
            request_id: record.request_id,
            requester_name: record.requester_name,
            requester_email: record.requester_email,
            target_id: record.target_id,
            target_name: record.target_name,
            subject: record.subject,
            message: record.message,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// API response for listing aid requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAidRequestsResponse {
    /// Aid requests, newest first.
    pub requests: Vec<AidRequestInfo>,
}

/// API request to advance an aid request's handling status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAidStatusRequest {
    /// The aid request id.
    pub request_id: i64,
    /// The status to set (PENDING, CONTACTED, CLOSED).
    pub status: String,
}

/// API response for a successful aid status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAidStatusResponse {
    /// The aid request id.
    pub request_id: i64,
    /// The status after the update.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// A staff member in the public directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMemberInfo {
    /// The operator id, used as aid request target.
    pub operator_id: i64,
    /// Display name.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// The staff role (Counsellor or Lawyer).
    pub role: String,
}

impl From<OperatorData> for StaffMemberInfo {
    fn from(operator: OperatorData) -> Self {
        Self {
            operator_id: operator.operator_id,
            display_name: operator.display_name,
            email: operator.email,
            role: operator.role,
        }
    }
}

/// API response for the public staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffDirectoryResponse {
    /// Active counsellors.
    pub counsellors: Vec<StaffMemberInfo>,
    /// Active lawyers.
    pub lawyers: Vec<StaffMemberInfo>,
}

/// API request to trigger an SOS alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSosRequest {
    /// Opaque user identifier, if the alert came from a known user.
    pub user_id: Option<String>,
    /// Display name; defaulted when absent.
    pub name: Option<String>,
    /// Contact email; defaulted when absent.
    pub email: Option<String>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// A maps link to the reported position.
    pub location_link: String,
    /// Alert message; defaulted when absent.
    pub message: Option<String>,
}

/// API response for a triggered SOS alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSosResponse {
    /// The id of the stored alert.
    pub alert_id: i64,
    /// A success message.
    pub message: String,
}

/// A stored SOS alert, as seen by officers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlertInfo {
    /// The alert id.
    pub alert_id: i64,
    /// Display name of the caller.
    pub name: String,
    /// Contact email of the caller.
    pub email: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// A maps link to the reported position.
    pub location_link: String,
    /// The alert message.
    pub message: String,
    /// When the alert was triggered.
    pub created_at: String,
}

impl From<SosAlertRecord> for SosAlertInfo {
    fn from(record: SosAlertRecord) -> Self {
        Self {
            alert_id: record.alert_id,
            name: record.name,
            email: record.email,
            latitude: record.latitude,
            longitude: record.longitude,
            location_link: record.location_link,
            message: record.message,
            created_at: record.created_at,
        }
    }
}

/// API response for listing SOS alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSosAlertsResponse {
    /// Alerts, newest first.
    pub alerts: Vec<SosAlertInfo>,
}

/// API request to create an operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperatorRequest {
    /// The login name (normalized to uppercase).
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// The role to assign (Admin, Officer, Counsellor, Lawyer).
    pub role: String,
    /// The initial password.
    pub password: String,
    /// Confirmation of the initial password.
    pub password_confirmation: String,
}

/// API response for a successful operator creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperatorResponse {
    /// The new operator's id.
    pub operator_id: i64,
    /// The normalized login name.
    pub login_name: String,
    /// The assigned role.
    pub role: String,
    /// A success message.
    pub message: String,
}

/// Operator account information for admin listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    /// The operator id.
    pub operator_id: i64,
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// The assigned role.
    pub role: String,
    /// Whether the account is disabled.
    pub is_disabled: bool,
    /// When the account was created.
    pub created_at: String,
    /// When the account was disabled, if it is.
    pub disabled_at: Option<String>,
    /// The most recent login, if any.
    pub last_login_at: Option<String>,
}

impl From<OperatorData> for OperatorInfo {
    fn from(operator: OperatorData) -> Self {
        Self {
            operator_id: operator.operator_id,
            login_name: operator.login_name,
            display_name: operator.display_name,
            email: operator.email,
            role: operator.role,
            is_disabled: operator.is_disabled,
            created_at: operator.created_at,
            disabled_at: operator.disabled_at,
            last_login_at: operator.last_login_at,
        }
    }
}

/// API response for listing operator accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperatorsResponse {
    /// All operator accounts, ordered by login name.
    pub operators: Vec<OperatorInfo>,
}

/// API request to disable an operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisableOperatorRequest {
    /// The operator to disable.
    pub operator_id: i64,
}

/// API request to re-enable an operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableOperatorRequest {
    /// The operator to enable.
    pub operator_id: i64,
}

/// API response for disabling or enabling an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorStateResponse {
    /// The affected operator.
    pub operator_id: i64,
    /// Whether the account is now disabled.
    pub is_disabled: bool,
    /// A success message.
    pub message: String,
}

/// API request to authenticate an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The operator login name (case-insensitive).
    pub login_name: String,
    /// The plaintext password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token to present on authenticated requests.
    pub session_token: String,
    /// The authenticated login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role.
    pub role: String,
}

/// API response describing the authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The authenticated login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role.
    pub role: String,
}

/// API response for a logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// A success message.
    pub message: String,
}
