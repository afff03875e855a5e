// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers enforce authorization before touching the store, translate
//! domain and persistence errors into API errors, and record an audit
//! event for every successful triage action.

use std::str::FromStr;

use caseline_audit::{Action, AuditEvent, Cause, StateSnapshot};
use caseline_domain::{
    AidRequest, AidStatus, Author, CaseStatus, ComplaintDraft, ComplaintId, IncidentType,
    MessageSender, Priority, SosAlert, resolve_authorship, validate_content, validate_message,
};
use caseline_persistence::{ComplaintFilter, ComplaintRecord, OperatorData, Persistence};
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::complaint_intake;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::notify::SosNotifier;
use crate::password_policy::PasswordPolicy;
use crate::pseudonym::generate_pseudonym;
use crate::request_response::{
    AidRequestInfo, CaseInfo, CaseTimelineResponse, CreateCommentRequest, CreateCommentResponse,
    CreateOperatorRequest, CreateOperatorResponse, CreatePostRequest, CreatePostResponse,
    DisableOperatorRequest, EnableOperatorRequest, GeneratePseudonymResponse,
    ListAidRequestsResponse, ListCasesRequest, ListCasesResponse, ListCommentsResponse,
    ListMessagesResponse, ListOperatorsResponse, ListPostsResponse, ListSosAlertsResponse,
    LoginRequest, LoginResponse, LogoutResponse, MessageInfo, OperatorStateResponse, PostInfo,
    PostMessageRequest, StaffDirectoryResponse, StaffMemberInfo, SubmitAidRequestRequest,
    SubmitAidRequestResponse, SubmitComplaintRequest, SubmitComplaintResponse, TrackingView,
    TriggerSosRequest, TriggerSosResponse, UpdateAidStatusRequest, UpdateAidStatusResponse,
    UpdatePriorityRequest, UpdatePriorityResponse, UpdateStatusRequest, UpdateStatusResponse,
    UpvotePostRequest, UpvotePostResponse, WhoAmIResponse,
};

/// Fixed page size of the officer dashboard.
pub const DASHBOARD_PAGE_SIZE: i64 = 10;

fn case_not_found(complaint_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Complaint"),
        message: format!("No case with tracking id {complaint_id}"),
    }
}

// ============================================================================
// Complaint intake and public tracking
// ============================================================================

/// Submits a new complaint and returns its tracking id.
///
/// # Errors
///
/// Returns an error if the intake fields fail validation or the store
/// rejects the insert.
pub fn submit_complaint(
    persistence: &mut Persistence,
    request: SubmitComplaintRequest,
) -> Result<SubmitComplaintResponse, ApiError> {
    let draft: ComplaintDraft = ComplaintDraft {
        is_anonymous: request.is_anonymous,
        user_id: request.user_id,
        full_name: request.full_name,
        submitter_email: request.email,
        incident_type: request.incident_type,
        incident_description: request.incident_description,
        incident_date: request.incident_date,
        incident_time: request.incident_time,
        incident_location: request.incident_location,
        accused_name: request.accused_name,
        accused_position: request.accused_position,
        organization: request.organization,
        witnesses: request.witnesses,
        previous_incidents: request.previous_incidents,
        emotional_state: request.emotional_state,
        need_immediate_help: request.need_immediate_help,
    };

    let complaint = complaint_intake::submit_complaint(persistence, draft)?;
    let complaint_id: String = complaint.complaint_id.value().to_string();

    info!(%complaint_id, "Complaint submitted");

    Ok(SubmitComplaintResponse {
        status: complaint.status.as_str().to_string(),
        message: format!("Complaint submitted. Use tracking id {complaint_id} to follow the case."),
        complaint_id,
    })
}

/// Returns the public tracking view of a case.
///
/// # Errors
///
/// Returns an error if the tracking id is malformed or unknown.
pub fn get_tracking_view(
    persistence: &mut Persistence,
    complaint_id: &str,
) -> Result<TrackingView, ApiError> {
    ComplaintId::parse(complaint_id).map_err(translate_domain_error)?;

    let record: ComplaintRecord = persistence
        .get_complaint(complaint_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| case_not_found(complaint_id))?;

    Ok(TrackingView {
        complaint_id: record.complaint_id,
        status: record.status,
        priority: record.priority,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

// ============================================================================
// Officer dashboard
// ============================================================================

/// Lists cases for the officer dashboard, filtered and paginated.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or a filter value is
/// not a recognized status, incident type, or priority.
pub fn list_cases(
    persistence: &mut Persistence,
    request: ListCasesRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListCasesResponse, ApiError> {
    AuthorizationService::authorize_view_dashboard(authenticated_actor)?;

    if request.page < 1 {
        return Err(ApiError::InvalidInput {
            field: String::from("page"),
            message: String::from("Page numbers start at 1"),
        });
    }

    // Reject filter values that could never match instead of returning an
    // empty page for a typo.
    if let Some(status) = &request.status {
        CaseStatus::from_str(status).map_err(translate_domain_error)?;
    }
    if let Some(incident_type) = &request.incident_type {
        IncidentType::from_str(incident_type).map_err(translate_domain_error)?;
    }
    if let Some(priority) = &request.priority {
        Priority::from_str(priority).map_err(translate_domain_error)?;
    }

    let filter: ComplaintFilter = ComplaintFilter {
        status: request.status,
        incident_type: request.incident_type,
        priority: request.priority,
        text_query: request.q,
    };

    let page = persistence
        .list_complaints(&filter, request.page, DASHBOARD_PAGE_SIZE)
        .map_err(translate_persistence_error)?;

    let total_pages: i64 = (page.total + DASHBOARD_PAGE_SIZE - 1) / DASHBOARD_PAGE_SIZE;

    Ok(ListCasesResponse {
        cases: page.complaints.into_iter().map(CaseInfo::from).collect(),
        page: request.page,
        page_size: DASHBOARD_PAGE_SIZE,
        total: page.total,
        total_pages,
    })
}

/// Transitions a case to a new status.
///
/// The transition is validated against the case lifecycle and applied as
/// a compare-and-set against the status that was read, so two officers
/// acting on the same stale view cannot both win.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the case does not
/// exist, the transition is not permitted, or the case changed
/// concurrently.
pub fn update_status(
    persistence: &mut Persistence,
    request: UpdateStatusRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<UpdateStatusResponse, ApiError> {
    AuthorizationService::authorize_update_status(authenticated_actor)?;

    let complaint_id: ComplaintId =
        ComplaintId::parse(&request.complaint_id).map_err(translate_domain_error)?;

    let record: ComplaintRecord = persistence
        .get_complaint(complaint_id.value())
        .map_err(translate_persistence_error)?
        .ok_or_else(|| case_not_found(complaint_id.value()))?;

    let current: CaseStatus = record.status.parse().map_err(translate_domain_error)?;
    let new_status: CaseStatus = request.new_status.parse().map_err(translate_domain_error)?;

    current
        .validate_transition(new_status)
        .map_err(translate_domain_error)?;

    let applied: bool = persistence
        .update_complaint_status(complaint_id.value(), current, new_status)
        .map_err(translate_persistence_error)?;
    if !applied {
        return Err(ApiError::Conflict {
            message: format!(
                "Case {complaint_id} is no longer {current}; reload and retry"
            ),
        });
    }

    let event: AuditEvent = AuditEvent::new(
        authenticated_actor.to_audit_actor(),
        cause,
        Action::new(
            String::from("UpdateStatus"),
            Some(format!("{current} -> {new_status}")),
        ),
        StateSnapshot::new(format!("status={current}")),
        StateSnapshot::new(format!("status={new_status}")),
        complaint_id.clone(),
    );
    let event_id: i64 = persistence
        .record_audit_event(&event)
        .map_err(translate_persistence_error)?;

    info!(complaint_id = %complaint_id, %current, %new_status, "Case status updated");

    Ok(UpdateStatusResponse {
        complaint_id: complaint_id.value().to_string(),
        old_status: current.as_str().to_string(),
        new_status: new_status.as_str().to_string(),
        event_id,
        message: format!("Case {complaint_id} moved from {current} to {new_status}"),
    })
}

/// Assigns a triage priority to a case.
///
/// Priority updates are last-writer-wins: unlike status they carry no
/// lifecycle, so concurrent updates simply overwrite.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the case does not
/// exist, or the priority value is not recognized.
pub fn update_priority(
    persistence: &mut Persistence,
    request: UpdatePriorityRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<UpdatePriorityResponse, ApiError> {
    AuthorizationService::authorize_update_priority(authenticated_actor)?;

    let complaint_id: ComplaintId =
        ComplaintId::parse(&request.complaint_id).map_err(translate_domain_error)?;

    let record: ComplaintRecord = persistence
        .get_complaint(complaint_id.value())
        .map_err(translate_persistence_error)?
        .ok_or_else(|| case_not_found(complaint_id.value()))?;

    let new_priority: Priority = request.priority.parse().map_err(translate_domain_error)?;
    let old_priority: Option<String> = record.priority;

    persistence
        .update_complaint_priority(complaint_id.value(), new_priority)
        .map_err(translate_persistence_error)?;

    let event: AuditEvent = AuditEvent::new(
        authenticated_actor.to_audit_actor(),
        cause,
        Action::new(String::from("UpdatePriority"), None),
        StateSnapshot::new(format!(
            "priority={}",
            old_priority.as_deref().unwrap_or_default()
        )),
        StateSnapshot::new(format!("priority={new_priority}")),
        complaint_id.clone(),
    );
    let event_id: i64 = persistence
        .record_audit_event(&event)
        .map_err(translate_persistence_error)?;

    Ok(UpdatePriorityResponse {
        complaint_id: complaint_id.value().to_string(),
        old_priority,
        new_priority: new_priority.as_str().to_string(),
        event_id,
        message: format!("Case {complaint_id} priority set to {new_priority}"),
    })
}

/// Returns the audit timeline of a case.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn get_case_timeline(
    persistence: &mut Persistence,
    complaint_id: &str,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CaseTimelineResponse, ApiError> {
    AuthorizationService::authorize_view_timeline(authenticated_actor)?;

    let events = persistence
        .get_audit_timeline(complaint_id)
        .map_err(translate_persistence_error)?;

    Ok(CaseTimelineResponse {
        complaint_id: complaint_id.to_string(),
        events: events.into_iter().map(Into::into).collect(),
    })
}

// ============================================================================
// Case message threads
// ============================================================================

/// Appends an officer reply to a case thread.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the case does not
/// exist, or the body is empty.
pub fn post_officer_message(
    persistence: &mut Persistence,
    request: PostMessageRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListMessagesResponse, ApiError> {
    AuthorizationService::authorize_officer_message(authenticated_actor)?;

    let (sender_name, body) = validate_message(
        MessageSender::Officer,
        request.sender_name.as_deref(),
        &request.body,
    )
    .map_err(translate_domain_error)?;

    persistence
        .append_message(
            &request.complaint_id,
            MessageSender::Officer,
            &sender_name,
            &body,
        )
        .map_err(translate_persistence_error)?;

    list_case_messages(persistence, &request.complaint_id)
}

/// Appends a reporter message to a case thread via the tracking id.
///
/// The sender must be "complainee" or "public"; officer replies go
/// through the authenticated dashboard endpoint.
///
/// # Errors
///
/// Returns an error if the sender role is invalid, the case does not
/// exist, or the body is empty.
pub fn post_public_message(
    persistence: &mut Persistence,
    request: PostMessageRequest,
) -> Result<ListMessagesResponse, ApiError> {
    let sender: MessageSender = request
        .sender
        .as_deref()
        .unwrap_or("public")
        .parse()
        .map_err(translate_domain_error)?;

    if sender == MessageSender::Officer {
        return Err(ApiError::InvalidInput {
            field: String::from("sender"),
            message: String::from("Officer replies must go through the dashboard"),
        });
    }

    let (sender_name, body) =
        validate_message(sender, request.sender_name.as_deref(), &request.body)
            .map_err(translate_domain_error)?;

    persistence
        .append_message(&request.complaint_id, sender, &sender_name, &body)
        .map_err(translate_persistence_error)?;

    list_case_messages(persistence, &request.complaint_id)
}

/// Returns the message thread of a case.
///
/// An unknown tracking id yields an empty thread rather than an error,
/// so the endpoint cannot be used to probe which ids exist.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_case_messages(
    persistence: &mut Persistence,
    complaint_id: &str,
) -> Result<ListMessagesResponse, ApiError> {
    let messages = persistence
        .list_messages(complaint_id)
        .map_err(translate_persistence_error)?;

    Ok(ListMessagesResponse {
        complaint_id: complaint_id.to_string(),
        messages: messages.into_iter().map(MessageInfo::from).collect(),
    })
}

// ============================================================================
// Community board
// ============================================================================

fn intake_authorship(
    is_anonymous: bool,
    user_id: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
) -> Result<(caseline_domain::Authorship, Option<String>), ApiError> {
    if is_anonymous {
        let pseudonym: String = generate_pseudonym();
        let authorship = resolve_authorship(None, Some(pseudonym.clone()))
            .map_err(translate_domain_error)?;
        return Ok((authorship, Some(pseudonym)));
    }

    let author: Author = Author {
        id: user_id.ok_or(ApiError::InvalidInput {
            field: String::from("user_id"),
            message: String::from("Identified posts require a user id"),
        })?,
        name: author_name.ok_or(ApiError::InvalidInput {
            field: String::from("author_name"),
            message: String::from("Identified posts require an author name"),
        })?,
        email: author_email,
    };
    let authorship = resolve_authorship(Some(author), None).map_err(translate_domain_error)?;
    Ok((authorship, None))
}

/// Creates a community board post.
///
/// Anonymous posts are published under a freshly generated pseudonym,
/// which is returned so the author can recognize their own post.
///
/// # Errors
///
/// Returns an error if the content is blank or the authorship fields are
/// inconsistent.
pub fn create_post(
    persistence: &mut Persistence,
    request: CreatePostRequest,
) -> Result<CreatePostResponse, ApiError> {
    let content: String = validate_content(&request.content).map_err(translate_domain_error)?;
    let (authorship, pseudonym) = intake_authorship(
        request.is_anonymous,
        request.user_id,
        request.author_name,
        request.author_email,
    )?;

    let post_id: i64 = persistence
        .create_post(&content, &authorship, request.is_public)
        .map_err(translate_persistence_error)?;

    Ok(CreatePostResponse {
        post_id,
        pseudonym,
        message: String::from("Post published"),
    })
}

/// Lists public board posts, newest first.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_posts(persistence: &mut Persistence) -> Result<ListPostsResponse, ApiError> {
    let posts = persistence
        .list_posts()
        .map_err(translate_persistence_error)?;

    Ok(ListPostsResponse {
        posts: posts.into_iter().map(PostInfo::from).collect(),
    })
}

/// Records an upvote on a post.
///
/// # Errors
///
/// Returns an error if the post does not exist or the voter has already
/// upvoted it.
pub fn upvote_post(
    persistence: &mut Persistence,
    request: UpvotePostRequest,
) -> Result<UpvotePostResponse, ApiError> {
    let voter_key: &str = request.voter_key.trim();
    if voter_key.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("voter_key"),
            message: String::from("A voter key is required"),
        });
    }

    let upvote_count: i64 = persistence
        .upvote_post(request.post_id, voter_key, request.is_anonymous)
        .map_err(translate_persistence_error)?;

    Ok(UpvotePostResponse {
        post_id: request.post_id,
        upvote_count,
    })
}

/// Adds a comment to a board post.
///
/// # Errors
///
/// Returns an error if the post does not exist, the content is blank, or
/// the authorship fields are inconsistent.
pub fn create_comment(
    persistence: &mut Persistence,
    request: CreateCommentRequest,
) -> Result<CreateCommentResponse, ApiError> {
    let content: String = validate_content(&request.content).map_err(translate_domain_error)?;
    let (authorship, pseudonym) = intake_authorship(
        request.is_anonymous,
        request.user_id,
        request.author_name,
        request.author_email,
    )?;

    let comment_id: i64 = persistence
        .comment_on_post(request.post_id, &content, &authorship)
        .map_err(translate_persistence_error)?;

    Ok(CreateCommentResponse {
        comment_id,
        post_id: request.post_id,
        pseudonym,
    })
}

/// Lists the comments on a post, oldest first.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_comments(
    persistence: &mut Persistence,
    post_id: i64,
) -> Result<ListCommentsResponse, ApiError> {
    let comments = persistence
        .list_comments(post_id)
        .map_err(translate_persistence_error)?;

    Ok(ListCommentsResponse {
        post_id,
        comments: comments.into_iter().map(Into::into).collect(),
    })
}

/// Generates a pseudonym for anonymous board participation.
#[must_use]
pub fn new_pseudonym() -> GeneratePseudonymResponse {
    GeneratePseudonymResponse {
        pseudonym: generate_pseudonym(),
    }
}

// ============================================================================
// Aid requests and staff directory
// ============================================================================

/// Submits an aid request to a counsellor or lawyer.
///
/// # Errors
///
/// Returns an error if a required field is blank or the targeted staff
/// member does not exist.
pub fn submit_aid_request(
    persistence: &mut Persistence,
    request: SubmitAidRequestRequest,
) -> Result<SubmitAidRequestResponse, ApiError> {
    let aid_request: AidRequest = AidRequest::new(
        &request.requester_name,
        &request.requester_email,
        &request.target_id,
        &request.target_name,
        &request.target_email,
        &request.subject,
        &request.message,
    )
    .map_err(translate_domain_error)?;

    let request_id: i64 = persistence
        .create_aid_request(&aid_request)
        .map_err(translate_persistence_error)?;

    Ok(SubmitAidRequestResponse {
        request_id,
        status: aid_request.status.as_str().to_string(),
        message: format!("Aid request sent to {}", aid_request.target_name),
    })
}

/// Lists all aid requests, newest first.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn list_aid_requests(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListAidRequestsResponse, ApiError> {
    AuthorizationService::authorize_manage_aid_requests(authenticated_actor)?;

    let requests = persistence
        .list_aid_requests()
        .map_err(translate_persistence_error)?;

    Ok(ListAidRequestsResponse {
        requests: requests.into_iter().map(AidRequestInfo::from).collect(),
    })
}

/// Advances an aid request's handling status.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the request does not
/// exist, or the status value is not recognized.
pub fn update_aid_status(
    persistence: &mut Persistence,
    request: UpdateAidStatusRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<UpdateAidStatusResponse, ApiError> {
    AuthorizationService::authorize_manage_aid_requests(authenticated_actor)?;

    let status: AidStatus = request.status.parse().map_err(translate_domain_error)?;

    persistence
        .update_aid_request_status(request.request_id, status)
        .map_err(translate_persistence_error)?;

    Ok(UpdateAidStatusResponse {
        request_id: request.request_id,
        status: status.as_str().to_string(),
        message: format!("Aid request {} marked {status}", request.request_id),
    })
}

/// Returns the public directory of active counsellors and lawyers.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn staff_directory(persistence: &mut Persistence) -> Result<StaffDirectoryResponse, ApiError> {
    let counsellors = persistence
        .list_operators_by_role(Role::Counsellor.as_str())
        .map_err(translate_persistence_error)?;
    let lawyers = persistence
        .list_operators_by_role(Role::Lawyer.as_str())
        .map_err(translate_persistence_error)?;

    Ok(StaffDirectoryResponse {
        counsellors: counsellors.into_iter().map(StaffMemberInfo::from).collect(),
        lawyers: lawyers.into_iter().map(StaffMemberInfo::from).collect(),
    })
}

// ============================================================================
// SOS alerts
// ============================================================================

/// Triggers an SOS alert: stores it and notifies the configured channel.
///
/// # Errors
///
/// Returns an error if the coordinates are invalid or the store rejects
/// the insert. Notification failures do not fail the alert.
pub fn trigger_sos(
    persistence: &mut Persistence,
    request: TriggerSosRequest,
    notifier: &dyn SosNotifier,
) -> Result<TriggerSosResponse, ApiError> {
    let alert: SosAlert = SosAlert::new(
        request.user_id,
        request.name,
        request.email,
        request.latitude,
        request.longitude,
        &request.location_link,
        request.message,
    )
    .map_err(translate_domain_error)?;

    let alert_id: i64 = persistence
        .record_sos_alert(&alert)
        .map_err(translate_persistence_error)?;

    notifier.notify(&alert);

    Ok(TriggerSosResponse {
        alert_id,
        message: String::from("SOS alert recorded"),
    })
}

/// Lists all SOS alerts, newest first.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn list_sos_alerts(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListSosAlertsResponse, ApiError> {
    AuthorizationService::authorize_view_sos_alerts(authenticated_actor)?;

    let alerts = persistence
        .list_sos_alerts()
        .map_err(translate_persistence_error)?;

    Ok(ListSosAlertsResponse {
        alerts: alerts.into_iter().map(Into::into).collect(),
    })
}

// ============================================================================
// Operator management and authentication
// ============================================================================

/// Creates an operator account.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the role is not
/// recognized, or the password fails policy checks.
pub fn create_operator(
    persistence: &mut Persistence,
    request: CreateOperatorRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateOperatorResponse, ApiError> {
    AuthorizationService::authorize_manage_operators(authenticated_actor)?;

    let role: Role = Role::parse(&request.role).ok_or_else(|| ApiError::InvalidInput {
        field: String::from("role"),
        message: format!("Unknown role: '{}'", request.role),
    })?;

    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        &request.login_name,
        &request.display_name,
    )?;

    let operator_id: i64 = persistence
        .create_operator(
            &request.login_name,
            &request.display_name,
            &request.email,
            &request.password,
            role.as_str(),
        )
        .map_err(translate_persistence_error)?;

    let login_name: String = request.login_name.to_uppercase();
    info!(%login_name, role = role.as_str(), "Operator account created");

    Ok(CreateOperatorResponse {
        operator_id,
        login_name,
        role: role.as_str().to_string(),
        message: String::from("Operator created"),
    })
}

/// Lists all operator accounts.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin.
pub fn list_operators(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListOperatorsResponse, ApiError> {
    AuthorizationService::authorize_manage_operators(authenticated_actor)?;

    let operators = persistence
        .list_operators()
        .map_err(translate_persistence_error)?;

    Ok(ListOperatorsResponse {
        operators: operators.into_iter().map(Into::into).collect(),
    })
}

/// Disables an operator account and revokes its sessions.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the operator does
/// not exist.
pub fn disable_operator(
    persistence: &mut Persistence,
    request: DisableOperatorRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<OperatorStateResponse, ApiError> {
    AuthorizationService::authorize_manage_operators(authenticated_actor)?;

    persistence
        .get_operator_by_id(request.operator_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: format!("No operator with id {}", request.operator_id),
        })?;

    persistence
        .disable_operator(request.operator_id)
        .map_err(translate_persistence_error)?;
    persistence
        .delete_sessions_for_operator(request.operator_id)
        .map_err(translate_persistence_error)?;

    Ok(OperatorStateResponse {
        operator_id: request.operator_id,
        is_disabled: true,
        message: String::from("Operator disabled and sessions revoked"),
    })
}

/// Re-enables a disabled operator account.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the operator does
/// not exist.
pub fn enable_operator(
    persistence: &mut Persistence,
    request: EnableOperatorRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<OperatorStateResponse, ApiError> {
    AuthorizationService::authorize_manage_operators(authenticated_actor)?;

    persistence
        .get_operator_by_id(request.operator_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: format!("No operator with id {}", request.operator_id),
        })?;

    persistence
        .enable_operator(request.operator_id)
        .map_err(translate_persistence_error)?;

    Ok(OperatorStateResponse {
        operator_id: request.operator_id,
        is_disabled: false,
        message: String::from("Operator enabled"),
    })
}

/// Authenticates an operator and opens a session.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the account is
/// disabled.
pub fn login(
    persistence: &mut Persistence,
    request: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, actor, operator) =
        AuthenticationService::login(persistence, &request.login_name, &request.password)?;

    info!(login_name = %actor.id, "Operator logged in");

    Ok(LoginResponse {
        session_token,
        login_name: actor.id,
        display_name: operator.display_name,
        role: operator.role,
    })
}

/// Closes a session.
///
/// # Errors
///
/// Returns an error if the session could not be deleted.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<LogoutResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;

    Ok(LogoutResponse {
        message: String::from("Logged out"),
    })
}

/// Describes the authenticated operator.
#[must_use]
pub fn whoami(authenticated_actor: &AuthenticatedActor, operator: &OperatorData) -> WhoAmIResponse {
    WhoAmIResponse {
        login_name: authenticated_actor.id.clone(),
        display_name: operator.display_name.clone(),
        role: operator.role.clone(),
    }
}
