// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use caseline_api::{ApiError, AuthenticatedActor, LogNotifier, SosNotifier, handlers};
use caseline_api::request_response::{
    CaseTimelineResponse, CreateCommentRequest, CreateCommentResponse, CreateOperatorRequest,
    CreateOperatorResponse, CreatePostRequest, CreatePostResponse, DisableOperatorRequest,
    EnableOperatorRequest, GeneratePseudonymResponse, ListAidRequestsResponse, ListCasesRequest,
    ListCasesResponse, ListCommentsResponse, ListMessagesResponse, ListOperatorsResponse,
    ListPostsResponse, ListSosAlertsResponse, LoginRequest, LoginResponse, LogoutResponse,
    OperatorStateResponse, PostMessageRequest, StaffDirectoryResponse, SubmitAidRequestRequest,
    SubmitAidRequestResponse, SubmitComplaintRequest, SubmitComplaintResponse, TrackingView,
    TriggerSosRequest, TriggerSosResponse, UpdateAidStatusRequest, UpdateAidStatusResponse,
    UpdatePriorityRequest, UpdatePriorityResponse, UpdateStatusRequest, UpdateStatusResponse,
    UpvotePostRequest, UpvotePostResponse, WhoAmIResponse,
};
use caseline_audit::Cause;
use caseline_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::session::SessionOperator;

mod session;

/// Caseline Server - HTTP server for the Caseline complaint system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, plus the SOS delivery channel.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for cases, threads, board content, and sessions.
    persistence: Arc<Mutex<Persistence>>,
    /// The delivery channel for triggered SOS alerts.
    notifier: Arc<dyn SosNotifier + Send + Sync>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } | ApiError::PasswordPolicyViolation { .. } => {
                Self {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: err.to_string(),
                }
            }
            ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Builds the audit cause for an authenticated triage request.
fn request_cause(endpoint: &str, actor: &AuthenticatedActor) -> Cause {
    Cause::new(
        format!("http:{endpoint}"),
        format!("{endpoint} requested by {}", actor.id),
    )
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, HttpError> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing or invalid Authorization header"),
        })
}

/// Handler for POST /complaints endpoint.
///
/// Accepts a new complaint and returns its tracking id.
async fn handle_submit_complaint(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitComplaintRequest>,
) -> Result<Json<SubmitComplaintResponse>, HttpError> {
    info!(
        is_anonymous = req.is_anonymous,
        "Handling submit_complaint request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitComplaintResponse = handlers::submit_complaint(&mut persistence, req)?;
    drop(persistence);

    info!(complaint_id = %response.complaint_id, "Complaint submitted");

    Ok(Json(response))
}

/// Handler for GET `/complaints/{complaint_id}` endpoint.
///
/// Returns the public tracking view of a case.
async fn handle_get_tracking_view(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<String>,
) -> Result<Json<TrackingView>, HttpError> {
    info!(complaint_id = %complaint_id, "Handling tracking view request");

    let mut persistence = app_state.persistence.lock().await;
    let response: TrackingView = handlers::get_tracking_view(&mut persistence, &complaint_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/complaints/{complaint_id}/messages` endpoint.
///
/// Returns the message thread of a case, oldest first.
async fn handle_list_case_messages(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<String>,
) -> Result<Json<ListMessagesResponse>, HttpError> {
    info!(complaint_id = %complaint_id, "Handling list_case_messages request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMessagesResponse =
        handlers::list_case_messages(&mut persistence, &complaint_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/complaints/{complaint_id}/messages` endpoint.
///
/// Appends a message from the complainee or the public to a case thread.
async fn handle_post_public_message(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<String>,
    Json(mut req): Json<PostMessageRequest>,
) -> Result<Json<ListMessagesResponse>, HttpError> {
    info!(complaint_id = %complaint_id, "Handling public message request");

    req.complaint_id = complaint_id;

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMessagesResponse = handlers::post_public_message(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /cases endpoint.
///
/// Returns one dashboard page of cases for an authenticated operator.
async fn handle_list_cases(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Query(query): Query<ListCasesRequest>,
) -> Result<Json<ListCasesResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        page = query.page,
        "Handling list_cases request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ListCasesResponse = handlers::list_cases(&mut persistence, query, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /cases/status endpoint.
///
/// Transitions a case through its lifecycle and records an audit event.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        complaint_id = %req.complaint_id,
        new_status = %req.new_status,
        "Handling update_status request"
    );

    let cause: Cause = request_cause("update_status", &actor);

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateStatusResponse =
        handlers::update_status(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    info!(
        event_id = response.event_id,
        complaint_id = %response.complaint_id,
        "Successfully updated case status"
    );

    Ok(Json(response))
}

/// Handler for POST /cases/priority endpoint.
///
/// Assigns a triage priority to a case and records an audit event.
async fn handle_update_priority(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<UpdatePriorityRequest>,
) -> Result<Json<UpdatePriorityResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        complaint_id = %req.complaint_id,
        priority = %req.priority,
        "Handling update_priority request"
    );

    let cause: Cause = request_cause("update_priority", &actor);

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdatePriorityResponse =
        handlers::update_priority(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    info!(
        event_id = response.event_id,
        complaint_id = %response.complaint_id,
        "Successfully updated case priority"
    );

    Ok(Json(response))
}

/// Handler for GET `/cases/{complaint_id}/timeline` endpoint.
///
/// Returns the ordered audit trail of a case.
async fn handle_get_case_timeline(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(complaint_id): Path<String>,
) -> Result<Json<CaseTimelineResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        complaint_id = %complaint_id,
        "Handling case timeline request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CaseTimelineResponse =
        handlers::get_case_timeline(&mut persistence, &complaint_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/cases/{complaint_id}/messages` endpoint.
///
/// Appends an officer message to a case thread.
async fn handle_post_officer_message(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(complaint_id): Path<String>,
    Json(mut req): Json<PostMessageRequest>,
) -> Result<Json<ListMessagesResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        complaint_id = %complaint_id,
        "Handling officer message request"
    );

    req.complaint_id = complaint_id;

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMessagesResponse =
        handlers::post_officer_message(&mut persistence, req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /board/posts endpoint.
///
/// Publishes a community board post, pseudonymized when requested.
async fn handle_create_post(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, HttpError> {
    info!(
        is_anonymous = req.is_anonymous,
        "Handling create_post request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreatePostResponse = handlers::create_post(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /board/posts endpoint.
///
/// Lists public board posts with upvote and comment counts, newest first.
async fn handle_list_posts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListPostsResponse>, HttpError> {
    info!("Handling list_posts request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListPostsResponse = handlers::list_posts(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /board/upvotes endpoint.
///
/// Records one upvote per voter per post.
async fn handle_upvote_post(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpvotePostRequest>,
) -> Result<Json<UpvotePostResponse>, HttpError> {
    info!(post_id = req.post_id, "Handling upvote_post request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpvotePostResponse = handlers::upvote_post(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /board/comments endpoint.
///
/// Adds a comment to a board post.
async fn handle_create_comment(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>, HttpError> {
    info!(post_id = req.post_id, "Handling create_comment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateCommentResponse = handlers::create_comment(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/board/posts/{post_id}/comments` endpoint.
///
/// Lists the comments on a board post, oldest first.
async fn handle_list_comments(
    AxumState(app_state): AxumState<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<ListCommentsResponse>, HttpError> {
    info!(post_id = post_id, "Handling list_comments request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListCommentsResponse = handlers::list_comments(&mut persistence, post_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /board/pseudonym endpoint.
///
/// Returns a freshly generated pseudonym.
async fn handle_new_pseudonym() -> Json<GeneratePseudonymResponse> {
    Json(handlers::new_pseudonym())
}

/// Handler for POST /aid_requests endpoint.
///
/// Submits a request for help addressed to a counsellor or lawyer.
async fn handle_submit_aid_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitAidRequestRequest>,
) -> Result<Json<SubmitAidRequestResponse>, HttpError> {
    info!(target_name = %req.target_name, "Handling submit_aid_request request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitAidRequestResponse =
        handlers::submit_aid_request(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /aid_requests endpoint.
///
/// Lists all aid requests for an authenticated operator.
async fn handle_list_aid_requests(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<ListAidRequestsResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling list_aid_requests request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListAidRequestsResponse =
        handlers::list_aid_requests(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /aid_requests/status endpoint.
///
/// Moves an aid request through its handling workflow.
async fn handle_update_aid_status(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<UpdateAidStatusRequest>,
) -> Result<Json<UpdateAidStatusResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        request_id = req.request_id,
        status = %req.status,
        "Handling update_aid_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateAidStatusResponse =
        handlers::update_aid_status(&mut persistence, req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /staff_directory endpoint.
///
/// Lists the active counsellors and lawyers reachable through aid requests.
async fn handle_staff_directory(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StaffDirectoryResponse>, HttpError> {
    info!("Handling staff_directory request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StaffDirectoryResponse = handlers::staff_directory(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /sos endpoint.
///
/// Stores an SOS alert and pushes it to the configured delivery channel.
async fn handle_trigger_sos(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<TriggerSosRequest>,
) -> Result<Json<TriggerSosResponse>, HttpError> {
    info!(
        latitude = req.latitude,
        longitude = req.longitude,
        "Handling trigger_sos request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: TriggerSosResponse =
        handlers::trigger_sos(&mut persistence, req, app_state.notifier.as_ref())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /sos endpoint.
///
/// Lists stored SOS alerts for an authenticated operator, newest first.
async fn handle_list_sos_alerts(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<ListSosAlertsResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling list_sos_alerts request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListSosAlertsResponse = handlers::list_sos_alerts(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /operators endpoint.
///
/// Creates an operator account. Admin only.
async fn handle_create_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<CreateOperatorRequest>,
) -> Result<Json<CreateOperatorResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        login_name = %req.login_name,
        role = %req.role,
        "Handling create_operator request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateOperatorResponse =
        handlers::create_operator(&mut persistence, req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /operators endpoint.
///
/// Lists all operator accounts. Admin only.
async fn handle_list_operators(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<ListOperatorsResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling list_operators request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListOperatorsResponse = handlers::list_operators(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /operators/disable endpoint.
///
/// Disables an operator account and revokes its sessions. Admin only.
async fn handle_disable_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<DisableOperatorRequest>,
) -> Result<Json<OperatorStateResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        operator_id = req.operator_id,
        "Handling disable_operator request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: OperatorStateResponse =
        handlers::disable_operator(&mut persistence, req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /operators/enable endpoint.
///
/// Re-enables a disabled operator account. Admin only.
async fn handle_enable_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<EnableOperatorRequest>,
) -> Result<Json<OperatorStateResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        operator_id = req.operator_id,
        "Handling enable_operator request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: OperatorStateResponse =
        handlers::enable_operator(&mut persistence, req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /login endpoint.
///
/// Authenticates an operator and opens a session.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = handlers::login(&mut persistence, req)?;
    drop(persistence);

    info!(login_name = %response.login_name, "Operator logged in");

    Ok(Json(response))
}

/// Handler for POST /logout endpoint.
///
/// Invalidates the presented session token.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: LogoutResponse = handlers::logout(&mut persistence, token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /whoami endpoint.
///
/// Describes the operator behind the presented session token.
async fn handle_whoami(
    SessionOperator(actor, operator): SessionOperator,
) -> Json<WhoAmIResponse> {
    Json(handlers::whoami(&actor, &operator))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/complaints", post(handle_submit_complaint))
        .route("/complaints/{complaint_id}", get(handle_get_tracking_view))
        .route(
            "/complaints/{complaint_id}/messages",
            get(handle_list_case_messages),
        )
        .route(
            "/complaints/{complaint_id}/messages",
            post(handle_post_public_message),
        )
        .route("/cases", get(handle_list_cases))
        .route("/cases/status", post(handle_update_status))
        .route("/cases/priority", post(handle_update_priority))
        .route(
            "/cases/{complaint_id}/timeline",
            get(handle_get_case_timeline),
        )
        .route(
            "/cases/{complaint_id}/messages",
            post(handle_post_officer_message),
        )
        .route("/board/posts", post(handle_create_post))
        .route("/board/posts", get(handle_list_posts))
        .route("/board/upvotes", post(handle_upvote_post))
        .route("/board/comments", post(handle_create_comment))
        .route("/board/posts/{post_id}/comments", get(handle_list_comments))
        .route("/board/pseudonym", get(handle_new_pseudonym))
        .route("/aid_requests", post(handle_submit_aid_request))
        .route("/aid_requests", get(handle_list_aid_requests))
        .route("/aid_requests/status", post(handle_update_aid_status))
        .route("/staff_directory", get(handle_staff_directory))
        .route("/sos", post(handle_trigger_sos))
        .route("/sos", get(handle_list_sos_alerts))
        .route("/operators", post(handle_create_operator))
        .route("/operators", get(handle_list_operators))
        .route("/operators/disable", post(handle_disable_operator))
        .route("/operators/enable", post(handle_enable_operator))
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Caseline Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: Arc::new(LogNotifier),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Helper to seed an admin account directly in persistence.
    async fn seed_admin(app_state: &AppState) {
        let mut persistence = app_state.persistence.lock().await;
        persistence
            .create_operator(
                "admin.root",
                "Root Admin",
                "root@example.org",
                "MyAdminP@ss123",
                "Admin",
            )
            .expect("Failed to seed admin");
    }

    /// Helper to log in and return the session token.
    async fn login_token(app: &Router, login_name: &str, password: &str) -> String {
        let body = serde_json::json!({
            "login_name": login_name,
            "password": password,
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let login: LoginResponse = serde_json::from_slice(&body_bytes).unwrap();
        login.session_token
    }

    /// Helper to build a valid complaint submission body.
    fn complaint_body() -> serde_json::Value {
        serde_json::json!({
            "is_anonymous": false,
            "user_id": "user-7",
            "full_name": "Jordan Park",
            "email": "jordan@example.org",
            "incident_type": "VERBAL",
            "incident_description": "Repeated shouting and threats in the hallway.",
            "incident_date": "2026-08-20",
            "incident_location": "Building C",
        })
    }

    /// Helper to POST a JSON body to the app.
    async fn post_json(
        app: &Router,
        uri: &str,
        token: Option<&str>,
        body: &serde_json::Value,
    ) -> axum::response::Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        app.clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_complaint_then_track() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_json(&app, "/complaints", None, &complaint_body()).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let submitted: SubmitComplaintResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(submitted.complaint_id.starts_with("SHC-"));
        assert_eq!(submitted.status, "PENDING");

        let track_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/complaints/{}", submitted.complaint_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(track_response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(track_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: TrackingView = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(view.complaint_id, submitted.complaint_id);
        assert_eq!(view.status, "PENDING");
    }

    #[tokio::test]
    async fn test_tracking_unknown_complaint_returns_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/complaints/SHC-2026-9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_short_description_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let mut body = complaint_body();
        body["incident_description"] = serde_json::json!("too short");

        let response = post_json(&app, "/complaints", None, &body).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_requires_session() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/cases")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_triage_flow_with_session() {
        let app_state: AppState = create_test_app_state();
        seed_admin(&app_state).await;
        let app: Router = build_router(app_state);
        let token: String = login_token(&app, "admin.root", "MyAdminP@ss123").await;

        let submit_response = post_json(&app, "/complaints", None, &complaint_body()).await;
        let body_bytes = axum::body::to_bytes(submit_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let submitted: SubmitComplaintResponse = serde_json::from_slice(&body_bytes).unwrap();

        let status_body = serde_json::json!({
            "complaint_id": submitted.complaint_id,
            "new_status": "IN_PROGRESS",
        });
        let status_response = post_json(&app, "/cases/status", Some(&token), &status_body).await;
        assert_eq!(status_response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(status_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: UpdateStatusResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(updated.old_status, "PENDING");
        assert_eq!(updated.new_status, "IN_PROGRESS");
        assert!(updated.event_id > 0);

        let timeline_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/cases/{}/timeline", submitted.complaint_id))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(timeline_response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(timeline_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let timeline: CaseTimelineResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(timeline.events.len(), 1);
        assert_eq!(timeline.events[0].action_name, "UpdateStatus");
        assert_eq!(timeline.events[0].actor_id, "ADMIN.ROOT");
    }

    #[tokio::test]
    async fn test_invalid_transition_is_unprocessable() {
        let app_state: AppState = create_test_app_state();
        seed_admin(&app_state).await;
        let app: Router = build_router(app_state);
        let token: String = login_token(&app, "admin.root", "MyAdminP@ss123").await;

        let submit_response = post_json(&app, "/complaints", None, &complaint_body()).await;
        let body_bytes = axum::body::to_bytes(submit_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let submitted: SubmitComplaintResponse = serde_json::from_slice(&body_bytes).unwrap();

        // PENDING cannot jump straight to RESOLVED.
        let status_body = serde_json::json!({
            "complaint_id": submitted.complaint_id,
            "new_status": "RESOLVED",
        });
        let response = post_json(&app, "/cases/status", Some(&token), &status_body).await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let app_state: AppState = create_test_app_state();
        seed_admin(&app_state).await;
        let app: Router = build_router(app_state);

        let body = serde_json::json!({
            "login_name": "admin.root",
            "password": "not-the-password",
        });
        let response = post_json(&app, "/login", None, &body).await;
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_board_post_and_duplicate_upvote() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let post_body = serde_json::json!({
            "content": "Speaking up made a difference for me.",
            "is_anonymous": true,
        });
        let response = post_json(&app, "/board/posts", None, &post_body).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: CreatePostResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(created.pseudonym.is_some());

        let upvote_body = serde_json::json!({
            "post_id": created.post_id,
            "voter_key": "user-7",
            "is_anonymous": false,
        });
        let first = post_json(&app, "/board/upvotes", None, &upvote_body).await;
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = post_json(&app, "/board/upvotes", None, &upvote_body).await;
        assert_eq!(second.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sos_listing_requires_session() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let sos_body = serde_json::json!({
            "latitude": 48.8584,
            "longitude": 2.2945,
            "location_link": "https://maps.example/?q=48.8584,2.2945",
        });
        let trigger = post_json(&app, "/sos", None, &sos_body).await;
        assert_eq!(trigger.status(), HttpStatusCode::OK);

        let listing = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/sos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(listing.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let app_state: AppState = create_test_app_state();
        seed_admin(&app_state).await;
        let app: Router = build_router(app_state);
        let token: String = login_token(&app, "admin.root", "MyAdminP@ss123").await;

        let logout_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(logout_response.status(), HttpStatusCode::OK);

        let whoami_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(whoami_response.status(), HttpStatusCode::UNAUTHORIZED);
    }
}
