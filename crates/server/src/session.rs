// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer-token session extraction for officer endpoints.
//!
//! Triage, audit, and operator-management routes take a [`SessionOperator`]
//! argument; public intake, tracking, board, and SOS-trigger routes do not.
//! Rejections carry no hint about which tokens or operators exist.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use caseline_api::{AuthenticatedActor, AuthenticationService};
use caseline_persistence::OperatorData;
use tracing::{debug, warn};

use crate::AppState;

/// The operator behind a validated `Authorization: Bearer <token>` header.
///
/// Extraction resolves the token against the session store, which also
/// checks expiry and the operator's disabled flag. Any failure rejects the
/// request with 401 before the handler body runs, so a handler holding a
/// `SessionOperator` can assume a live session for an enabled operator.
pub struct SessionOperator(pub AuthenticatedActor, pub OperatorData);

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Officer endpoint called without credentials");
                SessionRejection::NoCredentials
            })?
            .to_str()
            .map_err(|_| {
                warn!("Authorization header is not valid UTF-8");
                SessionRejection::MalformedHeader
            })?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header is not a bearer token");
            SessionRejection::MalformedHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let (actor, operator) = AuthenticationService::validate_session(&mut persistence, token)
            .map_err(|e| {
                warn!(error = %e, "Rejected session token");
                SessionRejection::RejectedToken(e.to_string())
            })?;

        debug!(
            login_name = %operator.login_name,
            role = ?actor.role,
            "Operator session accepted"
        );

        Ok(Self(actor, operator))
    }
}

/// Why session extraction turned a request away. Every variant maps to 401.
#[derive(Debug)]
pub enum SessionRejection {
    /// No Authorization header on the request.
    NoCredentials,
    /// Header present but not a well-formed bearer token.
    MalformedHeader,
    /// Token did not resolve to a live session for an enabled operator.
    RejectedToken(String),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::NoCredentials => {
                String::from("This endpoint is restricted to case officers; log in first")
            }
            Self::MalformedHeader => {
                String::from("Authorization header must be of the form 'Bearer <session token>'")
            }
            Self::RejectedToken(reason) => format!("Not signed in: {reason}"),
        };

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
