// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use caseline_domain::ComplaintId;

use crate::error::ApiError;
use crate::handlers;
use crate::tests::helpers::{submit_test_complaint, test_persistence, valid_complaint_request};

#[test]
fn test_submission_returns_valid_tracking_id() {
    let mut persistence = test_persistence();

    let response = submit_test_complaint(&mut persistence);

    assert!(ComplaintId::parse(&response.complaint_id).is_ok());
    assert_eq!(response.status, "PENDING");
}

#[test]
fn test_submission_rejects_short_description() {
    let mut persistence = test_persistence();
    let mut request = valid_complaint_request();
    request.incident_description = Some(String::from("too short"));

    let err = handlers::submit_complaint(&mut persistence, request).unwrap_err();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "incident_description"
    ));
}

#[test]
fn test_submission_rejects_missing_incident_type() {
    let mut persistence = test_persistence();
    let mut request = valid_complaint_request();
    request.incident_type = None;

    let err = handlers::submit_complaint(&mut persistence, request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_anonymous_submission_strips_identity() {
    let mut persistence = test_persistence();
    let mut request = valid_complaint_request();
    request.is_anonymous = true;

    let response = handlers::submit_complaint(&mut persistence, request).unwrap();

    let record = persistence
        .get_complaint(&response.complaint_id)
        .unwrap()
        .expect("complaint should exist");
    assert!(record.is_anonymous);
    assert_eq!(record.user_id, None);
    assert_eq!(record.full_name, None);
    assert_eq!(record.submitter_email, None);
}

#[test]
fn test_tracking_view_shows_triage_state_only() {
    let mut persistence = test_persistence();
    let response = submit_test_complaint(&mut persistence);

    let view = handlers::get_tracking_view(&mut persistence, &response.complaint_id).unwrap();

    assert_eq!(view.complaint_id, response.complaint_id);
    assert_eq!(view.status, "PENDING");
    assert_eq!(view.priority, None);
}

#[test]
fn test_tracking_view_rejects_malformed_id() {
    let mut persistence = test_persistence();

    let err = handlers::get_tracking_view(&mut persistence, "not-an-id").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_tracking_view_unknown_id_not_found() {
    let mut persistence = test_persistence();

    let err = handlers::get_tracking_view(&mut persistence, "SHC-2026-9999").unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_distinct_submissions_get_distinct_ids() {
    let mut persistence = test_persistence();

    let first = submit_test_complaint(&mut persistence);
    let second = submit_test_complaint(&mut persistence);

    assert_ne!(first.complaint_id, second.complaint_id);
}
