// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{self, DASHBOARD_PAGE_SIZE};
use crate::request_response::{
    ListCasesRequest, UpdatePriorityRequest, UpdateStatusRequest,
};
use crate::tests::helpers::{
    create_test_cause, create_test_officer, submit_test_complaint, test_persistence,
};

#[test]
fn test_status_transition_records_audit_event() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    let response = handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id: complaint_id.clone(),
            new_status: String::from("IN_PROGRESS"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.old_status, "PENDING");
    assert_eq!(response.new_status, "IN_PROGRESS");

    let timeline =
        handlers::get_case_timeline(&mut persistence, &complaint_id, &officer).unwrap();
    assert_eq!(timeline.events.len(), 1);
    assert_eq!(timeline.events[0].action_name, "UpdateStatus");
    assert_eq!(timeline.events[0].actor_id, "OFFICER.RILEY");
    assert_eq!(timeline.events[0].before, "status=PENDING");
    assert_eq!(timeline.events[0].after, "status=IN_PROGRESS");
    assert_eq!(timeline.events[0].event_id, response.event_id);
}

#[test]
fn test_invalid_transition_rejected() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    // A pending case cannot jump straight to resolved.
    let err = handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id,
            new_status: String::from("RESOLVED"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == "status_transition"));
}

#[test]
fn test_closed_case_cannot_be_reopened() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id: complaint_id.clone(),
            new_status: String::from("REJECTED"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap();

    let err = handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id,
            new_status: String::from("IN_PROGRESS"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn test_status_update_unknown_case_not_found() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let err = handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id: String::from("SHC-2026-9999"),
            new_status: String::from("IN_PROGRESS"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_priority_update_records_audit_event() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    let response = handlers::update_priority(
        &mut persistence,
        UpdatePriorityRequest {
            complaint_id: complaint_id.clone(),
            priority: String::from("HIGH"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.old_priority, None);
    assert_eq!(response.new_priority, "HIGH");

    let timeline =
        handlers::get_case_timeline(&mut persistence, &complaint_id, &officer).unwrap();
    assert_eq!(timeline.events.len(), 1);
    assert_eq!(timeline.events[0].before, "priority=");
    assert_eq!(timeline.events[0].after, "priority=HIGH");
}

#[test]
fn test_priority_update_is_last_writer_wins() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    for priority in ["LOW", "HIGH"] {
        handlers::update_priority(
            &mut persistence,
            UpdatePriorityRequest {
                complaint_id: complaint_id.clone(),
                priority: String::from(priority),
            },
            &officer,
            create_test_cause(),
        )
        .unwrap();
    }

    let record = persistence.get_complaint(&complaint_id).unwrap().unwrap();
    assert_eq!(record.priority.as_deref(), Some("HIGH"));
}

#[test]
fn test_invalid_priority_rejected() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let complaint_id = submit_test_complaint(&mut persistence).complaint_id;

    let err = handlers::update_priority(
        &mut persistence,
        UpdatePriorityRequest {
            complaint_id,
            priority: String::from("URGENT"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "priority"));
}

#[test]
fn test_dashboard_pagination() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    for _ in 0..12 {
        submit_test_complaint(&mut persistence);
    }

    let page_one = handlers::list_cases(
        &mut persistence,
        ListCasesRequest::default(),
        &officer,
    )
    .unwrap();

    assert_eq!(page_one.page, 1);
    assert_eq!(page_one.page_size, DASHBOARD_PAGE_SIZE);
    assert_eq!(page_one.total, 12);
    assert_eq!(page_one.total_pages, 2);
    assert_eq!(page_one.cases.len(), 10);

    let page_two = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            page: 2,
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap();
    assert_eq!(page_two.cases.len(), 2);
}

#[test]
fn test_dashboard_filter_by_status() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let taken_up = submit_test_complaint(&mut persistence).complaint_id;
    submit_test_complaint(&mut persistence);

    handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id: taken_up.clone(),
            new_status: String::from("IN_PROGRESS"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap();

    let response = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            status: Some(String::from("IN_PROGRESS")),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.cases[0].complaint_id, taken_up);
}

#[test]
fn test_dashboard_text_search_combines_with_status() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let taken_up = submit_test_complaint(&mut persistence).complaint_id;
    submit_test_complaint(&mut persistence);

    // Lowercase substring of the tracking id.
    let response = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            q: Some(taken_up.to_lowercase()),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.cases[0].complaint_id, taken_up);

    // Substring of the submitter email matches both.
    let response = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            q: Some(String::from("example.org")),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap();
    assert_eq!(response.total, 2);

    handlers::update_status(
        &mut persistence,
        UpdateStatusRequest {
            complaint_id: taken_up.clone(),
            new_status: String::from("IN_PROGRESS"),
        },
        &officer,
        create_test_cause(),
    )
    .unwrap();

    // Text search narrows the status filter, not the other way around.
    let response = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            status: Some(String::from("IN_PROGRESS")),
            q: Some(String::from("example.org")),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.cases[0].complaint_id, taken_up);
}

#[test]
fn test_dashboard_rejects_unknown_filter_values() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let err = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            status: Some(String::from("IN_REVIEW")),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));

    let err = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            incident_type: Some(String::from("OFFICE")),
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_dashboard_rejects_page_zero() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let err = handlers::list_cases(
        &mut persistence,
        ListCasesRequest {
            page: 0,
            ..ListCasesRequest::default()
        },
        &officer,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "page"));
}
