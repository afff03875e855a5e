// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::test_persistence;
use caseline_domain::{AidRequest, AidStatus, SosAlert};

fn sample_request() -> AidRequest {
    AidRequest::new(
        "Alex",
        "alex@example.org",
        "op-3",
        "Dr. Chen",
        "chen@example.org",
        "Need counselling",
        "I would like to talk to someone.",
    )
    .expect("valid request")
}

#[test]
fn test_aid_request_round_trip() {
    let mut persistence = test_persistence();

    let request_id = persistence.create_aid_request(&sample_request()).unwrap();

    let record = persistence
        .get_aid_request(request_id)
        .unwrap()
        .expect("request should exist");
    assert_eq!(record.status, "PENDING");
    assert_eq!(record.target_name, "Dr. Chen");
}

#[test]
fn test_aid_request_status_workflow() {
    let mut persistence = test_persistence();
    let request_id = persistence.create_aid_request(&sample_request()).unwrap();

    persistence
        .update_aid_request_status(request_id, AidStatus::Contacted)
        .unwrap();
    let record = persistence.get_aid_request(request_id).unwrap().unwrap();
    assert_eq!(record.status, "CONTACTED");

    persistence
        .update_aid_request_status(request_id, AidStatus::Closed)
        .unwrap();
    let record = persistence.get_aid_request(request_id).unwrap().unwrap();
    assert_eq!(record.status, "CLOSED");
}

#[test]
fn test_aid_request_status_unknown_id() {
    let mut persistence = test_persistence();

    let err = persistence
        .update_aid_request_status(404, AidStatus::Contacted)
        .unwrap_err();
    assert_eq!(err, PersistenceError::AidRequestNotFound(404));
}

#[test]
fn test_aid_requests_listed_newest_first() {
    let mut persistence = test_persistence();
    let first = persistence.create_aid_request(&sample_request()).unwrap();
    let second = persistence.create_aid_request(&sample_request()).unwrap();

    let requests = persistence.list_aid_requests().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].request_id, second);
    assert_eq!(requests[1].request_id, first);
}

#[test]
fn test_sos_alert_round_trip_with_defaults() {
    let mut persistence = test_persistence();

    let alert = SosAlert::new(
        None,
        None,
        None,
        48.8584,
        2.2945,
        "https://maps.example/?q=48.8584,2.2945",
        None,
    )
    .expect("valid alert");

    persistence.record_sos_alert(&alert).unwrap();

    let alerts = persistence.list_sos_alerts().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].name, "Anonymous");
    assert_eq!(alerts[0].email, "N/A");
    assert_eq!(alerts[0].message, "Emergency! SOS alert triggered.");
    assert!((alerts[0].latitude - 48.8584).abs() < f64::EPSILON);
}
