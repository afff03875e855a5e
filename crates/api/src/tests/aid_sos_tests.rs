// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Mutex;

use caseline_domain::SosAlert;

use crate::error::ApiError;
use crate::handlers;
use crate::notify::SosNotifier;
use crate::request_response::{
    SubmitAidRequestRequest, TriggerSosRequest, UpdateAidStatusRequest,
};
use crate::tests::helpers::{create_test_admin, create_test_officer, test_persistence};

struct RecordingNotifier {
    alerts: Mutex<Vec<SosAlert>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
        }
    }
}

impl SosNotifier for RecordingNotifier {
    fn notify(&self, alert: &SosAlert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}

fn aid_request() -> SubmitAidRequestRequest {
    SubmitAidRequestRequest {
        requester_name: String::from("Alex"),
        requester_email: String::from("alex@example.org"),
        target_id: String::from("3"),
        target_name: String::from("Dr. Chen"),
        target_email: String::from("chen@example.org"),
        subject: String::from("Need counselling"),
        message: String::from("I would like to talk to someone."),
    }
}

fn sos_request() -> TriggerSosRequest {
    TriggerSosRequest {
        user_id: None,
        name: None,
        email: None,
        latitude: 48.8584,
        longitude: 2.2945,
        location_link: String::from("https://maps.example/?q=48.8584,2.2945"),
        message: None,
    }
}

#[test]
fn test_aid_request_workflow() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();

    let submitted = handlers::submit_aid_request(&mut persistence, aid_request()).unwrap();
    assert_eq!(submitted.status, "PENDING");

    let updated = handlers::update_aid_status(
        &mut persistence,
        UpdateAidStatusRequest {
            request_id: submitted.request_id,
            status: String::from("CONTACTED"),
        },
        &officer,
    )
    .unwrap();
    assert_eq!(updated.status, "CONTACTED");

    let listed = handlers::list_aid_requests(&mut persistence, &officer).unwrap();
    assert_eq!(listed.requests.len(), 1);
    assert_eq!(listed.requests[0].status, "CONTACTED");
}

#[test]
fn test_aid_request_blank_subject_rejected() {
    let mut persistence = test_persistence();
    let mut request = aid_request();
    request.subject = String::from("  ");

    let err = handlers::submit_aid_request(&mut persistence, request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "subject"));
}

#[test]
fn test_aid_status_unknown_value_rejected() {
    let mut persistence = test_persistence();
    let officer = create_test_officer();
    let request_id = handlers::submit_aid_request(&mut persistence, aid_request())
        .unwrap()
        .request_id;

    let err = handlers::update_aid_status(
        &mut persistence,
        UpdateAidStatusRequest {
            request_id,
            status: String::from("RESOLVED"),
        },
        &officer,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_staff_directory_lists_active_counsellors_and_lawyers() {
    let mut persistence = test_persistence();
    persistence
        .create_operator("c1", "Dr. Chen", "chen@example.org", "password-123", "Counsellor")
        .unwrap();
    persistence
        .create_operator("l1", "Adv. Diaz", "diaz@example.org", "password-123", "Lawyer")
        .unwrap();
    let disabled = persistence
        .create_operator("c2", "Dr. Gone", "gone@example.org", "password-123", "Counsellor")
        .unwrap();
    persistence.disable_operator(disabled).unwrap();

    let directory = handlers::staff_directory(&mut persistence).unwrap();

    assert_eq!(directory.counsellors.len(), 1);
    assert_eq!(directory.counsellors[0].display_name, "Dr. Chen");
    assert_eq!(directory.lawyers.len(), 1);
    assert_eq!(directory.lawyers[0].role, "Lawyer");
}

#[test]
fn test_sos_trigger_stores_and_notifies() {
    let mut persistence = test_persistence();
    let admin = create_test_admin();
    let notifier = RecordingNotifier::new();

    handlers::trigger_sos(&mut persistence, sos_request(), &notifier).unwrap();

    let delivered = notifier.alerts.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Anonymous");
    drop(delivered);

    let listed = handlers::list_sos_alerts(&mut persistence, &admin).unwrap();
    assert_eq!(listed.alerts.len(), 1);
    assert_eq!(listed.alerts[0].message, "Emergency! SOS alert triggered.");
}

#[test]
fn test_sos_invalid_coordinates_rejected() {
    let mut persistence = test_persistence();
    let notifier = RecordingNotifier::new();
    let mut request = sos_request();
    request.latitude = 91.0;

    let err = handlers::trigger_sos(&mut persistence, request, &notifier).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "coordinates"));
    assert!(notifier.alerts.lock().unwrap().is_empty());
}
