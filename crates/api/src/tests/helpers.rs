// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use caseline_audit::Cause;
use caseline_persistence::Persistence;

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers;
use crate::request_response::{SubmitComplaintRequest, SubmitComplaintResponse};

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_test_officer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("OFFICER.RILEY"), Role::Officer)
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ADMIN.ROOT"), Role::Admin)
}

pub fn create_test_counsellor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("COUNSELLOR.CHEN"), Role::Counsellor)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn valid_complaint_request() -> SubmitComplaintRequest {
    SubmitComplaintRequest {
        is_anonymous: false,
        user_id: Some(String::from("user-77")),
        full_name: Some(String::from("Alex Reporter")),
        email: Some(String::from("alex@example.org")),
        incident_type: Some(String::from("WORKPLACE")),
        incident_description: Some(String::from(
            "Repeated verbal harassment by a supervisor over several weeks.",
        )),
        incident_date: Some(String::from("2026-02-14")),
        incident_time: None,
        incident_location: Some(String::from("Head office")),
        accused_name: Some(String::from("P. Manager")),
        accused_position: None,
        organization: None,
        witnesses: vec![String::from("Sam")],
        previous_incidents: None,
        emotional_state: Some(String::from("ANXIOUS")),
        need_immediate_help: false,
    }
}

/// Submits a valid complaint and returns the response.
pub fn submit_test_complaint(persistence: &mut Persistence) -> SubmitComplaintResponse {
    handlers::submit_complaint(persistence, valid_complaint_request())
        .expect("valid complaint should be accepted")
}
