// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod aid_sos_tests;
mod board_tests;
mod message_tests;

use crate::Persistence;
use caseline_domain::{Complaint, ComplaintDraft, ComplaintId};

/// Creates a fresh, isolated in-memory persistence adapter.
pub(crate) fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

/// Builds a valid complaint with the given serial for its tracking id.
pub(crate) fn sample_complaint(serial: u16) -> Complaint {
    let id = ComplaintId::new(2026, serial).expect("valid serial");
    let draft = ComplaintDraft {
        is_anonymous: false,
        user_id: Some(String::from("user-11")),
        full_name: Some(String::from("Alex Reporter")),
        submitter_email: Some(String::from("alex@example.org")),
        incident_type: Some(String::from("WORKPLACE")),
        incident_description: Some(String::from(
            "Repeated verbal harassment by a supervisor over several weeks.",
        )),
        incident_date: Some(String::from("2026-02-14")),
        emotional_state: Some(String::from("ANXIOUS")),
        witnesses: vec![String::from("Sam")],
        ..ComplaintDraft::default()
    };
    Complaint::from_draft(id, draft).expect("valid draft")
}
