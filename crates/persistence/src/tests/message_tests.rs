// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{sample_complaint, test_persistence};
use crate::{Persistence, PersistenceError};
use caseline_domain::MessageSender;

#[test]
fn test_append_and_list_preserves_order() {
    let mut persistence = test_persistence();
    persistence.insert_complaint(&sample_complaint(1101)).unwrap();

    persistence
        .append_message(
            "SHC-2026-1101",
            MessageSender::Complainee,
            "Anonymous",
            "Is there any update on my case?",
        )
        .unwrap();
    persistence
        .append_message(
            "SHC-2026-1101",
            MessageSender::Officer,
            "Officer",
            "We have opened an investigation.",
        )
        .unwrap();
    persistence
        .append_message(
            "SHC-2026-1101",
            MessageSender::Complainee,
            "Anonymous",
            "Thank you.",
        )
        .unwrap();

    let thread = persistence.list_messages("SHC-2026-1101").unwrap();

    assert_eq!(thread.len(), 3);
    assert_eq!(thread[0].body, "Is there any update on my case?");
    assert_eq!(thread[1].sender, "officer");
    assert_eq!(thread[1].sender_name, "Officer");
    assert_eq!(thread[2].body, "Thank you.");
    assert!(thread[0].message_id < thread[1].message_id);
    assert!(thread[1].message_id < thread[2].message_id);
}

#[test]
fn test_append_to_unknown_case_rejected() {
    let mut persistence = test_persistence();

    let err = persistence
        .append_message("SHC-2026-7777", MessageSender::Public, "Anonymous", "hello")
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::ComplaintNotFound(String::from("SHC-2026-7777"))
    );
}

#[test]
fn test_list_for_unknown_case_is_empty() {
    let mut persistence = test_persistence();

    // Reporters poll the thread with their tracking id; an unknown id gets
    // an empty thread rather than an existence oracle.
    let thread = persistence.list_messages("SHC-2026-7777").unwrap();
    assert!(thread.is_empty());
}

#[test]
fn test_concurrent_appends_never_lose_a_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("caseline.sqlite3");

    let mut persistence = Persistence::new_with_file(&db_path).unwrap();
    persistence.insert_complaint(&sample_complaint(1104)).unwrap();
    drop(persistence);

    // Each officer appends through their own connection to the same
    // file-backed WAL database.
    let spawn_appender = |sender_name: &'static str| {
        let path = db_path.clone();
        std::thread::spawn(move || {
            let mut persistence = Persistence::new_with_file(&path).unwrap();
            for i in 0..5 {
                persistence
                    .append_message(
                        "SHC-2026-1104",
                        MessageSender::Officer,
                        sender_name,
                        &format!("update {i} from {sender_name}"),
                    )
                    .unwrap();
            }
        })
    };

    let first = spawn_appender("Officer One");
    let second = spawn_appender("Officer Two");
    first.join().unwrap();
    second.join().unwrap();

    let mut persistence = Persistence::new_with_file(&db_path).unwrap();
    let thread = persistence.list_messages("SHC-2026-1104").unwrap();

    assert_eq!(thread.len(), 10);
    let from_first = thread
        .iter()
        .filter(|m| m.sender_name == "Officer One")
        .count();
    assert_eq!(from_first, 5);
}

#[test]
fn test_threads_are_isolated_per_case() {
    let mut persistence = test_persistence();
    persistence.insert_complaint(&sample_complaint(1102)).unwrap();
    persistence.insert_complaint(&sample_complaint(1103)).unwrap();

    persistence
        .append_message("SHC-2026-1102", MessageSender::Officer, "Officer", "A")
        .unwrap();
    persistence
        .append_message("SHC-2026-1103", MessageSender::Officer, "Officer", "B")
        .unwrap();

    let thread = persistence.list_messages("SHC-2026-1102").unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].body, "A");
}
