// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::test_persistence;
use caseline_domain::{Author, Authorship};

fn identified() -> Authorship {
    Authorship::Identified(Author {
        id: String::from("user-5"),
        name: String::from("Jordan"),
        email: Some(String::from("jordan@example.org")),
    })
}

fn pseudonymous() -> Authorship {
    Authorship::Pseudonymous {
        pseudonym: String::from("BraveOtter123"),
    }
}

#[test]
fn test_create_and_list_posts_newest_first() {
    let mut persistence = test_persistence();

    let first = persistence
        .create_post("First post", &identified(), true)
        .unwrap();
    let second = persistence
        .create_post("Second post", &pseudonymous(), true)
        .unwrap();

    let posts = persistence.list_posts().unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].post.post_id, second);
    assert_eq!(posts[0].post.pseudonym.as_deref(), Some("BraveOtter123"));
    assert_eq!(posts[0].post.author_id, None);
    assert_eq!(posts[1].post.post_id, first);
    assert_eq!(posts[1].post.author_name.as_deref(), Some("Jordan"));
    assert_eq!(posts[1].post.pseudonym, None);
}

#[test]
fn test_private_posts_not_listed() {
    let mut persistence = test_persistence();

    persistence
        .create_post("Visible", &pseudonymous(), true)
        .unwrap();
    persistence
        .create_post("Hidden", &pseudonymous(), false)
        .unwrap();

    let posts = persistence.list_posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post.content, "Visible");
}

#[test]
fn test_upvotes_deduplicate_per_voter() {
    let mut persistence = test_persistence();
    let post_id = persistence
        .create_post("Upvote me", &pseudonymous(), true)
        .unwrap();

    let count = persistence.upvote_post(post_id, "user-5", false).unwrap();
    assert_eq!(count, 1);

    let err = persistence.upvote_post(post_id, "user-5", false).unwrap_err();
    assert_eq!(
        err,
        PersistenceError::AlreadyUpvoted {
            post_id,
            voter_key: String::from("user-5"),
        }
    );

    let count = persistence.upvote_post(post_id, "anon-key-1", true).unwrap();
    assert_eq!(count, 2);

    let posts = persistence.list_posts().unwrap();
    assert_eq!(posts[0].upvote_count, 2);
}

#[test]
fn test_upvote_unknown_post_rejected() {
    let mut persistence = test_persistence();

    let err = persistence.upvote_post(404, "user-5", false).unwrap_err();
    assert_eq!(err, PersistenceError::PostNotFound(404));
}

#[test]
fn test_comments_in_order() {
    let mut persistence = test_persistence();
    let post_id = persistence
        .create_post("Discuss", &pseudonymous(), true)
        .unwrap();

    persistence
        .comment_on_post(post_id, "First comment", &identified())
        .unwrap();
    persistence
        .comment_on_post(post_id, "Second comment", &pseudonymous())
        .unwrap();

    let comments = persistence.list_comments(post_id).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "First comment");
    assert_eq!(comments[1].pseudonym.as_deref(), Some("BraveOtter123"));

    let posts = persistence.list_posts().unwrap();
    assert_eq!(posts[0].comment_count, 2);
}

#[test]
fn test_comment_on_unknown_post_rejected() {
    let mut persistence = test_persistence();

    let err = persistence
        .comment_on_post(404, "hello", &pseudonymous())
        .unwrap_err();
    assert_eq!(err, PersistenceError::PostNotFound(404));
}
