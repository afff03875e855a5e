// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Community board mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::{post_comments, post_upvotes, posts};
use crate::error::{PersistenceError, is_unique_violation};
use crate::mutations::now_rfc3339;
use crate::sqlite::get_last_insert_rowid;
use caseline_domain::Authorship;

/// Splits an authorship into the nullable column values.
///
/// Identified posts carry the author columns and leave `pseudonym` NULL;
/// pseudonymous posts do the reverse.
fn authorship_columns(
    authorship: &Authorship,
) -> (
    Option<&str>,
    Option<&str>,
    Option<&str>,
    Option<&str>,
) {
    match authorship {
        Authorship::Identified(author) => (
            Some(author.id.as_str()),
            Some(author.name.as_str()),
            author.email.as_deref(),
            None,
        ),
        Authorship::Pseudonymous { pseudonym } => (None, None, None, Some(pseudonym.as_str())),
    }
}

/// Inserts a board post.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_post(
    conn: &mut SqliteConnection,
    content: &str,
    authorship: &Authorship,
    is_public: bool,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;
    let (author_id, author_name, author_email, pseudonym) = authorship_columns(authorship);

    diesel::insert_into(posts::table)
        .values((
            posts::content.eq(content),
            posts::author_id.eq(author_id),
            posts::author_name.eq(author_name),
            posts::author_email.eq(author_email),
            posts::pseudonym.eq(pseudonym),
            posts::is_public.eq(is_public),
            posts::created_at.eq(&now),
        ))
        .execute(conn)?;

    let post_id: i64 = get_last_insert_rowid(conn)?;
    info!(post_id, "Board post created");

    Ok(post_id)
}

/// Records an upvote for a post.
///
/// The UNIQUE constraint on `(post_id, voter_key)` deduplicates votes: a
/// second vote from the same key surfaces as `AlreadyUpvoted` and changes
/// nothing.
///
/// # Errors
///
/// Returns `AlreadyUpvoted` on a duplicate vote, or another error if the
/// insert fails.
pub fn insert_upvote(
    conn: &mut SqliteConnection,
    post_id: i64,
    voter_key: &str,
    is_anonymous: bool,
) -> Result<(), PersistenceError> {
    let now: String = now_rfc3339()?;

    debug!(post_id, "Recording upvote");

    let result = diesel::insert_into(post_upvotes::table)
        .values((
            post_upvotes::post_id.eq(post_id),
            post_upvotes::voter_key.eq(voter_key),
            post_upvotes::is_anonymous.eq(is_anonymous),
            post_upvotes::created_at.eq(&now),
        ))
        .execute(conn);

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(PersistenceError::AlreadyUpvoted {
            post_id,
            voter_key: voter_key.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Inserts a comment on a post.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_comment(
    conn: &mut SqliteConnection,
    post_id: i64,
    content: &str,
    authorship: &Authorship,
) -> Result<i64, PersistenceError> {
    let now: String = now_rfc3339()?;
    let (author_id, author_name, author_email, pseudonym) = authorship_columns(authorship);

    diesel::insert_into(post_comments::table)
        .values((
            post_comments::post_id.eq(post_id),
            post_comments::content.eq(content),
            post_comments::author_id.eq(author_id),
            post_comments::author_name.eq(author_name),
            post_comments::author_email.eq(author_email),
            post_comments::pseudonym.eq(pseudonym),
            post_comments::created_at.eq(&now),
        ))
        .execute(conn)?;

    let comment_id: i64 = get_last_insert_rowid(conn)?;
    debug!(post_id, comment_id, "Comment added");

    Ok(comment_id)
}
