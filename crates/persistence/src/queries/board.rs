// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Community board queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::dsl::count_star;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{CommentRecord, PostRecord, PostWithCounts};
use crate::diesel_schema::{post_comments, post_upvotes, posts};
use crate::error::PersistenceError;

/// Diesel Queryable struct for post rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = posts)]
struct PostRow {
    post_id: i64,
    content: String,
    author_id: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    pseudonym: Option<String>,
    is_public: bool,
    created_at: String,
}

/// Diesel Queryable struct for comment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = post_comments)]
struct CommentRow {
    comment_id: i64,
    post_id: i64,
    content: String,
    author_id: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    pseudonym: Option<String>,
    created_at: String,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            post_id: row.post_id,
            content: row.content,
            author_id: row.author_id,
            author_name: row.author_name,
            author_email: row.author_email,
            pseudonym: row.pseudonym,
            is_public: row.is_public,
            created_at: row.created_at,
        }
    }
}

impl From<CommentRow> for CommentRecord {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: row.comment_id,
            post_id: row.post_id,
            content: row.content,
            author_id: row.author_id,
            author_name: row.author_name,
            author_email: row.author_email,
            pseudonym: row.pseudonym,
            created_at: row.created_at,
        }
    }
}

/// Retrieves a post by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such post exists.
pub fn get_post(
    conn: &mut SqliteConnection,
    post_id: i64,
) -> Result<Option<PostRecord>, PersistenceError> {
    let result: Result<PostRow, diesel::result::Error> = posts::table
        .filter(posts::post_id.eq(post_id))
        .select(PostRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists public board posts with their upvote and comment counts, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_posts(conn: &mut SqliteConnection) -> Result<Vec<PostWithCounts>, PersistenceError> {
    debug!("Listing board posts");

    let rows: Vec<PostRow> = posts::table
        .filter(posts::is_public.eq(true))
        .order_by(posts::post_id.desc())
        .select(PostRow::as_select())
        .load(conn)?;

    // Two grouped count queries instead of a per-post round trip.
    let upvote_counts: HashMap<i64, i64> = post_upvotes::table
        .group_by(post_upvotes::post_id)
        .select((post_upvotes::post_id, count_star()))
        .load::<(i64, i64)>(conn)?
        .into_iter()
        .collect();

    let comment_counts: HashMap<i64, i64> = post_comments::table
        .group_by(post_comments::post_id)
        .select((post_comments::post_id, count_star()))
        .load::<(i64, i64)>(conn)?
        .into_iter()
        .collect();

    Ok(rows
        .into_iter()
        .map(|row| {
            let post_id = row.post_id;
            PostWithCounts {
                post: row.into(),
                upvote_count: upvote_counts.get(&post_id).copied().unwrap_or(0),
                comment_count: comment_counts.get(&post_id).copied().unwrap_or(0),
            }
        })
        .collect())
}

/// Counts the upvotes on a post.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_upvotes(conn: &mut SqliteConnection, post_id: i64) -> Result<i64, PersistenceError> {
    let count: i64 = post_upvotes::table
        .filter(post_upvotes::post_id.eq(post_id))
        .count()
        .get_result(conn)?;

    Ok(count)
}

/// Lists the comments on a post, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_comments(
    conn: &mut SqliteConnection,
    post_id: i64,
) -> Result<Vec<CommentRecord>, PersistenceError> {
    let rows: Vec<CommentRow> = post_comments::table
        .filter(post_comments::post_id.eq(post_id))
        .order_by(post_comments::comment_id.asc())
        .select(CommentRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
