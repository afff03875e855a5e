// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the harassment-reporting case system.
//!
//! This crate provides `SQLite` persistence (via Diesel) for complaint
//! cases, their append-only message threads, the community board, aid
//! requests, SOS alerts, operator accounts, sessions, and the per-case
//! audit trail.
//!
//! ## Testing Philosophy
//!
//! - Standard tests run against unique shared in-memory databases
//! - File-backed databases get WAL mode for read concurrency
//! - Foreign key enforcement is verified at startup and is a hard error
//!   when absent

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use caseline_audit::AuditEvent;
use caseline_domain::{AidRequest, AidStatus, Authorship, CaseStatus, Complaint, MessageSender, Priority, SosAlert};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    AidRequestRecord, AuditEventRecord, CommentRecord, ComplaintFilter, ComplaintPage,
    ComplaintRecord, MessageRecord, OperatorData, PostRecord, PostWithCounts, SessionData,
    SosAlertRecord,
};
pub use error::PersistenceError;

/// Persistence adapter owning a `SQLite` connection.
///
/// All reads and writes go through this adapter. It holds a single
/// connection; callers that need shared access wrap it in their own
/// synchronization.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Complaints
    // ========================================================================

    /// Inserts a validated complaint and returns its internal row id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateComplaintId` if the tracking id collides with an
    /// existing case, so the caller can regenerate the id and retry.
    pub fn insert_complaint(&mut self, complaint: &Complaint) -> Result<i64, PersistenceError> {
        mutations::insert_complaint(&mut self.conn, complaint)
    }

    /// Retrieves a complaint by its public tracking id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if no such complaint exists.
    pub fn get_complaint(
        &mut self,
        complaint_id: &str,
    ) -> Result<Option<ComplaintRecord>, PersistenceError> {
        queries::get_complaint(&mut self.conn, complaint_id)
    }

    /// Lists complaints for the officer dashboard, newest first.
    ///
    /// `page` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_complaints(
        &mut self,
        filter: &ComplaintFilter,
        page: i64,
        page_size: i64,
    ) -> Result<ComplaintPage, PersistenceError> {
        queries::list_complaints(&mut self.conn, filter, page, page_size)
    }

    /// Transitions a complaint's status, compare-and-set style.
    ///
    /// Returns `Ok(true)` when the transition applied, `Ok(false)` when the
    /// case exists but its status no longer matches `from` (a concurrent
    /// officer got there first).
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` if no case has this tracking id.
    pub fn update_complaint_status(
        &mut self,
        complaint_id: &str,
        from: CaseStatus,
        to: CaseStatus,
    ) -> Result<bool, PersistenceError> {
        let rows = mutations::update_complaint_status(&mut self.conn, complaint_id, from, to)?;
        if rows > 0 {
            return Ok(true);
        }
        match queries::get_complaint_pk(&mut self.conn, complaint_id)? {
            Some(_) => Ok(false),
            None => Err(PersistenceError::ComplaintNotFound(
                complaint_id.to_string(),
            )),
        }
    }

    /// Sets a complaint's triage priority. Last writer wins.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` if no case has this tracking id.
    pub fn update_complaint_priority(
        &mut self,
        complaint_id: &str,
        priority: Priority,
    ) -> Result<(), PersistenceError> {
        let rows = mutations::update_complaint_priority(&mut self.conn, complaint_id, priority)?;
        if rows == 0 {
            return Err(PersistenceError::ComplaintNotFound(
                complaint_id.to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Case thread
    // ========================================================================

    /// Appends a message to a case thread.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` if no case has this tracking id, or
    /// another error if the insert fails.
    pub fn append_message(
        &mut self,
        complaint_id: &str,
        sender: MessageSender,
        sender_name: &str,
        body: &str,
    ) -> Result<i64, PersistenceError> {
        let complaint_pk = queries::get_complaint_pk(&mut self.conn, complaint_id)?.ok_or_else(
            || PersistenceError::ComplaintNotFound(complaint_id.to_string()),
        )?;
        mutations::append_message(&mut self.conn, complaint_pk, sender, sender_name, body)
    }

    /// Lists the message thread for a case, in append order.
    ///
    /// A tracking id with no matching case yields an empty thread, not an
    /// error: reporters poll this with their tracking id and an empty list
    /// reveals nothing about which ids exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_messages(
        &mut self,
        complaint_id: &str,
    ) -> Result<Vec<MessageRecord>, PersistenceError> {
        match queries::get_complaint_pk(&mut self.conn, complaint_id)? {
            Some(complaint_pk) => queries::list_messages(&mut self.conn, complaint_pk),
            None => Ok(Vec::new()),
        }
    }

    // ========================================================================
    // Community board
    // ========================================================================

    /// Creates a board post and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_post(
        &mut self,
        content: &str,
        authorship: &Authorship,
        is_public: bool,
    ) -> Result<i64, PersistenceError> {
        mutations::insert_post(&mut self.conn, content, authorship, is_public)
    }

    /// Lists public board posts with counts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_posts(&mut self) -> Result<Vec<PostWithCounts>, PersistenceError> {
        queries::list_posts(&mut self.conn)
    }

    /// Retrieves a post by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if no such post exists.
    pub fn get_post(&mut self, post_id: i64) -> Result<Option<PostRecord>, PersistenceError> {
        queries::get_post(&mut self.conn, post_id)
    }

    /// Records an upvote on a post.
    ///
    /// # Errors
    ///
    /// Returns `PostNotFound` if the post does not exist, or
    /// `AlreadyUpvoted` if this voter key already voted on it.
    pub fn upvote_post(
        &mut self,
        post_id: i64,
        voter_key: &str,
        is_anonymous: bool,
    ) -> Result<i64, PersistenceError> {
        if queries::get_post(&mut self.conn, post_id)?.is_none() {
            return Err(PersistenceError::PostNotFound(post_id));
        }
        mutations::insert_upvote(&mut self.conn, post_id, voter_key, is_anonymous)?;
        queries::count_upvotes(&mut self.conn, post_id)
    }

    /// Adds a comment to a post.
    ///
    /// # Errors
    ///
    /// Returns `PostNotFound` if the post does not exist, or another error
    /// if the insert fails.
    pub fn comment_on_post(
        &mut self,
        post_id: i64,
        content: &str,
        authorship: &Authorship,
    ) -> Result<i64, PersistenceError> {
        if queries::get_post(&mut self.conn, post_id)?.is_none() {
            return Err(PersistenceError::PostNotFound(post_id));
        }
        mutations::insert_comment(&mut self.conn, post_id, content, authorship)
    }

    /// Lists the comments on a post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_comments(&mut self, post_id: i64) -> Result<Vec<CommentRecord>, PersistenceError> {
        queries::list_comments(&mut self.conn, post_id)
    }

    // ========================================================================
    // Aid requests
    // ========================================================================

    /// Inserts a validated aid request and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_aid_request(&mut self, request: &AidRequest) -> Result<i64, PersistenceError> {
        mutations::insert_aid_request(&mut self.conn, request)
    }

    /// Retrieves an aid request by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if no such request exists.
    pub fn get_aid_request(
        &mut self,
        request_id: i64,
    ) -> Result<Option<AidRequestRecord>, PersistenceError> {
        queries::get_aid_request(&mut self.conn, request_id)
    }

    /// Lists all aid requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_aid_requests(&mut self) -> Result<Vec<AidRequestRecord>, PersistenceError> {
        queries::list_aid_requests(&mut self.conn)
    }

    /// Updates the workflow status of an aid request.
    ///
    /// # Errors
    ///
    /// Returns `AidRequestNotFound` if no such request exists.
    pub fn update_aid_request_status(
        &mut self,
        request_id: i64,
        status: AidStatus,
    ) -> Result<(), PersistenceError> {
        let rows = mutations::update_aid_request_status(&mut self.conn, request_id, status)?;
        if rows == 0 {
            return Err(PersistenceError::AidRequestNotFound(request_id));
        }
        Ok(())
    }

    // ========================================================================
    // SOS alerts
    // ========================================================================

    /// Records a validated SOS alert and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_sos_alert(&mut self, alert: &SosAlert) -> Result<i64, PersistenceError> {
        mutations::insert_sos_alert(&mut self.conn, alert)
    }

    /// Lists all SOS alerts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_sos_alerts(&mut self) -> Result<Vec<SosAlertRecord>, PersistenceError> {
        queries::list_sos_alerts(&mut self.conn)
    }

    // ========================================================================
    // Audit trail
    // ========================================================================

    /// Persists an audit event for the case it names.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` if the event names a case that does not
    /// exist.
    pub fn record_audit_event(&mut self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        let complaint_id = event.complaint_id.value();
        let complaint_pk = queries::get_complaint_pk(&mut self.conn, complaint_id)?.ok_or_else(
            || PersistenceError::ComplaintNotFound(complaint_id.to_string()),
        )?;
        mutations::persist_audit_event(&mut self.conn, complaint_pk, event)
    }

    /// Retrieves the ordered audit timeline for a case.
    ///
    /// An unknown tracking id yields an empty timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_audit_timeline(
        &mut self,
        complaint_id: &str,
    ) -> Result<Vec<AuditEventRecord>, PersistenceError> {
        match queries::get_complaint_pk(&mut self.conn, complaint_id)? {
            Some(complaint_pk) => queries::get_audit_timeline(&mut self.conn, complaint_pk),
            None => Ok(Vec::new()),
        }
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Creates a new operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator cannot be created.
    pub fn create_operator(
        &mut self,
        login_name: &str,
        display_name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_operator(&mut self.conn, login_name, display_name, email, password, role)
    }

    /// Retrieves an operator by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_login(
        &mut self,
        login_name: &str,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::get_operator_by_login(&mut self.conn, login_name)
    }

    /// Retrieves an operator by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_id(
        &mut self,
        operator_id: i64,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::get_operator_by_id(&mut self.conn, operator_id)
    }

    /// Lists all operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_operators(&mut self) -> Result<Vec<OperatorData>, PersistenceError> {
        queries::list_operators(&mut self.conn)
    }

    /// Lists enabled operators with a given role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_operators_by_role(
        &mut self,
        role: &str,
    ) -> Result<Vec<OperatorData>, PersistenceError> {
        queries::list_operators_by_role(&mut self.conn, role)
    }

    /// Updates the last login timestamp for an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_last_login(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::update_last_login(&mut self.conn, operator_id)
    }

    /// Disables an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn disable_operator(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::disable_operator(&mut self.conn, operator_id)
    }

    /// Re-enables a disabled operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn enable_operator(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::enable_operator(&mut self.conn, operator_id)
    }

    /// Updates an operator's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not exist or the update fails.
    pub fn update_password(
        &mut self,
        operator_id: i64,
        new_password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::update_password(&mut self.conn, operator_id, new_password)
    }

    /// Verifies a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if password verification fails.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::verify_password(password, password_hash)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Creates a new session for an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        operator_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_session(&mut self.conn, session_token, operator_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::delete_expired_sessions(&mut self.conn)
    }

    /// Deletes all sessions for a specific operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_sessions_for_operator(
        &mut self,
        operator_id: i64,
    ) -> Result<usize, PersistenceError> {
        mutations::delete_sessions_for_operator(&mut self.conn, operator_id)
    }
}
