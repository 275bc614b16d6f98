//! Board services for anonboard.
//!
//! This module provides the two high-level operation sets over the board
//! aggregate: read views with recency sorting and truncation
//! ([`ListingService`]) and the password-gated moderation operations
//! ([`ModerationService`]).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::{hash_password, verify_password, PasswordError};
use crate::db::Database;
use crate::{AnonboardError, Result};

use super::repository::BoardRepository;
use super::types::{Reply, Thread};

/// Maximum number of threads returned by the board list view.
pub const THREAD_LIST_LIMIT: usize = 10;

/// Maximum number of replies shown per thread in the board list view.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Outcome of a password-gated delete.
///
/// A wrong password is a normal negative result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Password matched; the delete was applied.
    Deleted,
    /// Password did not match; nothing was changed.
    IncorrectPassword,
}

impl DeleteOutcome {
    /// Convert the outcome to its wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "success",
            DeleteOutcome::IncorrectPassword => "incorrect password",
        }
    }
}

/// Reply as shown in the board list view.
#[derive(Debug, Clone, Serialize)]
pub struct ReplySummary {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

/// Thread as shown in the board list view: the reply sequence is
/// truncated to the most recent [`REPLY_PREVIEW_LIMIT`] replies.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Most recent replies, newest first.
    pub replies: Vec<ReplySummary>,
}

/// Reply as shown in the thread detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyDetail {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text (the redaction sentinel for soft-deleted replies).
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Set at creation.
    pub bumped_on: DateTime<Utc>,
}

/// Thread detail view: every reply is included, soft-deleted ones with
/// their redacted text.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetail {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// All replies, in insertion order.
    pub replies: Vec<ReplyDetail>,
}

/// Parse a requested identifier into its canonical form.
///
/// Identifiers that fail to parse behave exactly like absent ones, so
/// callers get a not-found outcome rather than a validation error.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn not_found(what: &str) -> AnonboardError {
    AnonboardError::NotFound(what.to_string())
}

/// Service for the truncated and sorted read views.
pub struct ListingService<'a> {
    db: &'a Database,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List the most recently bumped threads of a board.
    ///
    /// Threads are sorted by `bumped_on` descending and truncated to
    /// [`THREAD_LIST_LIMIT`]; each thread carries its
    /// [`REPLY_PREVIEW_LIMIT`] most recent replies. Ties keep store
    /// order (the sort is stable).
    pub async fn list_recent_threads(&self, board_name: &str) -> Result<Vec<ThreadSummary>> {
        let repo = BoardRepository::new(self.db.pool());
        let board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let mut threads: Vec<&Thread> = board.threads.iter().collect();
        threads.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));

        Ok(threads
            .into_iter()
            .take(THREAD_LIST_LIMIT)
            .map(Self::summarize_thread)
            .collect())
    }

    /// Get a full thread, including every reply.
    pub async fn get_thread(&self, board_name: &str, thread_id: &str) -> Result<ThreadDetail> {
        let repo = BoardRepository::new(self.db.pool());
        let board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let thread = parse_id(thread_id)
            .and_then(|id| board.find_thread(id))
            .ok_or_else(|| not_found("Thread"))?;

        Ok(ThreadDetail {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: thread
                .replies
                .iter()
                .map(|r| ReplyDetail {
                    id: r.id,
                    text: r.text.clone(),
                    created_on: r.created_on,
                    bumped_on: r.bumped_on,
                })
                .collect(),
        })
    }

    fn summarize_thread(thread: &Thread) -> ThreadSummary {
        let mut replies: Vec<&Reply> = thread.replies.iter().collect();
        replies.sort_by(|a, b| b.created_on.cmp(&a.created_on));

        ThreadSummary {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: replies
                .into_iter()
                .take(REPLY_PREVIEW_LIMIT)
                .map(|r| ReplySummary {
                    id: r.id,
                    text: r.text.clone(),
                    created_on: r.created_on,
                })
                .collect(),
        }
    }
}

/// Service for password-gated moderation and posting operations.
pub struct ModerationService<'a> {
    db: &'a Database,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a thread, lazily creating the board on first post.
    ///
    /// Returns the created thread including its password hash; callers
    /// building client responses must strip the hash.
    pub async fn create_thread(
        &self,
        board_name: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        let hash = hash_password(delete_password)
            .map_err(|e| AnonboardError::Password(e.to_string()))?;
        let now = Utc::now();

        let repo = BoardRepository::new(self.db.pool());
        let mut board = match repo.find_by_name(board_name).await? {
            Some(board) => board,
            None => repo.create(board_name),
        };

        let thread = Thread::new(text, hash, now);
        board.threads.push(thread.clone());
        repo.save(&mut board).await?;

        Ok(thread)
    }

    /// Delete a thread after verifying its password.
    ///
    /// Removes the thread and all its replies from the board.
    pub async fn delete_thread(
        &self,
        board_name: &str,
        thread_id: &str,
        delete_password: &str,
    ) -> Result<DeleteOutcome> {
        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let id = parse_id(thread_id).ok_or_else(|| not_found("Thread"))?;
        let thread = board.find_thread(id).ok_or_else(|| not_found("Thread"))?;

        if !Self::matches(delete_password, &thread.delete_password)? {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        board.remove_thread(id);
        repo.save(&mut board).await?;
        tracing::info!(thread_id = %id, "thread deleted");

        Ok(DeleteOutcome::Deleted)
    }

    /// Mark a thread as reported. No credential is required.
    pub async fn report_thread(&self, board_name: &str, thread_id: &str) -> Result<()> {
        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let id = parse_id(thread_id).ok_or_else(|| not_found("Thread"))?;
        let thread = board.find_thread_mut(id).ok_or_else(|| not_found("Thread"))?;

        thread.reported = true;
        repo.save(&mut board).await?;
        tracing::info!(thread_id = %id, "thread reported");

        Ok(())
    }

    /// Add a reply to a thread, bumping the thread's recency.
    ///
    /// Returns the created reply including its password hash; callers
    /// building client responses must strip the hash.
    pub async fn create_reply(
        &self,
        board_name: &str,
        thread_id: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Reply> {
        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let id = parse_id(thread_id).ok_or_else(|| not_found("Thread"))?;

        let hash = hash_password(delete_password)
            .map_err(|e| AnonboardError::Password(e.to_string()))?;
        let now = Utc::now();

        let thread = board.find_thread_mut(id).ok_or_else(|| not_found("Thread"))?;
        let reply = Reply::new(text, hash, now);
        thread.add_reply(reply.clone(), now);

        repo.save(&mut board).await?;

        Ok(reply)
    }

    /// Soft-delete a reply after verifying its password.
    ///
    /// The reply stays in its thread with its text overwritten by the
    /// redaction sentinel; identity, timestamps and report state are
    /// left untouched.
    pub async fn delete_reply(
        &self,
        board_name: &str,
        thread_id: &str,
        reply_id: &str,
        delete_password: &str,
    ) -> Result<DeleteOutcome> {
        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let tid = parse_id(thread_id).ok_or_else(|| not_found("Thread"))?;
        let thread = board.find_thread_mut(tid).ok_or_else(|| not_found("Thread"))?;

        let rid = parse_id(reply_id).ok_or_else(|| not_found("Reply"))?;
        let reply = thread.find_reply_mut(rid).ok_or_else(|| not_found("Reply"))?;

        if !Self::matches(delete_password, &reply.delete_password)? {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        reply.redact();
        repo.save(&mut board).await?;
        tracing::info!(reply_id = %rid, "reply deleted");

        Ok(DeleteOutcome::Deleted)
    }

    /// Mark a reply as reported. No credential is required.
    pub async fn report_reply(
        &self,
        board_name: &str,
        thread_id: &str,
        reply_id: &str,
    ) -> Result<()> {
        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .find_by_name(board_name)
            .await?
            .ok_or_else(|| not_found("Board"))?;

        let tid = parse_id(thread_id).ok_or_else(|| not_found("Thread"))?;
        let thread = board.find_thread_mut(tid).ok_or_else(|| not_found("Thread"))?;

        let rid = parse_id(reply_id).ok_or_else(|| not_found("Reply"))?;
        let reply = thread.find_reply_mut(rid).ok_or_else(|| not_found("Reply"))?;

        reply.reported = true;
        repo.save(&mut board).await?;
        tracing::info!(reply_id = %rid, "reply reported");

        Ok(())
    }

    /// Verify a password, distinguishing mismatch from broken hashes.
    fn matches(password: &str, hash: &str) -> Result<bool> {
        match verify_password(password, hash) {
            Ok(()) => Ok(true),
            Err(PasswordError::VerificationFailed) => Ok(false),
            Err(e) => Err(AnonboardError::Password(e.to_string())),
        }
    }
}
