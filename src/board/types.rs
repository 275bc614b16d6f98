//! Board aggregate model for anonboard.
//!
//! A board owns its threads and each thread owns its replies; the whole
//! tree is persisted as one document. Threads and replies carry their
//! own delete-password hash and report flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel text written over a reply when it is soft-deleted.
pub const DELETED_TEXT: &str = "[deleted]";

/// Reply entity nested under a thread.
///
/// Replies are never removed from their thread: deleting one redacts
/// its text and leaves identity, timestamps and report state intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply ID.
    pub id: Uuid,
    /// Reply text, or [`DELETED_TEXT`] once soft-deleted.
    pub text: String,
    /// Creation timestamp. Immutable.
    pub created_on: DateTime<Utc>,
    /// Set at creation, never updated afterwards.
    pub bumped_on: DateTime<Utc>,
    /// Whether the reply has been reported.
    pub reported: bool,
    /// Argon2 hash of the delete password. Never exposed to clients.
    pub delete_password: String,
}

impl Reply {
    /// Create a new reply with the given text and password hash.
    pub fn new(text: impl Into<String>, password_hash: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password: password_hash.into(),
        }
    }

    /// Soft-delete the reply by overwriting its text with the sentinel.
    pub fn redact(&mut self) {
        self.text = DELETED_TEXT.to_string();
    }

    /// Check if the reply has been soft-deleted.
    pub fn is_redacted(&self) -> bool {
        self.text == DELETED_TEXT
    }
}

/// Thread entity nested under a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread ID.
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp. Immutable.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp, refreshed whenever a reply is added.
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported.
    pub reported: bool,
    /// Argon2 hash of the delete password. Never exposed to clients.
    pub delete_password: String,
    /// Replies in insertion order.
    pub replies: Vec<Reply>,
    /// Total replies ever added. Not decremented by soft-deletes and
    /// never exposed by the read views.
    pub reply_count: i64,
}

impl Thread {
    /// Create a new thread with the given text and password hash.
    pub fn new(text: impl Into<String>, password_hash: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password: password_hash.into(),
            replies: Vec::new(),
            reply_count: 0,
        }
    }

    /// Append a reply, bumping the thread and incrementing the counter.
    pub fn add_reply(&mut self, reply: Reply, now: DateTime<Utc>) {
        self.bumped_on = now;
        self.reply_count += 1;
        self.replies.push(reply);
    }

    /// Find a reply by ID.
    pub fn find_reply(&self, reply_id: Uuid) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }

    /// Find a reply by ID, mutably.
    pub fn find_reply_mut(&mut self, reply_id: Uuid) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }
}

/// Board aggregate: a named container of threads.
///
/// `id` is the store-assigned row key; it is `None` until the board is
/// first saved and is not part of the stored document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Store row key. Not serialized into the document.
    #[serde(skip)]
    pub id: Option<i64>,
    /// Board name, the sole external lookup key.
    pub name: String,
    /// Threads in insertion order.
    pub threads: Vec<Thread>,
}

impl Board {
    /// Create a new, empty, unsaved board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            threads: Vec::new(),
        }
    }

    /// Find a thread by ID.
    pub fn find_thread(&self, thread_id: Uuid) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == thread_id)
    }

    /// Find a thread by ID, mutably.
    pub fn find_thread_mut(&mut self, thread_id: Uuid) -> Option<&mut Thread> {
        self.threads.iter_mut().find(|t| t.id == thread_id)
    }

    /// Remove a thread (and all its replies) by ID.
    ///
    /// Returns true if a thread was removed.
    pub fn remove_thread(&mut self, thread_id: Uuid) -> bool {
        let before = self.threads.len();
        self.threads.retain(|t| t.id != thread_id);
        self.threads.len() < before
    }
}
