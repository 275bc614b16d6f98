//! Response DTOs for the anonboard API.
//!
//! Creation responses mirror the stored thread/reply shape minus the
//! password hash, which never leaves the server. The list and detail
//! views are produced directly by `crate::board::ListingService`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::board::{Reply, Thread};

/// Response body for a created thread.
#[derive(Debug, Serialize)]
pub struct ThreadCreatedResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp (equals created_on at creation).
    pub bumped_on: DateTime<Utc>,
    /// Report flag (false at creation).
    pub reported: bool,
    /// Replies (empty at creation).
    pub replies: Vec<ReplyCreatedResponse>,
    /// Reply counter (zero at creation).
    #[serde(rename = "replyCount")]
    pub reply_count: i64,
}

impl From<Thread> for ThreadCreatedResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            reported: thread.reported,
            replies: thread.replies.into_iter().map(Into::into).collect(),
            reply_count: thread.reply_count,
        }
    }
}

/// Response body for a created reply.
#[derive(Debug, Serialize)]
pub struct ReplyCreatedResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Set at creation.
    pub bumped_on: DateTime<Utc>,
    /// Report flag (false at creation).
    pub reported: bool,
}

impl From<Reply> for ReplyCreatedResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
            bumped_on: reply.bumped_on,
            reported: reply.reported,
        }
    }
}
