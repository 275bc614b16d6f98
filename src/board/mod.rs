//! Board module for anonboard.
//!
//! This module provides the message board core:
//! - The board aggregate model (Board owning Threads owning Replies)
//! - Aggregate persistence with whole-document save semantics
//! - Listing views (recency-sorted, truncated)
//! - Password-gated moderation (delete, report)

mod repository;
mod service;
mod types;

pub use repository::BoardRepository;
pub use service::{
    DeleteOutcome, ListingService, ModerationService, ReplyDetail, ReplySummary, ThreadDetail,
    ThreadSummary, REPLY_PREVIEW_LIMIT, THREAD_LIST_LIMIT,
};
pub use types::{Board, Reply, Thread, DELETED_TEXT};
