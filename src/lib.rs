//! anonboard - Anonymous Message Board Backend
//!
//! A backend for an anonymous message board: clients create discussion
//! boards, post threads and replies, and moderate content via
//! password-gated delete and report actions.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{hash_password, verify_password, PasswordError};
pub use board::{
    Board, BoardRepository, DeleteOutcome, ListingService, ModerationService, Reply, Thread,
    DELETED_TEXT, REPLY_PREVIEW_LIMIT, THREAD_LIST_LIMIT,
};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{AnonboardError, Result};
pub use web::WebServer;
