//! Web API module for anonboard.
//!
//! This module is the transport adapter: it maps HTTP verbs and paths
//! onto the listing and moderation services and shapes their results
//! into the wire responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
