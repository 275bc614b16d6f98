//! API handlers for the anonboard web layer.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use std::sync::Arc;

use crate::Database;

/// Shared database handle passed to handlers.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
pub struct AppState {
    /// Database handle.
    pub db: SharedDatabase,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }
}
