//! Board aggregate repository for anonboard.
//!
//! Boards are stored one row per aggregate: the `doc` column holds the
//! whole board (threads and replies nested) as JSON. Every save rewrites
//! the document in a single statement, so readers never observe a
//! partially applied mutation. Names are not unique in the store; lookups
//! return the first match by row id.

use super::types::Board;
use crate::db::DbPool;
use crate::{AnonboardError, Result};

/// Repository for board aggregate persistence.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new, empty board aggregate.
    ///
    /// The board is not persisted until [`save`](Self::save) is called.
    pub fn create(&self, name: &str) -> Board {
        Board::new(name)
    }

    /// Find a board by exact name.
    ///
    /// If several boards share a name, the first by row id wins.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Board>> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, doc FROM boards WHERE name = ? ORDER BY id LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool)
                .await
                .map_err(|e| AnonboardError::Database(e.to_string()))?;

        match row {
            Some((id, doc)) => {
                let mut board: Board = serde_json::from_str(&doc)?;
                board.id = Some(id);
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    /// Persist the full aggregate.
    ///
    /// Inserts on first save (assigning the row id), otherwise replaces
    /// the stored document wholesale.
    pub async fn save(&self, board: &mut Board) -> Result<()> {
        let doc = serde_json::to_string(board)?;

        match board.id {
            Some(id) => {
                let result = sqlx::query("UPDATE boards SET doc = ? WHERE id = ?")
                    .bind(&doc)
                    .bind(id)
                    .execute(self.pool)
                    .await
                    .map_err(|e| AnonboardError::Database(e.to_string()))?;

                if result.rows_affected() == 0 {
                    return Err(AnonboardError::Database(format!(
                        "board row {id} disappeared during save"
                    )));
                }
            }
            None => {
                let id: i64 =
                    sqlx::query_scalar("INSERT INTO boards (name, doc) VALUES (?, ?) RETURNING id")
                        .bind(&board.name)
                        .bind(&doc)
                        .fetch_one(self.pool)
                        .await
                        .map_err(|e| AnonboardError::Database(e.to_string()))?;
                board.id = Some(id);
            }
        }

        Ok(())
    }
}
