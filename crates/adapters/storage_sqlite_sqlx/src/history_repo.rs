//! `SQLite` implementation of [`ChoreHistoryStore`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use chorehub_app::ports::ChoreHistoryStore;
use chorehub_domain::chore_history::ChoreHistory;
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::{ChoreId, HistoryId};

use crate::error::StorageError;

struct Wrapper(ChoreHistory);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let chore_id: i64 = row.try_get("chore_id")?;
        let completed_at: String = row.try_get("completed_at")?;
        let notes: Option<String> = row.try_get("notes")?;

        let completed_at = chrono::DateTime::parse_from_rfc3339(&completed_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(ChoreHistory {
            id: HistoryId::new(id),
            chore_id: ChoreId::new(chore_id),
            completed_at,
            notes,
        }))
    }
}

const INSERT: &str = "INSERT INTO chore_history (chore_id, completed_at, notes) VALUES (?, ?, ?)";
const SELECT_BY_CHORE: &str =
    "SELECT * FROM chore_history WHERE chore_id = ? ORDER BY completed_at DESC";

/// `SQLite`-backed chore completion history.
pub struct SqliteChoreHistoryStore {
    pool: SqlitePool,
}

impl SqliteChoreHistoryStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ChoreHistoryStore for SqliteChoreHistoryStore {
    async fn record(&self, mut entry: ChoreHistory) -> Result<ChoreHistory, ChoreHubError> {
        let result = sqlx::query(INSERT)
            .bind(entry.chore_id.value())
            .bind(entry.completed_at.to_rfc3339())
            .bind(&entry.notes)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        entry.id = HistoryId::new(result.last_insert_rowid());
        Ok(entry)
    }

    async fn find_by_chore(&self, chore_id: ChoreId) -> Result<Vec<ChoreHistory>, ChoreHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CHORE)
            .bind(chore_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
