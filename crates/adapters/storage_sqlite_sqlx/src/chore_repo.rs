//! `SQLite` implementation of [`ChoreRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use chorehub_app::ports::ChoreRepository;
use chorehub_domain::chore::{Assignee, Chore, RecurrenceKind};
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::{ChoreId, UserId};
use chorehub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Chore);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Chore> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: Option<String> = row.try_get("description")?;
        let recurrence_kind: String = row.try_get("recurrence_kind")?;
        let recurrence_pattern: Option<String> = row.try_get("recurrence_pattern")?;
        let assigned_user_id: Option<i64> = row.try_get("assigned_user_id")?;
        let assignee_name: Option<String> = row.try_get("assignee_name")?;
        let created_at: String = row.try_get("created_at")?;
        let last_completed_at: Option<String> = row.try_get("last_completed_at")?;
        let next_due_at: Option<String> = row.try_get("next_due_at")?;

        let recurrence_kind = RecurrenceKind::from_str(&recurrence_kind)
            .map_err(|err| sqlx::Error::Decode(err.into()))?;
        let assignee = assigned_user_id
            .zip(assignee_name)
            .map(|(user_id, name)| Assignee {
                id: UserId::new(user_id),
                name,
            });
        let created_at = parse_timestamp(&created_at)?;
        let last_completed_at = last_completed_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let next_due_at = next_due_at.as_deref().map(parse_timestamp).transpose()?;

        Ok(Self(Chore {
            id: ChoreId::new(id),
            name,
            description,
            recurrence_kind,
            recurrence_pattern,
            assignee,
            created_at,
            last_completed_at,
            next_due_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO chores (name, description, recurrence_kind, recurrence_pattern, assigned_user_id, created_at, last_completed_at, next_due_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

// The assignee display name lives on the users table; every read joins it in.
const SELECT: &str = r"
    SELECT c.id, c.name, c.description, c.recurrence_kind, c.recurrence_pattern,
           c.assigned_user_id, u.name AS assignee_name,
           c.created_at, c.last_completed_at, c.next_due_at
    FROM chores c
    LEFT JOIN users u ON u.id = c.assigned_user_id
";

const WHERE_ID: &str = " WHERE c.id = ?";
const WHERE_ASSIGNEE: &str = " WHERE c.assigned_user_id = ?";
const WHERE_DUE_BEFORE: &str = " WHERE c.next_due_at IS NOT NULL AND c.next_due_at < ?";

const UPDATE: &str = r"
    UPDATE chores
    SET name = ?, description = ?, recurrence_kind = ?, recurrence_pattern = ?,
        assigned_user_id = ?, last_completed_at = ?, next_due_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM chores WHERE id = ?";

/// `SQLite`-backed chore repository.
pub struct SqliteChoreRepository {
    pool: SqlitePool,
}

impl SqliteChoreRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ChoreRepository for SqliteChoreRepository {
    async fn create(&self, mut chore: Chore) -> Result<Chore, ChoreHubError> {
        let result = sqlx::query(INSERT)
            .bind(&chore.name)
            .bind(&chore.description)
            .bind(chore.recurrence_kind.as_str())
            .bind(&chore.recurrence_pattern)
            .bind(chore.assignee.as_ref().map(|assignee| assignee.id.value()))
            .bind(chore.created_at.to_rfc3339())
            .bind(chore.last_completed_at.map(|at| at.to_rfc3339()))
            .bind(chore.next_due_at.map(|at| at.to_rfc3339()))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        chore.id = ChoreId::new(result.last_insert_rowid());
        Ok(chore)
    }

    async fn get_by_id(&self, id: ChoreId) -> Result<Option<Chore>, ChoreHubError> {
        let row: Option<Wrapper> = sqlx::query_as(&format!("{SELECT}{WHERE_ID}"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Chore>, ChoreHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_assignee(&self, user_id: UserId) -> Result<Vec<Chore>, ChoreHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(&format!("{SELECT}{WHERE_ASSIGNEE}"))
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_due_before(&self, threshold: Timestamp) -> Result<Vec<Chore>, ChoreHubError> {
        // RFC 3339 strings in UTC compare in timestamp order.
        let rows: Vec<Wrapper> = sqlx::query_as(&format!("{SELECT}{WHERE_DUE_BEFORE}"))
            .bind(threshold.to_rfc3339())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, chore: Chore) -> Result<Chore, ChoreHubError> {
        sqlx::query(UPDATE)
            .bind(&chore.name)
            .bind(&chore.description)
            .bind(chore.recurrence_kind.as_str())
            .bind(&chore.recurrence_pattern)
            .bind(chore.assignee.as_ref().map(|assignee| assignee.id.value()))
            .bind(chore.last_completed_at.map(|at| at.to_rfc3339()))
            .bind(chore.next_due_at.map(|at| at.to_rfc3339()))
            .bind(chore.id.value())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(chore)
    }

    async fn delete(&self, id: ChoreId) -> Result<(), ChoreHubError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chorehub_domain::time::now;
    use chrono::Duration;

    use super::*;
    use crate::pool::Config;

    async fn setup() -> (SqliteChoreRepository, UserId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind("Alice")
            .execute(&pool)
            .await
            .unwrap();
        let user_id = UserId::new(result.last_insert_rowid());

        (SqliteChoreRepository::new(pool), user_id)
    }

    fn test_chore() -> Chore {
        Chore::builder()
            .name("Vacuum the hallway")
            .description("Including the stairs")
            .recurrence_kind(RecurrenceKind::AfterCompletion)
            .recurrence_pattern("P1W")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_chore_when_valid() {
        let (repo, _user_id) = setup().await;

        let created = repo.create(test_chore()).await.unwrap();
        assert_ne!(created.id, ChoreId::default());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Vacuum the hallway");
        assert_eq!(fetched.description.as_deref(), Some("Including the stairs"));
        assert_eq!(fetched.recurrence_kind, RecurrenceKind::AfterCompletion);
        assert_eq!(fetched.recurrence_pattern.as_deref(), Some("P1W"));
        assert!(fetched.assignee.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_chore_not_found() {
        let (repo, _user_id) = setup().await;
        let result = repo.get_by_id(ChoreId::new(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_join_assignee_name_from_users_table() {
        let (repo, user_id) = setup().await;

        let mut chore = test_chore();
        chore.assignee = Some(Assignee {
            id: user_id,
            name: String::new(),
        });
        let created = repo.create(chore).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        let assignee = fetched.assignee.unwrap();
        assert_eq!(assignee.id, user_id);
        assert_eq!(assignee.name, "Alice");
    }

    #[tokio::test]
    async fn should_find_chores_by_assignee() {
        let (repo, user_id) = setup().await;

        let mut assigned = test_chore();
        assigned.assignee = Some(Assignee {
            id: user_id,
            name: "Alice".to_string(),
        });
        repo.create(assigned).await.unwrap();
        repo.create(test_chore()).await.unwrap();

        let found = repo.find_by_assignee(user_id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].assignee.as_ref().unwrap().id, user_id);
    }

    #[tokio::test]
    async fn should_find_chores_due_before_threshold() {
        let (repo, _user_id) = setup().await;

        let mut due_soon = test_chore();
        due_soon.next_due_at = Some(now() + Duration::hours(1));
        let due_soon = repo.create(due_soon).await.unwrap();

        let mut due_later = test_chore();
        due_later.next_due_at = Some(now() + Duration::days(7));
        repo.create(due_later).await.unwrap();

        // No due date at all: never matched.
        repo.create(test_chore()).await.unwrap();

        let found = repo.find_due_before(now() + Duration::days(1)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, due_soon.id);
    }

    #[tokio::test]
    async fn should_persist_completion_through_update() {
        let (repo, _user_id) = setup().await;
        let mut chore = repo.create(test_chore()).await.unwrap();

        let completed_at = now();
        chore.record_completion(completed_at);
        repo.update(chore.clone()).await.unwrap();

        let fetched = repo.get_by_id(chore.id).await.unwrap().unwrap();
        assert_eq!(
            fetched.last_completed_at.map(|at| at.timestamp()),
            Some(completed_at.timestamp())
        );
    }

    #[tokio::test]
    async fn should_delete_chore() {
        let (repo, _user_id) = setup().await;
        let created = repo.create(test_chore()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
