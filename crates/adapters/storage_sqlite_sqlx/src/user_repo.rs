//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use chorehub_app::ports::UserRepository;
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::UserId;
use chorehub_domain::user::User;

use crate::error::StorageError;

struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let shortname: Option<String> = row.try_get("shortname")?;

        Ok(Self(User {
            id: UserId::new(id),
            name,
            shortname,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, shortname) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM users WHERE name = ?";
const SELECT_ALL: &str = "SELECT * FROM users";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, mut user: User) -> Result<User, ChoreHubError> {
        let result = sqlx::query(INSERT)
            .bind(&user.name)
            .bind(&user.shortname)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        user.id = UserId::new(result.last_insert_rowid());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, ChoreHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<User>, ChoreHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<User>, ChoreHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: UserId) -> Result<(), ChoreHubError> {
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
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    fn test_user() -> User {
        User::builder()
            .name("Alice")
            .shortname("ali")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_user_when_valid() {
        let repo = setup().await;

        let created = repo.create(test_user()).await.unwrap();
        assert_ne!(created.id, UserId::default());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.shortname.as_deref(), Some("ali"));
    }

    #[tokio::test]
    async fn should_find_user_by_exact_name() {
        let repo = setup().await;
        repo.create(test_user()).await.unwrap();

        let found = repo.get_by_name("Alice").await.unwrap();
        assert!(found.is_some());

        let missing = repo.get_by_name("alice").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let repo = setup().await;
        repo.create(test_user()).await.unwrap();

        let mut other = test_user();
        other.name = "Bob".to_string();
        other.shortname = None;
        repo.create(other).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_delete_user() {
        let repo = setup().await;
        let created = repo.create(test_user()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
