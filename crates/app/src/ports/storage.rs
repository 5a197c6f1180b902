//! Storage ports — repository traits for persistence.

use std::future::Future;

use chorehub_domain::chore::Chore;
use chorehub_domain::chore_history::ChoreHistory;
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::{ChoreId, UserId};
use chorehub_domain::time::Timestamp;
use chorehub_domain::user::User;

/// Repository for persisting and querying [`Chore`]s.
pub trait ChoreRepository {
    /// Persist a new chore. The returned chore carries the storage-assigned id.
    fn create(&self, chore: Chore) -> impl Future<Output = Result<Chore, ChoreHubError>> + Send;

    /// Get a chore by its unique identifier.
    fn get_by_id(
        &self,
        id: ChoreId,
    ) -> impl Future<Output = Result<Option<Chore>, ChoreHubError>> + Send;

    /// Get all chores.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Chore>, ChoreHubError>> + Send;

    /// Find all chores assigned to a user.
    fn find_by_assignee(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Chore>, ChoreHubError>> + Send;

    /// Find all chores with a due date strictly before `threshold`.
    fn find_due_before(
        &self,
        threshold: Timestamp,
    ) -> impl Future<Output = Result<Vec<Chore>, ChoreHubError>> + Send;

    /// Update an existing chore.
    fn update(&self, chore: Chore) -> impl Future<Output = Result<Chore, ChoreHubError>> + Send;

    /// Delete a chore by its unique identifier.
    fn delete(&self, id: ChoreId) -> impl Future<Output = Result<(), ChoreHubError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Persist a new user. The returned user carries the storage-assigned id.
    fn create(&self, user: User) -> impl Future<Output = Result<User, ChoreHubError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, ChoreHubError>> + Send;

    /// Get a user by exact name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<User>, ChoreHubError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, ChoreHubError>> + Send;

    /// Delete a user by its unique identifier.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ChoreHubError>> + Send;
}

/// Append-only store for chore completion records.
pub trait ChoreHistoryStore {
    /// Persist a completion record.
    fn record(
        &self,
        entry: ChoreHistory,
    ) -> impl Future<Output = Result<ChoreHistory, ChoreHubError>> + Send;

    /// Find all completions of a chore, newest first.
    fn find_by_chore(
        &self,
        chore_id: ChoreId,
    ) -> impl Future<Output = Result<Vec<ChoreHistory>, ChoreHubError>> + Send;
}
