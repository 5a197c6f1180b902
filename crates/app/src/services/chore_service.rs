//! Chore service — use-cases for managing chores.
//!
//! Mutations that change what the hub should display (create, mark-done,
//! delete) drive the sync ports as best-effort side effects: the chore
//! operation's success is independent of broker reachability.

use chorehub_domain::chore::Chore;
use chorehub_domain::chore_history::ChoreHistory;
use chorehub_domain::error::{ChoreHubError, NotFoundError};
use chorehub_domain::id::{ChoreId, UserId};
use chorehub_domain::time::{now, start_of_tomorrow};

use crate::ports::{
    ChoreHistoryStore, ChoreRepository, ChoreStore, DiscoveryPublisher, StatePublisher,
};

/// Application service for chore CRUD, completion, and broker sync triggers.
pub struct ChoreService<R, H, SP, DP> {
    repo: R,
    history: H,
    state: SP,
    discovery: DP,
}

impl<R, H, SP, DP> ChoreService<R, H, SP, DP>
where
    R: ChoreRepository,
    H: ChoreHistoryStore,
    SP: StatePublisher + Sync,
    DP: DiscoveryPublisher,
{
    /// Create a new service backed by the given ports.
    pub fn new(repo: R, history: H, state: SP, discovery: DP) -> Self {
        Self {
            repo,
            history,
            state,
            discovery,
        }
    }

    /// Create a new chore after validating domain invariants, then register
    /// it with the hub and publish its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository. Broker failures are
    /// swallowed by the sync ports and never surface here.
    pub async fn create_chore(&self, chore: Chore) -> Result<Chore, ChoreHubError> {
        chore.validate()?;
        let created = self.repo.create(chore).await?;

        self.discovery.publish_discovery_for_chore(&created).await;
        self.state.publish_status_and_attributes(&created).await;

        tracing::debug!(chore_id = %created.id, name = %created.name, "chore created");
        Ok(created)
    }

    /// Look up a chore by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::NotFound`] when no chore with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_chore(&self, id: ChoreId) -> Result<Chore, ChoreHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Chore",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all chores.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_chores(&self) -> Result<Vec<Chore>, ChoreHubError> {
        self.repo.get_all().await
    }

    /// List chores due before midnight tonight (i.e. due today or overdue).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn due_chores(&self) -> Result<Vec<Chore>, ChoreHubError> {
        self.repo.find_due_before(start_of_tomorrow()).await
    }

    /// List all chores assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn chores_for_user(&self, user_id: UserId) -> Result<Vec<Chore>, ChoreHubError> {
        self.repo.find_by_assignee(user_id).await
    }

    /// Mark a chore as completed now, record the completion, and publish
    /// the updated state.
    ///
    /// Returns `Ok(None)` when the chore does not exist; callers on the
    /// broker path log and drop, callers on the HTTP path map to 404.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository or history
    /// store.
    pub async fn mark_chore_done(&self, id: ChoreId) -> Result<Option<Chore>, ChoreHubError> {
        let Some(mut chore) = self.repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let completed_at = now();
        chore.record_completion(completed_at);
        let updated = self.repo.update(chore).await?;
        self.history
            .record(ChoreHistory::new(id, completed_at))
            .await?;

        self.state.publish_status_and_attributes(&updated).await;

        tracing::info!(chore_id = %id, "chore marked done");
        Ok(Some(updated))
    }

    /// List the completion history of a chore, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::NotFound`] when the chore does not exist,
    /// or a storage error.
    pub async fn chore_history(&self, id: ChoreId) -> Result<Vec<ChoreHistory>, ChoreHubError> {
        self.get_chore(id).await?;
        self.history.find_by_chore(id).await
    }

    /// Delete a chore, retracting its hub registration first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository. Retraction
    /// failures are swallowed by the discovery port.
    pub async fn delete_chore(&self, id: ChoreId) -> Result<(), ChoreHubError> {
        self.discovery.remove_discovery_for_chore(id).await;
        self.repo.delete(id).await
    }
}

impl<R, H, SP, DP> ChoreStore for ChoreService<R, H, SP, DP>
where
    R: ChoreRepository + Send + Sync,
    H: ChoreHistoryStore + Send + Sync,
    SP: StatePublisher + Send + Sync,
    DP: DiscoveryPublisher + Send + Sync,
{
    async fn all_chores(&self) -> Result<Vec<Chore>, ChoreHubError> {
        self.repo.get_all().await
    }

    async fn mark_done(&self, id: ChoreId) -> Result<Option<Chore>, ChoreHubError> {
        self.mark_chore_done(id).await
    }
}
