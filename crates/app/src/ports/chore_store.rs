//! Chore store port — the collaborator interface the broker side drives.
//!
//! The MQTT adapter's command handler and periodic refresher only need to
//! enumerate chores and mark one done; they consume this narrow port rather
//! than the full [`ChoreService`](crate::services::chore_service::ChoreService),
//! which implements it.

use std::future::Future;

use chorehub_domain::chore::Chore;
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::ChoreId;

/// Read-and-complete access to the chore collection.
pub trait ChoreStore {
    /// All existing chores.
    fn all_chores(&self) -> impl Future<Output = Result<Vec<Chore>, ChoreHubError>> + Send;

    /// Mark a chore as completed now.
    ///
    /// Returns `Ok(None)` when no chore with `id` exists — not-found is not
    /// an error on this boundary, since the broker protocol has no reply
    /// channel to surface it to.
    fn mark_done(
        &self,
        id: ChoreId,
    ) -> impl Future<Output = Result<Option<Chore>, ChoreHubError>> + Send;
}

impl<T: ChoreStore + Send + Sync> ChoreStore for std::sync::Arc<T> {
    fn all_chores(&self) -> impl Future<Output = Result<Vec<Chore>, ChoreHubError>> + Send {
        (**self).all_chores()
    }

    fn mark_done(
        &self,
        id: ChoreId,
    ) -> impl Future<Output = Result<Option<Chore>, ChoreHubError>> + Send {
        (**self).mark_done(id)
    }
}
