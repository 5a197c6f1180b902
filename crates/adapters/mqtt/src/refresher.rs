//! Periodic status re-publisher.
//!
//! Self-healing sweep against missed or lost update events: on a fixed
//! interval, every chore's status and attributes are re-published so the
//! hub converges even if an earlier publish was dropped.

use std::time::Duration;

use chorehub_app::ports::chore_store::ChoreStore;
use chorehub_app::ports::sync::StatePublisher;

/// Re-publishes all chore state on a fixed wall-clock interval.
#[derive(Debug, Clone)]
pub struct StatusRefresher<S, SP> {
    store: S,
    publisher: SP,
    interval: Duration,
}

impl<S, SP> StatusRefresher<S, SP>
where
    S: ChoreStore + Send + Sync,
    SP: StatePublisher + Send + Sync,
{
    pub fn new(store: S, publisher: SP, interval: Duration) -> Self {
        Self {
            store,
            publisher,
            interval,
        }
    }

    /// Run sweeps forever. A slow sweep delays the next tick rather than
    /// overlapping with it.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick fires immediately; skip it so startup publishes
        // are not duplicated straight away.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }

    /// One full pass over all chores.
    pub async fn sweep(&self) {
        let chores = match self.store.all_chores().await {
            Ok(chores) => chores,
            Err(err) => {
                tracing::warn!(%err, "failed to list chores for periodic refresh");
                return;
            }
        };
        if chores.is_empty() {
            tracing::debug!("no chores to refresh");
            return;
        }
        tracing::debug!(count = chores.len(), "refreshing chore state");
        for chore in &chores {
            // Publish failures are swallowed inside the publisher, so one
            // bad chore cannot block the sweep over the rest.
            self.publisher.publish_status_and_attributes(chore).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chorehub_domain::chore::Chore;
    use chorehub_domain::error::ChoreHubError;
    use chorehub_domain::id::ChoreId;

    use super::*;
    use crate::testutil::chore_with_id;

    #[derive(Debug, Default)]
    struct FakeStore {
        chores: Vec<Chore>,
        fail: bool,
    }

    impl ChoreStore for &FakeStore {
        async fn all_chores(&self) -> Result<Vec<Chore>, ChoreHubError> {
            if self.fail {
                return Err(ChoreHubError::Storage("database down".into()));
            }
            Ok(self.chores.clone())
        }

        async fn mark_done(&self, _id: ChoreId) -> Result<Option<Chore>, ChoreHubError> {
            unreachable!("refresher never marks chores done")
        }
    }

    /// Publisher fake that can fail on a selected chore id.
    #[derive(Debug, Default)]
    struct FlakyPublisher {
        published: Mutex<Vec<ChoreId>>,
        fail_for: Option<ChoreId>,
    }

    impl StatePublisher for &FlakyPublisher {
        async fn publish_status(&self, chore: &Chore) {
            if self.fail_for == Some(chore.id) {
                // Mirrors the real publisher: the failure is logged and
                // swallowed, nothing is recorded.
                return;
            }
            self.published.lock().unwrap().push(chore.id);
        }

        async fn publish_attributes(&self, _chore: &Chore) {}
    }

    #[tokio::test]
    async fn should_publish_every_chore_in_sweep() {
        let store = FakeStore {
            chores: vec![chore_with_id(1), chore_with_id(2), chore_with_id(3)],
            fail: false,
        };
        let publisher = FlakyPublisher::default();

        StatusRefresher::new(&store, &publisher, Duration::from_secs(300))
            .sweep()
            .await;

        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec![ChoreId::new(1), ChoreId::new(2), ChoreId::new(3)]
        );
    }

    #[tokio::test]
    async fn should_continue_sweep_past_failing_chore() {
        let store = FakeStore {
            chores: vec![chore_with_id(1), chore_with_id(2), chore_with_id(3)],
            fail: false,
        };
        let publisher = FlakyPublisher {
            published: Mutex::new(Vec::new()),
            fail_for: Some(ChoreId::new(2)),
        };

        StatusRefresher::new(&store, &publisher, Duration::from_secs(300))
            .sweep()
            .await;

        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec![ChoreId::new(1), ChoreId::new(3)]
        );
    }

    #[tokio::test]
    async fn should_treat_empty_chore_set_as_noop() {
        let store = FakeStore::default();
        let publisher = FlakyPublisher::default();

        StatusRefresher::new(&store, &publisher, Duration::from_secs(300))
            .sweep()
            .await;

        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_swallow_store_errors() {
        let store = FakeStore {
            chores: Vec::new(),
            fail: true,
        };
        let publisher = FlakyPublisher::default();

        StatusRefresher::new(&store, &publisher, Duration::from_secs(300))
            .sweep()
            .await;

        assert!(publisher.published.lock().unwrap().is_empty());
    }
}
