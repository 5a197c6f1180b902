//! Chore→broker synchronization ports.
//!
//! These are the outbound boundaries [`ChoreService`](crate::services::chore_service::ChoreService)
//! drives as side effects of create/complete/delete. Implementations are
//! deliberately infallible: broker unavailability must never fail the chore
//! operation that triggered the publish, so every error is logged and
//! swallowed inside the adapter and nothing propagates to the caller.

use std::future::Future;

use chorehub_domain::chore::Chore;
use chorehub_domain::id::ChoreId;

/// Publishes a chore's derived status and descriptive attributes.
pub trait StatePublisher {
    /// Publish the chore's current status (recomputed at call time).
    fn publish_status(&self, chore: &Chore) -> impl Future<Output = ()> + Send;

    /// Publish the chore's attributes projection.
    fn publish_attributes(&self, chore: &Chore) -> impl Future<Output = ()> + Send;

    /// Publish status first, then attributes, as two independent publishes.
    fn publish_status_and_attributes(&self, chore: &Chore) -> impl Future<Output = ()> + Send
    where
        Self: Sync,
    {
        async {
            self.publish_status(chore).await;
            self.publish_attributes(chore).await;
        }
    }
}

/// Publishes and retracts hub discovery documents for chores.
pub trait DiscoveryPublisher {
    /// Register a chore's broker-side entities with the hub.
    fn publish_discovery_for_chore(&self, chore: &Chore) -> impl Future<Output = ()> + Send;

    /// Retract a chore's broker-side entities (empty retained payloads).
    fn remove_discovery_for_chore(&self, chore_id: ChoreId) -> impl Future<Output = ()> + Send;

    /// Register the service-wide availability entity. Called once at startup.
    fn publish_availability_discovery(&self) -> impl Future<Output = ()> + Send;
}

impl<T: StatePublisher + Send + Sync> StatePublisher for std::sync::Arc<T> {
    fn publish_status(&self, chore: &Chore) -> impl Future<Output = ()> + Send {
        (**self).publish_status(chore)
    }

    fn publish_attributes(&self, chore: &Chore) -> impl Future<Output = ()> + Send {
        (**self).publish_attributes(chore)
    }

    fn publish_status_and_attributes(&self, chore: &Chore) -> impl Future<Output = ()> + Send {
        (**self).publish_status_and_attributes(chore)
    }
}

impl<T: DiscoveryPublisher + Send + Sync> DiscoveryPublisher for std::sync::Arc<T> {
    fn publish_discovery_for_chore(&self, chore: &Chore) -> impl Future<Output = ()> + Send {
        (**self).publish_discovery_for_chore(chore)
    }

    fn remove_discovery_for_chore(&self, chore_id: ChoreId) -> impl Future<Output = ()> + Send {
        (**self).remove_discovery_for_chore(chore_id)
    }

    fn publish_availability_discovery(&self) -> impl Future<Output = ()> + Send {
        (**self).publish_availability_discovery()
    }
}

/// State publisher that does nothing. Useful in tests and offline tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStatePublisher;

impl StatePublisher for NoopStatePublisher {
    fn publish_status(&self, _chore: &Chore) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn publish_attributes(&self, _chore: &Chore) -> impl Future<Output = ()> + Send {
        async {}
    }
}

/// Discovery publisher that does nothing. Useful in tests and offline tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiscoveryPublisher;

impl DiscoveryPublisher for NoopDiscoveryPublisher {
    fn publish_discovery_for_chore(&self, _chore: &Chore) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn remove_discovery_for_chore(&self, _chore_id: ChoreId) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn publish_availability_discovery(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}
