//! Service availability lifecycle.
//!
//! One announce at startup, one at shutdown. The startup announce also
//! registers the availability entity with the hub. The shutdown announce is
//! called explicitly after the server loop exits, with the gateway's
//! last-will as the fallback for non-graceful exits.

use chorehub_app::ports::broker::BrokerGateway;
use chorehub_app::ports::sync::DiscoveryPublisher;

use crate::topics;

/// Publishes the service's online/offline markers across its lifecycle.
#[derive(Debug, Clone)]
pub struct AvailabilityLifecycle<G, DP> {
    gateway: G,
    discovery: DP,
}

impl<G, DP> AvailabilityLifecycle<G, DP>
where
    G: BrokerGateway + Send + Sync,
    DP: DiscoveryPublisher + Send + Sync,
{
    pub fn new(gateway: G, discovery: DP) -> Self {
        Self { gateway, discovery }
    }

    /// Register the availability entity and mark the service online.
    ///
    /// Best-effort on both steps: a broker outage at startup must not
    /// prevent the HTTP side from serving.
    pub async fn announce_online(&self) {
        self.discovery.publish_availability_discovery().await;
        self.publish_availability(topics::PAYLOAD_ONLINE).await;
    }

    /// Mark the service offline.
    pub async fn announce_offline(&self) {
        self.publish_availability(topics::PAYLOAD_OFFLINE).await;
    }

    async fn publish_availability(&self, payload: &str) {
        let topic = topics::availability_topic();
        if let Err(err) = self
            .gateway
            .publish(payload.to_string(), topic.clone())
            .await
        {
            tracing::warn!(%err, %topic, payload, "failed to publish availability");
        }
    }
}

#[cfg(test)]
mod tests {
    use chorehub_app::ports::sync::NoopDiscoveryPublisher;

    use super::*;
    use crate::discovery_service::MqttDiscoveryPublisher;
    use crate::testutil::FakeGateway;

    #[tokio::test]
    async fn should_announce_discovery_then_online() {
        let gateway = FakeGateway::default();
        let lifecycle =
            AvailabilityLifecycle::new(&gateway, MqttDiscoveryPublisher::new(&gateway));

        lifecycle.announce_online().await;

        let published = gateway.published.lock().unwrap();
        assert_eq!(published.len(), 2);
        assert_eq!(
            published[0].0,
            "homeassistant/binary_sensor/chorehub_availability/config"
        );
        assert_eq!(published[1].0, "chorehub/status");
        assert_eq!(published[1].1, "online");
    }

    #[tokio::test]
    async fn should_announce_offline() {
        let gateway = FakeGateway::default();
        let lifecycle = AvailabilityLifecycle::new(&gateway, NoopDiscoveryPublisher);

        lifecycle.announce_offline().await;

        let published = gateway.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0, "chorehub/status");
        assert_eq!(published[0].1, "offline");
    }

    #[tokio::test]
    async fn should_survive_broker_outage_at_startup() {
        let gateway = FakeGateway::failing();
        let lifecycle = AvailabilityLifecycle::new(&gateway, NoopDiscoveryPublisher);

        lifecycle.announce_online().await;
        lifecycle.announce_offline().await;

        assert!(gateway.published.lock().unwrap().is_empty());
    }
}
