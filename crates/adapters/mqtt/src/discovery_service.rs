//! Publishes and retracts Home Assistant discovery documents.

use chorehub_app::ports::broker::BrokerGateway;
use chorehub_app::ports::sync::DiscoveryPublisher;
use chorehub_domain::chore::Chore;
use chorehub_domain::id::ChoreId;
use serde::Serialize;

use crate::discovery::{AvailabilityConfig, ButtonConfig, SensorConfig, chore_discovery_topics};
use crate::topics;

/// [`DiscoveryPublisher`] backed by a broker gateway.
///
/// Discovery is best-effort relative to the chore operation that triggered
/// it, matching the state publisher's failure semantics.
#[derive(Debug, Clone)]
pub struct MqttDiscoveryPublisher<G> {
    gateway: G,
}

impl<G> MqttDiscoveryPublisher<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: BrokerGateway + Send + Sync> MqttDiscoveryPublisher<G> {
    async fn publish_document<T: Serialize>(&self, document: &T, topic: String) {
        let payload = match serde_json::to_string(document) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, %topic, "failed to serialize discovery document");
                return;
            }
        };
        if let Err(err) = self.gateway.publish(payload, topic.clone()).await {
            tracing::warn!(%err, %topic, "failed to publish discovery document");
        }
    }
}

impl<G: BrokerGateway + Send + Sync> DiscoveryPublisher for MqttDiscoveryPublisher<G> {
    async fn publish_discovery_for_chore(&self, chore: &Chore) {
        self.publish_document(
            &SensorConfig::for_chore(chore),
            topics::discovery_status_topic(chore.id),
        )
        .await;
        self.publish_document(
            &ButtonConfig::for_chore(chore),
            topics::discovery_done_button_topic(chore.id),
        )
        .await;
    }

    async fn remove_discovery_for_chore(&self, chore_id: ChoreId) {
        // An empty retained payload clears the hub's registration. Safe to
        // repeat: retracting an already-retracted entity is a no-op hub-side.
        for topic in chore_discovery_topics(chore_id) {
            if let Err(err) = self.gateway.publish(String::new(), topic.clone()).await {
                tracing::warn!(%err, %topic, "failed to retract discovery document");
            }
        }
    }

    async fn publish_availability_discovery(&self) {
        self.publish_document(
            &AvailabilityConfig::new(),
            topics::discovery_availability_topic(),
        )
        .await;
    }
}
