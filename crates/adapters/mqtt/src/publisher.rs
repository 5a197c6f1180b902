//! Publishes chore status and attributes to their retained topics.

use chorehub_app::ports::broker::BrokerGateway;
use chorehub_app::ports::sync::StatePublisher;
use chorehub_domain::chore::Chore;
use chorehub_domain::time::now;

use crate::attributes::ChoreAttributes;
use crate::topics;

/// [`StatePublisher`] backed by a broker gateway.
///
/// Both publishes are best-effort: serialization or transport failures are
/// logged and swallowed, so a chore mutation succeeds regardless of broker
/// reachability. The broker-visible state then stays stale until the next
/// periodic sweep or mutation-triggered publish.
#[derive(Debug, Clone)]
pub struct MqttStatePublisher<G> {
    gateway: G,
}

impl<G> MqttStatePublisher<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: BrokerGateway + Send + Sync> StatePublisher for MqttStatePublisher<G> {
    async fn publish_status(&self, chore: &Chore) {
        let topic = topics::status_topic(chore.id);
        let status = chore.status_at(now());
        if let Err(err) = self
            .gateway
            .publish(status.as_str().to_string(), topic.clone())
            .await
        {
            tracing::warn!(%err, %topic, "failed to publish chore status");
        }
    }

    async fn publish_attributes(&self, chore: &Chore) {
        let topic = topics::attributes_topic(chore.id);
        let payload = match serde_json::to_string(&ChoreAttributes::from(chore)) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, %topic, "failed to serialize chore attributes");
                return;
            }
        };
        if let Err(err) = self.gateway.publish(payload, topic.clone()).await {
            tracing::warn!(%err, %topic, "failed to publish chore attributes");
        }
    }
}
