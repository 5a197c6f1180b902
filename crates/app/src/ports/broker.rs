//! Broker gateway port — topic-addressed publish/subscribe transport.
//!
//! The gateway is a narrow capability interface over the actual broker
//! connection. Concrete transports (MQTT today) implement it and own the
//! reconnect policy; callers treat every publish as best-effort and never
//! block on delivery confirmation.

use std::future::Future;

use chorehub_domain::error::ChoreHubError;

/// Sends payloads to topic-addressed broker channels.
///
/// All publishes use the broker's retained-message delivery class, so a
/// late-joining subscriber retrieves the last-known state without history.
pub trait BrokerGateway {
    /// Publish `payload` to `topic` (retained).
    fn publish(
        &self,
        payload: String,
        topic: String,
    ) -> impl Future<Output = Result<(), ChoreHubError>> + Send;

    /// Subscribe to a topic pattern; inbound messages are delivered to the
    /// handler wired into the concrete gateway at construction time.
    fn subscribe(&self, pattern: &str)
    -> impl Future<Output = Result<(), ChoreHubError>> + Send;
}

impl<T: BrokerGateway + Send + Sync> BrokerGateway for std::sync::Arc<T> {
    fn publish(
        &self,
        payload: String,
        topic: String,
    ) -> impl Future<Output = Result<(), ChoreHubError>> + Send {
        (**self).publish(payload, topic)
    }

    fn subscribe(
        &self,
        pattern: &str,
    ) -> impl Future<Output = Result<(), ChoreHubError>> + Send {
        (**self).subscribe(pattern)
    }
}
