//! rumqttc-backed broker gateway.
//!
//! Owns the MQTT connection and its reconnect policy. Publishes are QoS 1
//! retained; subscriptions are remembered and re-issued after every
//! reconnect so inbound commands survive broker restarts.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chorehub_app::ports::broker::BrokerGateway;
use chorehub_domain::error::ChoreHubError;
use rumqttc::{AsyncClient, Event, LastWill, MqttOptions, Packet, QoS};
use tokio::task::JoinHandle;

use crate::config::MqttConfig;
use crate::error::MqttError;
use crate::topics;

const RECONNECT_DELAY: Duration = Duration::from_secs(1);
const CHANNEL_CAPACITY: usize = 32;

/// Receives inbound broker messages delivered by the gateway's event loop.
pub trait MessageHandler {
    fn on_message(&self, topic: &str, payload: &[u8]) -> impl Future<Output = ()> + Send;
}

impl<T: MessageHandler + Send + Sync> MessageHandler for Arc<T> {
    fn on_message(&self, topic: &str, payload: &[u8]) -> impl Future<Output = ()> + Send {
        (**self).on_message(topic, payload)
    }
}

struct Inner {
    client: AsyncClient,
    /// Patterns to re-subscribe after a reconnect.
    subscriptions: Mutex<Vec<String>>,
}

/// Broker gateway over a live MQTT connection.
#[derive(Clone)]
pub struct MqttGateway {
    inner: Arc<Inner>,
}

impl MqttGateway {
    /// Set up the broker connection.
    ///
    /// Nothing is sent until the returned [`MqttEventLoop`] is spawned;
    /// publishes issued before that queue on the client channel. The
    /// two-step construction lets callers wire the message handler (which
    /// usually depends on publishers built from this gateway) before
    /// polling starts.
    #[must_use]
    pub fn connect(config: &MqttConfig) -> (Self, MqttEventLoop) {
        let (client, event_loop) = AsyncClient::new(mqtt_options(config), CHANNEL_CAPACITY);
        let inner = Arc::new(Inner {
            client,
            subscriptions: Mutex::new(Vec::new()),
        });
        let driver = MqttEventLoop {
            event_loop,
            inner: Arc::clone(&inner),
        };
        (Self { inner }, driver)
    }
}

/// Drives the MQTT connection: polls, reconnects, and dispatches inbound
/// publishes to the handler.
pub struct MqttEventLoop {
    event_loop: rumqttc::EventLoop,
    inner: Arc<Inner>,
}

impl MqttEventLoop {
    /// Spawn the polling task. Runs until the process exits; the broker's
    /// last-will marks the service offline if the connection drops without
    /// the explicit shutdown publish running.
    pub fn spawn<H>(mut self, handler: H) -> JoinHandle<()>
    where
        H: MessageHandler + Send + Sync + 'static,
    {
        tokio::spawn(async move {
            loop {
                match self.event_loop.poll().await {
                    Ok(Event::Incoming(Packet::ConnAck(_))) => {
                        tracing::info!("connected to MQTT broker");
                        self.inner.resubscribe().await;
                    }
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        handler.on_message(&publish.topic, &publish.payload).await;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(%err, "MQTT connection error, retrying");
                        tokio::time::sleep(RECONNECT_DELAY).await;
                    }
                }
            }
        })
    }
}

impl Inner {
    async fn resubscribe(&self) {
        let patterns = self.subscriptions.lock().expect("poisoned lock").clone();
        for pattern in patterns {
            if let Err(err) = self.client.subscribe(&pattern, QoS::AtLeastOnce).await {
                tracing::warn!(%err, %pattern, "failed to re-subscribe after reconnect");
            }
        }
    }
}

impl BrokerGateway for MqttGateway {
    async fn publish(&self, payload: String, topic: String) -> Result<(), ChoreHubError> {
        self.inner
            .client
            .publish(topic, QoS::AtLeastOnce, true, payload)
            .await
            .map_err(MqttError::Client)?;
        Ok(())
    }

    async fn subscribe(&self, pattern: &str) -> Result<(), ChoreHubError> {
        self.inner
            .subscriptions
            .lock()
            .expect("poisoned lock")
            .push(pattern.to_string());
        self.inner
            .client
            .subscribe(pattern, QoS::AtLeastOnce)
            .await
            .map_err(MqttError::Client)?;
        Ok(())
    }
}

fn mqtt_options(config: &MqttConfig) -> MqttOptions {
    let mut options = MqttOptions::new(
        config.client_id.clone(),
        config.broker_host.clone(),
        config.broker_port,
    );
    options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        options.set_credentials(username.clone(), password.clone());
    }
    options.set_last_will(LastWill::new(
        topics::availability_topic(),
        topics::PAYLOAD_OFFLINE,
        QoS::AtLeastOnce,
        true,
    ));
    options
}
