//! # chorehub-adapter-mqtt
//!
//! MQTT adapter — synchronizes chore state with a home-automation hub.
//!
//! ## Responsibilities
//! - Publish each chore's derived status and attributes to retained topics
//! - Publish/retract Home Assistant discovery documents as chores come and go
//! - Subscribe to per-chore command topics and translate inbound mark-done
//!   commands into chore mutations
//! - Periodically re-publish all chore state as a self-healing sweep
//! - Announce service availability across the process lifecycle
//!
//! Everything that talks to the broker is best-effort: failures are logged
//! and swallowed so broker unavailability never fails a chore operation.
//!
//! ## Dependency rule
//! Depends on `chorehub-app` (port traits) and `chorehub-domain` only.

pub mod attributes;
pub mod command;
pub mod config;
pub mod discovery;
pub mod discovery_service;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod publisher;
pub mod refresher;
#[cfg(test)]
mod testutil;
pub mod topics;

pub use command::MqttCommandHandler;
pub use config::MqttConfig;
pub use discovery_service::MqttDiscoveryPublisher;
pub use gateway::{MessageHandler, MqttEventLoop, MqttGateway};
pub use lifecycle::AvailabilityLifecycle;
pub use publisher::MqttStatePublisher;
pub use refresher::StatusRefresher;
