//! Home Assistant discovery documents.
//!
//! Field names follow the hub's discovery schema verbatim; renaming any of
//! them breaks auto-registration. Documents are built fresh on each
//! discovery event and never stored.

use chorehub_domain::chore::Chore;
use chorehub_domain::id::ChoreId;
use serde::Serialize;

use crate::topics;

const DEVICE_IDENTIFIER: &str = "chorehub";
const DEVICE_NAME: &str = "ChoreHub";

/// Device-grouping block shared by every published entity so the hub shows
/// them under a single logical device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub identifiers: Vec<String>,
    pub name: String,
    pub manufacturer: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            identifiers: vec![DEVICE_IDENTIFIER.to_string()],
            name: DEVICE_NAME.to_string(),
            manufacturer: DEVICE_NAME.to_string(),
        }
    }
}

/// Discovery document for a chore's status sensor.
#[derive(Debug, Clone, Serialize)]
pub struct SensorConfig {
    pub name: String,
    pub unique_id: String,
    pub state_topic: String,
    pub json_attributes_topic: String,
    pub availability_topic: String,
    pub payload_available: String,
    pub payload_not_available: String,
    pub device: DeviceInfo,
}

impl SensorConfig {
    #[must_use]
    pub fn for_chore(chore: &Chore) -> Self {
        Self {
            name: format!("Chore: {}", chore.name),
            unique_id: format!("chorehub_chore_{}_status", chore.id),
            state_topic: topics::status_topic(chore.id),
            json_attributes_topic: topics::attributes_topic(chore.id),
            availability_topic: topics::availability_topic(),
            payload_available: topics::PAYLOAD_ONLINE.to_string(),
            payload_not_available: topics::PAYLOAD_OFFLINE.to_string(),
            device: DeviceInfo::default(),
        }
    }
}

/// Discovery document for a chore's mark-done button.
#[derive(Debug, Clone, Serialize)]
pub struct ButtonConfig {
    pub name: String,
    pub unique_id: String,
    pub command_topic: String,
    pub payload_press: String,
    pub availability_topic: String,
    pub payload_available: String,
    pub payload_not_available: String,
    pub device: DeviceInfo,
}

impl ButtonConfig {
    #[must_use]
    pub fn for_chore(chore: &Chore) -> Self {
        Self {
            name: format!("Mark done: {}", chore.name),
            unique_id: format!("chorehub_chore_{}_done_button", chore.id),
            command_topic: topics::done_command_topic(chore.id),
            payload_press: "1".to_string(),
            availability_topic: topics::availability_topic(),
            payload_available: topics::PAYLOAD_ONLINE.to_string(),
            payload_not_available: topics::PAYLOAD_OFFLINE.to_string(),
            device: DeviceInfo::default(),
        }
    }
}

/// Service-wide availability binary sensor. Tracks the availability topic
/// itself, so it carries no separate availability linkage.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityConfig {
    pub name: String,
    pub unique_id: String,
    pub state_topic: String,
    pub payload_on: String,
    pub payload_off: String,
    pub device: DeviceInfo,
}

impl AvailabilityConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "ChoreHub Availability".to_string(),
            unique_id: "chorehub_availability".to_string(),
            state_topic: topics::availability_topic(),
            payload_on: topics::PAYLOAD_ONLINE.to_string(),
            payload_off: topics::PAYLOAD_OFFLINE.to_string(),
            device: DeviceInfo::default(),
        }
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The two per-chore discovery topics, used for both publication and
/// retraction.
#[must_use]
pub fn chore_discovery_topics(chore_id: ChoreId) -> [String; 2] {
    [
        topics::discovery_status_topic(chore_id),
        topics::discovery_done_button_topic(chore_id),
    ]
}
