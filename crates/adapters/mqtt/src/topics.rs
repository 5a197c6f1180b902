//! Topic names for all chore-related broker traffic.
//!
//! Operational topics follow `chorehub/chores/{id}/{aspect}`; discovery
//! topics live under the hub's own `homeassistant` prefix. Topics are pure
//! functions of the chore id — none is ever stored, all are recomputed.

use chorehub_domain::id::ChoreId;

/// Root segment of all operational topics.
pub const TOPIC_ROOT: &str = "chorehub";

/// Home Assistant discovery prefix.
pub const DISCOVERY_PREFIX: &str = "homeassistant";

/// Wildcard pattern matching every chore's mark-done command topic.
pub const COMMAND_SUBSCRIPTION: &str = "chorehub/chores/+/done/set";

/// Availability payload meaning the service is up.
pub const PAYLOAD_ONLINE: &str = "online";

/// Availability payload meaning the service is down.
pub const PAYLOAD_OFFLINE: &str = "offline";

const CHORES: &str = "chores";

/// Status topic for a chore: `chorehub/chores/{id}/status`.
#[must_use]
pub fn status_topic(chore_id: ChoreId) -> String {
    format!("{TOPIC_ROOT}/{CHORES}/{chore_id}/status")
}

/// Attributes topic for a chore: `chorehub/chores/{id}/attributes`.
#[must_use]
pub fn attributes_topic(chore_id: ChoreId) -> String {
    format!("{TOPIC_ROOT}/{CHORES}/{chore_id}/attributes")
}

/// Command topic to mark a chore as done: `chorehub/chores/{id}/done/set`.
#[must_use]
pub fn done_command_topic(chore_id: ChoreId) -> String {
    format!("{TOPIC_ROOT}/{CHORES}/{chore_id}/done/set")
}

/// Service-wide availability topic: `chorehub/status`.
#[must_use]
pub fn availability_topic() -> String {
    format!("{TOPIC_ROOT}/status")
}

/// Discovery topic for a chore's status sensor:
/// `homeassistant/sensor/chorehub_chore_{id}_status/config`.
#[must_use]
pub fn discovery_status_topic(chore_id: ChoreId) -> String {
    format!("{DISCOVERY_PREFIX}/sensor/chorehub_chore_{chore_id}_status/config")
}

/// Discovery topic for a chore's done button:
/// `homeassistant/button/chorehub_chore_{id}_done/config`.
#[must_use]
pub fn discovery_done_button_topic(chore_id: ChoreId) -> String {
    format!("{DISCOVERY_PREFIX}/button/chorehub_chore_{chore_id}_done/config")
}

/// Discovery topic for the service availability sensor:
/// `homeassistant/binary_sensor/chorehub_availability/config`.
#[must_use]
pub fn discovery_availability_topic() -> String {
    format!("{DISCOVERY_PREFIX}/binary_sensor/chorehub_availability/config")
}
