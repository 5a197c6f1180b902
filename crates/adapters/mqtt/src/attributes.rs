//! Wire projection of a chore's descriptive attributes.
//!
//! Serialized to JSON and published to the attributes topic; field names are
//! part of the hub-facing contract and must not change.

use chorehub_domain::chore::Chore;
use chorehub_domain::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Attributes payload published alongside a chore's status.
///
/// Constructed immediately before each publish and discarded after
/// serialization; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreAttributes {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Not tracked upstream yet; always absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_done: Option<Timestamp>,
}

impl From<&Chore> for ChoreAttributes {
    fn from(chore: &Chore) -> Self {
        Self {
            title: chore.name.clone(),
            due: chore.next_due_at,
            assignee: chore.assignee.as_ref().map(|a| a.name.clone()),
            interval_days: None,
            notes: chore.description.clone(),
            last_done: chore.last_completed_at,
        }
    }
}
