//! Inbound command handling.
//!
//! The only command class today is mark-done: `chorehub/chores/{id}/done/set`.
//! The broker protocol has no reply channel, so every failure mode degrades
//! to a log line and a dropped message.

use chorehub_app::ports::chore_store::ChoreStore;
use chorehub_app::ports::sync::StatePublisher;
use chorehub_domain::id::ChoreId;

use crate::gateway::MessageHandler;
use crate::topics;

/// Parses inbound command topics and applies the mutation they request.
#[derive(Debug, Clone)]
pub struct MqttCommandHandler<S, SP> {
    store: S,
    publisher: SP,
}

impl<S, SP> MqttCommandHandler<S, SP> {
    pub fn new(store: S, publisher: SP) -> Self {
        Self { store, publisher }
    }
}

/// Extract the chore id from a `chorehub/chores/{id}/done/...` topic.
///
/// Returns `None` for anything that is not a well-formed mark-done command;
/// unrecognized commands are ignored, not errors.
fn parse_done_command(topic: &str) -> Option<ChoreId> {
    let parts: Vec<&str> = topic.split('/').collect();
    if parts.len() < 4 || parts[0] != topics::TOPIC_ROOT || parts[1] != "chores" {
        return None;
    }
    let chore_id = parts[2].parse::<ChoreId>().ok()?;
    if parts[3] != "done" {
        return None;
    }
    Some(chore_id)
}

impl<S, SP> MessageHandler for MqttCommandHandler<S, SP>
where
    S: ChoreStore + Send + Sync,
    SP: StatePublisher + Send + Sync,
{
    async fn on_message(&self, topic: &str, _payload: &[u8]) {
        let Some(chore_id) = parse_done_command(topic) else {
            tracing::warn!(%topic, "ignoring unrecognized broker message");
            return;
        };

        match self.store.mark_done(chore_id).await {
            Ok(Some(chore)) => {
                tracing::info!(%chore_id, "chore marked done via broker command");
                self.publisher.publish_status_and_attributes(&chore).await;
            }
            Ok(None) => {
                tracing::warn!(%chore_id, "mark-done command for unknown chore");
            }
            Err(err) => {
                tracing::error!(%err, %chore_id, "failed to mark chore done");
            }
        }
    }
}
