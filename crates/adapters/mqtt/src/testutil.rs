//! Shared fakes for the adapter's unit tests.

use std::sync::Mutex;

use chorehub_app::ports::broker::BrokerGateway;
use chorehub_domain::chore::{Chore, RecurrenceKind};
use chorehub_domain::error::ChoreHubError;
use chorehub_domain::id::ChoreId;

/// Gateway fake that records every publish, or fails each call.
#[derive(Debug, Default)]
pub(crate) struct FakeGateway {
    pub published: Mutex<Vec<(String, String)>>,
    pub subscribed: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeGateway {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Topics published so far, in order.
    pub(crate) fn topics(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|(topic, _)| topic.clone())
            .collect()
    }
}

impl BrokerGateway for &FakeGateway {
    async fn publish(&self, payload: String, topic: String) -> Result<(), ChoreHubError> {
        if self.fail {
            return Err(ChoreHubError::Broker("broker down".into()));
        }
        self.published.lock().unwrap().push((topic, payload));
        Ok(())
    }

    async fn subscribe(&self, pattern: &str) -> Result<(), ChoreHubError> {
        if self.fail {
            return Err(ChoreHubError::Broker("broker down".into()));
        }
        self.subscribed.lock().unwrap().push(pattern.to_string());
        Ok(())
    }
}

/// One-time chore named "Vacuum" with the given id and no timestamps.
pub(crate) fn chore_with_id(id: i64) -> Chore {
    let mut chore = Chore::builder()
        .name("Vacuum")
        .recurrence_kind(RecurrenceKind::OneTime)
        .build()
        .unwrap();
    chore.id = ChoreId::new(id);
    chore
}
