//! MQTT adapter error types.

use chorehub_domain::error::ChoreHubError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client returned an error.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// Failed to serialize an outgoing payload as JSON.
    #[error("failed to serialize MQTT payload")]
    PayloadSerialize(#[source] serde_json::Error),
}

impl From<MqttError> for ChoreHubError {
    fn from(err: MqttError) -> Self {
        ChoreHubError::Broker(Box::new(err))
    }
}

impl From<rumqttc::ClientError> for MqttError {
    fn from(err: rumqttc::ClientError) -> Self {
        Self::Client(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_serialize_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = MqttError::PayloadSerialize(json_err);
        assert_eq!(err.to_string(), "failed to serialize MQTT payload");
    }

    #[test]
    fn should_convert_to_broker_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: ChoreHubError = MqttError::PayloadSerialize(json_err).into();
        assert!(matches!(err, ChoreHubError::Broker(_)));
    }
}
