//! Routing of transport envelopes to registered channels.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use winbridge_protocols::channel::{MethodCall, MethodResponse};
use winbridge_protocols::error::ChannelError;

use crate::registry::ChannelRegistry;

/// A method call as it arrives from the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Caller-chosen correlation id, echoed back in the reply.
    #[serde(default)]
    pub id: serde_json::Value,

    /// Target channel. Falls back to the messenger's default channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(flatten)]
    pub call: MethodCall,
}

impl Envelope {
    pub fn new(call: MethodCall) -> Self {
        Self {
            id: serde_json::Value::Null,
            channel: None,
            call,
        }
    }

    pub fn with_id(mut self, id: impl Into<serde_json::Value>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

/// A response paired with the id of the envelope it answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub id: serde_json::Value,

    #[serde(flatten)]
    pub response: MethodResponse,
}

/// Dispatches envelopes to the handler registered for their channel.
pub struct Messenger {
    registry: Arc<ChannelRegistry>,
    default_channel: String,
}

impl Messenger {
    pub fn new(registry: Arc<ChannelRegistry>, default_channel: impl Into<String>) -> Self {
        Self {
            registry,
            default_channel: default_channel.into(),
        }
    }

    pub fn registry(&self) -> &Arc<ChannelRegistry> {
        &self.registry
    }

    pub fn default_channel(&self) -> &str {
        &self.default_channel
    }

    /// Route one envelope and produce its reply.
    pub fn dispatch(&self, envelope: Envelope) -> Reply {
        let channel = envelope
            .channel
            .as_deref()
            .unwrap_or(&self.default_channel);

        let response = match self.registry.get(channel) {
            Some(handler) => {
                debug!(channel, method = %envelope.call.method, "Dispatching method call");
                handler.handle(&envelope.call)
            }
            None => {
                warn!(channel, "No handler registered for channel");
                ChannelError::NotFound(channel.to_string()).into()
            }
        };

        Reply {
            id: envelope.id,
            response,
        }
    }

    /// Parse one JSON line and route it.
    ///
    /// A line that is not a valid envelope yields a `malformed_envelope`
    /// error reply with a null id.
    pub fn dispatch_line(&self, line: &str) -> Reply {
        match serde_json::from_str::<Envelope>(line) {
            Ok(envelope) => self.dispatch(envelope),
            Err(e) => {
                warn!(error = %e, "Rejecting malformed envelope");
                Reply {
                    id: serde_json::Value::Null,
                    response: ChannelError::MalformedEnvelope(e.to_string()).into(),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "messenger_tests.rs"]
mod tests;
