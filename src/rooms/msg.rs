use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whatever the client sent as a message. Never inspected by the server.
pub type Payload = Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ClientEvent {
    Join { room: String },
    Message { room: String, message: Payload },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ServerEvent {
    History { messages: Vec<Payload> },
    Message { message: Payload },
}

impl ClientEvent {
    pub fn from_frame(frame: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(frame)
    }
}

impl ServerEvent {
    pub fn to_frame(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
