use anyhow::bail;
use tracing::{debug, info};

use super::{
    ConnectionId,
    hub::{Hub, Inbox},
    msg::ClientEvent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    /// Most recently joined room. Earlier rooms stay joined.
    Joined(String),
    Disconnected,
}

/// One client connection. Drives the hub from the events the client sends;
/// whatever the hub has for this client arrives on the paired [`Inbox`].
pub struct Session {
    id: ConnectionId,
    hub: Hub,
    state: SessionState,
}

impl Session {
    pub fn connect(hub: &Hub) -> (Self, Inbox) {
        let (id, inbox) = hub.connect();
        debug!(%id, "connected");
        (
            Self {
                id,
                hub: hub.clone(),
                state: SessionState::Connected,
            },
            inbox,
        )
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn handle(&mut self, event: ClientEvent) -> anyhow::Result<()> {
        if self.state == SessionState::Disconnected {
            bail!("connection {} is already disconnected", self.id);
        }

        match event {
            ClientEvent::Join { room } => {
                info!(id = %self.id, %room, "joined room");
                self.hub.join(self.id, &room);
                self.state = SessionState::Joined(room);
            }
            // the room is taken as given, membership is not checked
            ClientEvent::Message { room, message } => {
                let delivered = self.hub.message(&room, message);
                debug!(id = %self.id, %room, delivered, "relayed message");
            }
        }

        Ok(())
    }

    pub fn disconnect(&mut self) {
        if self.state == SessionState::Disconnected {
            return;
        }
        let rooms = self.hub.disconnect(self.id);
        info!(id = %self.id, ?rooms, "user disconnected");
        self.state = SessionState::Disconnected;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.disconnect();
    }
}
