use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::sync::mpsc;

use super::{
    ConnectionId,
    history::HistoryStore,
    msg::{Payload, ServerEvent},
    registry::RoomRegistry,
};

pub type Outbox = mpsc::UnboundedSender<ServerEvent>;
pub type Inbox = mpsc::UnboundedReceiver<ServerEvent>;

/// Shared relay state: history, membership and the outbound queue of every
/// live connection. Clones share the same state.
///
/// Everything sits behind one lock so that a join's history snapshot and the
/// live broadcasts that follow it can neither overlap nor leave a gap, and so
/// that every member of a room sees that room's messages in history order.
/// The lock is never held across an `.await`; queues are unbounded so a send
/// never blocks.
#[derive(Clone, Default)]
pub struct Hub {
    inner: Arc<Mutex<HubInner>>,
}

#[derive(Default)]
struct HubInner {
    history: HistoryStore,
    registry: RoomRegistry,
    outboxes: HashMap<ConnectionId, Outbox>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HubInner> {
        // every critical section leaves the maps consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn connect(&self) -> (ConnectionId, Inbox) {
        let id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().outboxes.insert(id, tx);
        (id, rx)
    }

    /// Adds `id` to `room` and sends it, and only it, the room's backlog.
    pub fn join(&self, id: ConnectionId, room: &str) {
        let mut inner = self.lock();
        inner.registry.join(id, room);
        let messages = inner.history.history(room);
        if let Some(outbox) = inner.outboxes.get(&id) {
            let _ = outbox.send(ServerEvent::History { messages });
        }
    }

    /// Appends to the room's history and relays to its current members.
    /// Returns the number of members the message was handed to.
    pub fn message(&self, room: &str, message: Payload) -> usize {
        let mut inner = self.lock();
        inner.history.append(room, message.clone());

        let mut delivered = 0;
        for member in inner.registry.members_of(room) {
            let Some(outbox) = inner.outboxes.get(&member) else {
                continue;
            };
            let event = ServerEvent::Message {
                message: message.clone(),
            };
            if outbox.send(event).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Removes the connection from all rooms and drops its queue. Calling it
    /// again for the same connection does nothing. Returns the rooms it left.
    pub fn disconnect(&self, id: ConnectionId) -> Vec<String> {
        let mut inner = self.lock();
        inner.outboxes.remove(&id);
        inner.registry.leave_all(id)
    }

    pub fn history(&self, room: &str) -> Vec<Payload> {
        self.lock().history.history(room)
    }

    pub fn members(&self, room: &str) -> HashSet<ConnectionId> {
        self.lock().registry.members_of(room)
    }

    pub fn connections(&self) -> usize {
        self.lock().outboxes.len()
    }
}
