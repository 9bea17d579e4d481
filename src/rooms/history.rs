use std::collections::HashMap;

use super::msg::Payload;

/// Per-room message log. Append-only and unbounded: nothing is ever evicted,
/// so memory grows with every relayed message for the life of the process.
#[derive(Debug, Default)]
pub struct HistoryStore {
    rooms: HashMap<String, Vec<Payload>>,
}

impl HistoryStore {
    pub fn append(&mut self, room: &str, message: Payload) {
        self.rooms.entry(room.to_owned()).or_default().push(message);
    }

    /// Copy of the room's log at the time of the call; empty for unknown rooms.
    pub fn history(&self, room: &str) -> Vec<Payload> {
        self.rooms.get(room).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_room_has_empty_history() {
        let store = HistoryStore::default();
        assert!(store.history("nowhere").is_empty());
    }

    #[test]
    fn appends_keep_insertion_order() {
        let mut store = HistoryStore::default();
        store.append("room1", json!("hello"));
        store.append("room1", json!({"text": "world"}));
        store.append("room2", json!(3));

        assert_eq!(
            store.history("room1"),
            vec![json!("hello"), json!({"text": "world"})]
        );
        assert_eq!(store.history("room2"), vec![json!(3)]);
    }

    #[test]
    fn returned_history_is_a_copy() {
        let mut store = HistoryStore::default();
        store.append("room1", json!("a"));

        let mut copy = store.history("room1");
        copy.push(json!("b"));
        copy[0] = json!("changed");

        assert_eq!(store.history("room1"), vec![json!("a")]);
    }
}
