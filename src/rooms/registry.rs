use std::collections::{HashMap, HashSet};

use super::ConnectionId;

/// Room membership in both directions, so fan-out and disconnect are each a
/// single lookup. A connection may belong to several rooms at once: joining
/// never leaves the rooms joined before.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    members: HashMap<String, HashSet<ConnectionId>>,
    joined: HashMap<ConnectionId, HashSet<String>>,
}

impl RoomRegistry {
    /// Returns false if the connection was already a member.
    pub fn join(&mut self, connection: ConnectionId, room: &str) -> bool {
        self.joined.entry(connection).or_default().insert(room.to_owned());
        self.members.entry(room.to_owned()).or_default().insert(connection)
    }

    /// Removes the connection from every room it joined. Rooms themselves are
    /// kept even when their member set becomes empty.
    pub fn leave_all(&mut self, connection: ConnectionId) -> Vec<String> {
        let Some(rooms) = self.joined.remove(&connection) else {
            return Vec::new();
        };

        for room in &rooms {
            if let Some(members) = self.members.get_mut(room) {
                members.remove(&connection);
            }
        }

        rooms.into_iter().collect()
    }

    pub fn members_of(&self, room: &str) -> HashSet<ConnectionId> {
        self.members.get(room).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_room_has_no_members() {
        let registry = RoomRegistry::default();
        assert!(registry.members_of("nowhere").is_empty());
    }

    #[test]
    fn join_keeps_previous_rooms() {
        let mut registry = RoomRegistry::default();
        let a = ConnectionId::new();

        assert!(registry.join(a, "x"));
        assert!(registry.join(a, "y"));
        assert!(!registry.join(a, "y"));

        assert!(registry.members_of("x").contains(&a));
        assert!(registry.members_of("y").contains(&a));

        let mut rooms = registry.leave_all(a);
        rooms.sort();
        assert_eq!(rooms, vec!["x".to_owned(), "y".to_owned()]);
    }

    #[test]
    fn leave_all_removes_every_membership() {
        let mut registry = RoomRegistry::default();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        registry.join(a, "x");
        registry.join(a, "y");
        registry.join(b, "x");

        let mut left = registry.leave_all(a);
        left.sort();
        assert_eq!(left, vec!["x".to_owned(), "y".to_owned()]);

        assert_eq!(registry.members_of("x"), HashSet::from([b]));
        assert!(registry.members_of("y").is_empty());
        assert!(registry.leave_all(a).is_empty());
    }

    #[test]
    fn leave_all_is_idempotent() {
        let mut registry = RoomRegistry::default();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        registry.join(a, "x");
        registry.join(b, "x");

        registry.leave_all(a);
        let once = registry.members_of("x");
        assert!(registry.leave_all(a).is_empty());
        assert_eq!(registry.members_of("x"), once);

        // never joined anything
        assert!(registry.leave_all(ConnectionId::new()).is_empty());
    }
}
