//! Session registry holding every participant connected to this hub
//!
//! The registry is the authoritative list of live participants: network
//! clients behind a real connection and simulated agents (bots) that fill
//! out the world. It supports:
//! - Insertion at the back, preserving join order
//! - O(1) removal by handle when a connection terminates
//! - Forward traversal in insertion order for aggregation passes
//!
//! Entries are stored in a slot arena with intrusive prev/next links, so
//! handles stay valid across unrelated removals and traversal never touches
//! a freed slot. The hub's single mutation path owns the registry; telemetry
//! code only ever walks it read-only.

use log::info;

/// Discriminates how a participant is attached to the hub
///
/// Only `Socket` entries represent real players: they count toward the
/// published player count and are eligible for the leaderboard. Bots
/// participate in gameplay but are invisible to telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// A human-controlled client behind a network connection
    Socket,
    /// A server-driven simulated agent
    Bot,
}

/// Player identity embedded in every registry entry
///
/// Names are chosen by players and are not unique across entries; scores
/// move freely through zero and below during play. Only strictly positive
/// scores are ever published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Per-connection state for one registry participant
///
/// Created when a connection is accepted (or a bot is spawned), mutated by
/// gameplay logic updating the score, and removed when the connection ends.
/// Telemetry reads entries but never mutates or creates them.
#[derive(Debug, Clone)]
pub struct ClientEntry {
    pub kind: ClientKind,
    pub player: Player,
}

impl ClientEntry {
    pub fn new(kind: ClientKind, player: Player) -> Self {
        Self { kind, player }
    }
}

/// Stable handle to a registry entry
///
/// Returned by [`ClientRegistry::insert`] and used for O(1) removal and
/// score updates. A handle is invalidated by removing its entry; the slot
/// may then be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientHandle(usize);

struct Slot {
    entry: ClientEntry,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered collection of live participants
///
/// Insertion-ordered doubly linked list laid over a slot arena: removals
/// unlink in O(1) and recycle the slot through a free list, while traversal
/// follows the links from head to tail and stops cleanly at the end.
#[derive(Default)]
pub struct ClientRegistry {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant at the back of the traversal order
    pub fn insert(&mut self, entry: ClientEntry) -> ClientHandle {
        info!("{:?} client '{}' joined", entry.kind, entry.player.name);

        let slot = Slot {
            entry,
            prev: self.tail,
            next: None,
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                index
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };

        if let Some(tail) = self.tail {
            if let Some(slot) = self.slots[tail].as_mut() {
                slot.next = Some(index);
            }
        } else {
            self.head = Some(index);
        }
        self.tail = Some(index);
        self.len += 1;

        ClientHandle(index)
    }

    /// Unregisters a participant, returning its final entry state
    ///
    /// Returns `None` if the handle was already removed. Remaining handles
    /// and the traversal order of the other entries are unaffected.
    pub fn remove(&mut self, handle: ClientHandle) -> Option<ClientEntry> {
        let slot = self.slots.get_mut(handle.0)?.take()?;

        match slot.prev {
            Some(prev) => {
                if let Some(prev_slot) = self.slots[prev].as_mut() {
                    prev_slot.next = slot.next;
                }
            }
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => {
                if let Some(next_slot) = self.slots[next].as_mut() {
                    next_slot.prev = slot.prev;
                }
            }
            None => self.tail = slot.prev,
        }

        self.free.push(handle.0);
        self.len -= 1;

        info!("{:?} client '{}' left", slot.entry.kind, slot.entry.player.name);
        Some(slot.entry)
    }

    pub fn get(&self, handle: ClientHandle) -> Option<&ClientEntry> {
        self.slots.get(handle.0)?.as_ref().map(|slot| &slot.entry)
    }

    /// Mutable access for the gameplay subsystem updating scores
    pub fn get_mut(&mut self, handle: ClientHandle) -> Option<&mut ClientEntry> {
        self.slots
            .get_mut(handle.0)?
            .as_mut()
            .map(|slot| &mut slot.entry)
    }

    /// Walks every live entry in insertion order
    ///
    /// Read-only and restartable; each call reflects the registry as it is
    /// at call time. The walk follows the live links only, so it terminates
    /// at the tail and can never land on a freed slot.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            registry: self,
            cursor: self.head,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Forward iterator over live registry entries
pub struct Iter<'a> {
    registry: &'a ClientRegistry,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ClientEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = self.registry.slots[index].as_ref()?;
        self.cursor = slot.next;
        Some(&slot.entry)
    }
}

impl<'a> IntoIterator for &'a ClientRegistry {
    type Item = &'a ClientEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socket(name: &str, score: i32) -> ClientEntry {
        ClientEntry::new(
            ClientKind::Socket,
            Player {
                name: name.to_string(),
                score,
            },
        )
    }

    #[test]
    fn test_empty_registry() {
        let registry = ClientRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut registry = ClientRegistry::new();
        registry.insert(socket("Alice", 1));
        registry.insert(socket("Bob", 2));
        registry.insert(socket("Carol", 3));

        let names: Vec<&str> = registry.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut registry = ClientRegistry::new();
        let _a = registry.insert(socket("Alice", 1));
        let b = registry.insert(socket("Bob", 2));
        let _c = registry.insert(socket("Carol", 3));

        let removed = registry.remove(b).unwrap();
        assert_eq!(removed.player.name, "Bob");

        let names: Vec<&str> = registry.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut registry = ClientRegistry::new();
        let a = registry.insert(socket("Alice", 1));
        let _b = registry.insert(socket("Bob", 2));
        let c = registry.insert(socket("Carol", 3));

        registry.remove(a);
        registry.remove(c);

        let names: Vec<&str> = registry.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn test_remove_twice_returns_none() {
        let mut registry = ClientRegistry::new();
        let a = registry.insert(socket("Alice", 1));

        assert!(registry.remove(a).is_some());
        assert!(registry.remove(a).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_slot_reuse_after_removal() {
        let mut registry = ClientRegistry::new();
        let a = registry.insert(socket("Alice", 1));
        registry.insert(socket("Bob", 2));
        registry.remove(a);

        // Reused slot still lands at the back of the traversal order
        registry.insert(socket("Carol", 3));
        let names: Vec<&str> = registry.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
        assert_eq!(registry.slots.len(), 2);
    }

    #[test]
    fn test_score_update_through_handle() {
        let mut registry = ClientRegistry::new();
        let a = registry.insert(socket("Alice", 0));

        registry.get_mut(a).unwrap().player.score = 42;
        assert_eq!(registry.get(a).unwrap().player.score, 42);
    }

    #[test]
    fn test_churn_keeps_links_consistent() {
        let mut registry = ClientRegistry::new();
        let mut handles = Vec::new();

        for i in 0..16 {
            handles.push(registry.insert(socket(&format!("p{}", i), i)));
        }
        // Drop every other entry, then add a few more
        for handle in handles.iter().step_by(2) {
            registry.remove(*handle);
        }
        for i in 16..20 {
            registry.insert(socket(&format!("p{}", i), i));
        }

        assert_eq!(registry.len(), 12);
        assert_eq!(registry.iter().count(), 12);

        let scores: Vec<i32> = registry.iter().map(|e| e.player.score).collect();
        assert_eq!(scores, vec![1, 3, 5, 7, 9, 11, 13, 15, 16, 17, 18, 19]);
    }
}
