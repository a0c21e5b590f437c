//! The in-memory queue store and its ordering rules.

use crate::entry::{Entry, ServiceType};
use crate::error::{Error, Result};

/// An ordered, in-memory collection of queue entries.
///
/// The store holds unserved entries first, in priority order, followed by
/// served entries in the order they were dequeued. Every mutation ends
/// with a [`QueueStore::recompute`], so unserved positions always form
/// the contiguous range `1..=K`.
///
/// The store performs no synchronization of its own; callers serialize
/// access (the server wraps it in a single mutex).
#[derive(Debug, Default)]
pub struct QueueStore {
    entries: Vec<Entry>,
}

impl QueueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reapplies the priority rule and renumbers unserved positions.
    ///
    /// Splits the entries into unserved and served groups (preserving
    /// relative order within each), stably sorts the unserved group so
    /// that `Priority` precedes `Normal`, assigns positions `1..=K`, and
    /// rewrites the store as the sorted unserved group followed by the
    /// served group unchanged. Idempotent: a second call with no
    /// intervening mutation observes nothing left to move.
    pub fn recompute(&mut self) {
        let (mut unserved, served): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| !e.served);

        // Stable sort: equal ranks keep their existing relative order,
        // which already reflects arrival order.
        unserved.sort_by_key(|e| e.service_type.rank());
        for (i, entry) in unserved.iter_mut().enumerate() {
            entry.position = Some(i as u32 + 1);
        }

        self.entries = unserved;
        self.entries.extend(served);
    }

    /// Returns the unserved entry at the given position, if any.
    ///
    /// Served entries carry no position and can never match.
    #[must_use]
    pub fn find_by_position(&self, position: u32) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.position == Some(position))
    }

    /// Appends a new unserved entry and renumbers the queue.
    ///
    /// Returns the stored entry with its assigned position. The caller
    /// is responsible for name validation; the store accepts any name.
    pub fn enqueue(&mut self, name: impl Into<String>, service_type: ServiceType) -> Entry {
        let mut entry = Entry::new(name, service_type);
        self.entries.push(entry.clone());
        self.recompute();

        // The stable sort keeps the new arrival at the tail of its
        // service-type group: last of the Priority block, or last
        // overall when Normal.
        let position = match service_type {
            ServiceType::Priority => self
                .entries
                .iter()
                .filter(|e| !e.served && e.service_type == ServiceType::Priority)
                .count(),
            ServiceType::Normal => self.unserved_len(),
        };
        entry.position = Some(position as u32);
        entry
    }

    /// Serves the entry at the head of the queue, if any.
    ///
    /// Marks the entry at position 1 as served (clearing its position),
    /// renumbers the remainder, and returns the unserved entries in
    /// their new order. A no-op on an empty queue, still returning the
    /// (empty) list.
    pub fn advance(&mut self) -> Vec<Entry> {
        self.recompute();
        if let Some(head) = self.entries.iter_mut().find(|e| e.position == Some(1)) {
            head.served = true;
            head.position = None;
        }
        self.recompute();
        self.unserved()
    }

    /// Permanently removes the unserved entry at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no unserved entry holds that
    /// position; served entries are invisible to position lookups.
    pub fn remove_by_position(&mut self, position: u32) -> Result<()> {
        self.recompute();
        let index = self
            .entries
            .iter()
            .position(|e| e.position == Some(position))
            .ok_or_else(|| Error::not_found(position))?;
        self.entries.remove(index);
        self.recompute();
        Ok(())
    }

    /// Returns a snapshot of the unserved entries in queue order.
    #[must_use]
    pub fn unserved(&self) -> Vec<Entry> {
        self.entries.iter().filter(|e| !e.served).cloned().collect()
    }

    /// Returns the number of unserved entries.
    #[must_use]
    pub fn unserved_len(&self) -> usize {
        self.entries.iter().filter(|e| !e.served).count()
    }

    /// Returns the total number of retained entries, served included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store retains no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(entries: &[Entry]) -> Vec<u32> {
        entries.iter().map(|e| e.position.unwrap()).collect()
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_positions_are_contiguous_after_any_enqueue_sequence() {
        let mut store = QueueStore::new();
        let tags = [
            ServiceType::Normal,
            ServiceType::Priority,
            ServiceType::Normal,
            ServiceType::Priority,
            ServiceType::Priority,
            ServiceType::Normal,
        ];

        for (i, tag) in tags.iter().enumerate() {
            store.enqueue(format!("client{i}"), *tag);
            let unserved = store.unserved();
            let expected: Vec<u32> = (1..=unserved.len() as u32).collect();
            assert_eq!(positions(&unserved), expected);
        }
    }

    #[test]
    fn test_priority_entries_precede_normal_entries() {
        let mut store = QueueStore::new();
        store.enqueue("n1", ServiceType::Normal);
        store.enqueue("p1", ServiceType::Priority);
        store.enqueue("n2", ServiceType::Normal);
        store.enqueue("p2", ServiceType::Priority);

        let unserved = store.unserved();
        let max_priority = unserved
            .iter()
            .filter(|e| e.service_type == ServiceType::Priority)
            .map(|e| e.position.unwrap())
            .max()
            .unwrap();
        let min_normal = unserved
            .iter()
            .filter(|e| e.service_type == ServiceType::Normal)
            .map(|e| e.position.unwrap())
            .min()
            .unwrap();
        assert!(max_priority < min_normal);
    }

    #[test]
    fn test_same_type_entries_keep_arrival_order() {
        let mut store = QueueStore::new();
        store.enqueue("p1", ServiceType::Priority);
        store.enqueue("n1", ServiceType::Normal);
        store.enqueue("p2", ServiceType::Priority);
        store.enqueue("n2", ServiceType::Normal);

        let unserved = store.unserved();
        assert_eq!(names(&unserved), vec!["p1", "p2", "n1", "n2"]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut store = QueueStore::new();
        store.enqueue("n1", ServiceType::Normal);
        store.enqueue("p1", ServiceType::Priority);
        store.advance();
        store.enqueue("n2", ServiceType::Normal);

        store.recompute();
        let first = store.unserved();
        store.recompute();
        let second = store.unserved();

        assert_eq!(names(&first), names(&second));
        assert_eq!(positions(&first), positions(&second));
    }

    #[test]
    fn test_priority_arrival_jumps_ahead_of_normal() {
        let mut store = QueueStore::new();
        let ana = store.enqueue("Ana", ServiceType::Normal);
        assert_eq!(ana.position, Some(1));

        let bob = store.enqueue("Bob", ServiceType::Priority);
        assert_eq!(bob.position, Some(1));

        let unserved = store.unserved();
        assert_eq!(names(&unserved), vec!["Bob", "Ana"]);
        assert_eq!(positions(&unserved), vec![1, 2]);
    }

    #[test]
    fn test_advance_serves_head_and_renumbers() {
        let mut store = QueueStore::new();
        store.enqueue("Ana", ServiceType::Normal);
        store.enqueue("Bob", ServiceType::Priority);

        let remaining = store.advance();
        assert_eq!(names(&remaining), vec!["Ana"]);
        assert_eq!(positions(&remaining), vec![1]);

        // Bob is retained as served, with no position.
        assert_eq!(store.len(), 2);
        assert_eq!(store.unserved_len(), 1);
    }

    #[test]
    fn test_advance_on_empty_queue_is_a_noop() {
        let mut store = QueueStore::new();
        assert!(store.advance().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_by_position_renumbers() {
        let mut store = QueueStore::new();
        store.enqueue("Ana", ServiceType::Normal);
        store.enqueue("Carla", ServiceType::Normal);

        store.remove_by_position(1).unwrap();

        let unserved = store.unserved();
        assert_eq!(names(&unserved), vec!["Carla"]);
        assert_eq!(positions(&unserved), vec![1]);
        // Deletion is permanent, not a served-flag flip.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_past_end_of_queue_is_not_found() {
        let mut store = QueueStore::new();
        store.enqueue("Ana", ServiceType::Normal);
        store.enqueue("Bob", ServiceType::Normal);

        assert!(store.find_by_position(5).is_none());
    }

    #[test]
    fn test_served_entries_are_invisible_to_position_lookups() {
        let mut store = QueueStore::new();
        store.enqueue("Ana", ServiceType::Normal);
        store.enqueue("Bob", ServiceType::Normal);

        // Serve Ana; Bob shifts into position 1.
        store.advance();

        let at_one = store.find_by_position(1).unwrap();
        assert_eq!(at_one.name, "Bob");

        // Ana's former position 2 now belongs to nobody.
        assert!(store.find_by_position(2).is_none());
        let err = store.remove_by_position(2).unwrap_err();
        assert_eq!(err.to_string(), "No client at position 2.");
    }

    #[test]
    fn test_remove_missing_position_is_not_found() {
        let mut store = QueueStore::new();
        let err = store.remove_by_position(1).unwrap_err();
        assert!(matches!(err, Error::NotFound { position: 1 }));
    }

    #[test]
    fn test_enqueue_returns_recomputed_position() {
        let mut store = QueueStore::new();
        store.enqueue("p1", ServiceType::Priority);
        store.enqueue("n1", ServiceType::Normal);

        // A new priority arrival slots behind the existing priority
        // block but ahead of every normal entry.
        let p2 = store.enqueue("p2", ServiceType::Priority);
        assert_eq!(p2.position, Some(2));

        let n2 = store.enqueue("n2", ServiceType::Normal);
        assert_eq!(n2.position, Some(4));
    }
}
