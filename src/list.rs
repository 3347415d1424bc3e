//! Recency ordering for resident entries.
//!
//! Entries live in a flat pool of slots and link to each other through
//! [`EntryId`] handles instead of references. The head is the most recently
//! used entry and the tail the least recently used. Freed slots are kept on a
//! free-list and reused by later allocations, so handles stay stable for as
//! long as an entry is resident.

use crate::entry::Entry;

/// Stable handle to an entry in the slot pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// Doubly linked MRU-to-LRU list over a slot pool.
#[derive(Debug)]
pub struct RecencyList<V> {
    slots: Vec<Option<Entry<V>>>,
    /// Vacant slot indices, reused last-in first-out.
    free: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
}

impl<V> RecencyList<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Most recently used entry.
    #[cfg(test)]
    pub fn head(&self) -> Option<EntryId> {
        self.head
    }

    /// Least recently used entry.
    pub fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry<V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Store `entry` in a slot without linking it.
    pub fn alloc(&mut self, entry: Entry<V>) -> EntryId {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                EntryId(idx)
            }
            None => {
                self.slots.push(Some(entry));
                EntryId(self.slots.len() - 1)
            }
        }
    }

    /// Take the entry out of its slot and put the slot on the free-list.
    ///
    /// The entry must already be detached.
    pub fn release(&mut self, id: EntryId) -> Option<Entry<V>> {
        let entry = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(entry)
    }

    /// Unlink `id` from its current position.
    ///
    /// Neighbours are joined to each other; if `id` was the head or the tail,
    /// that end moves to its neighbour. The entry's own links are left as they
    /// were and must be reset before it is linked again.
    pub fn detach(&mut self, id: EntryId) {
        let (prev, next) = match self.get(id) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(entry) = self.get_mut(prev) {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next) => {
                if let Some(entry) = self.get_mut(next) {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Link `id` in front of the current head, making it most recently used.
    pub fn insert_at_head(&mut self, id: EntryId) {
        let old_head = self.head;
        match self.get_mut(id) {
            Some(entry) => {
                entry.prev = None;
                entry.next = old_head;
            }
            None => return,
        }

        if let Some(old_head) = old_head {
            if let Some(entry) = self.get_mut(old_head) {
                entry.prev = Some(id);
            }
        }

        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    /// Drop every entry and slot.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walk linked entries from head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Walk linked entry handles from tail to head.
    pub fn ids_from_tail(&self) -> IdsFromTail<'_, V> {
        IdsFromTail {
            list: self,
            current: self.tail,
        }
    }

    /// Number of occupied slots, linked or not.
    #[cfg(test)]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Iterator over linked entries, most recently used first.
pub struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    current: Option<EntryId>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let entry = list.get(self.current?)?;
        self.current = entry.next;
        Some(entry)
    }
}

/// Iterator over linked entry handles, least recently used first.
pub struct IdsFromTail<'a, V> {
    list: &'a RecencyList<V>,
    current: Option<EntryId>,
}

impl<V> Iterator for IdsFromTail<'_, V> {
    type Item = EntryId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.get(id)?.prev;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn push(list: &mut RecencyList<u32>, key: &str) -> EntryId {
        let id = list.alloc(Entry::new(key.to_string(), 0, Instant::now()));
        list.insert_at_head(id);
        id
    }

    fn keys(list: &RecencyList<u32>) -> Vec<String> {
        list.iter().map(|entry| entry.key().to_string()).collect()
    }

    /// Walk both directions and check the links agree.
    fn assert_links(list: &RecencyList<u32>) {
        let forward: Vec<EntryId> = {
            let mut ids = Vec::new();
            let mut current = list.head();
            while let Some(id) = current {
                ids.push(id);
                current = list.get(id).unwrap().next;
            }
            ids
        };
        let mut backward: Vec<EntryId> = list.ids_from_tail().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        match (list.head(), list.tail()) {
            (None, None) => assert!(forward.is_empty()),
            (Some(head), Some(tail)) => {
                assert!(list.get(head).unwrap().prev.is_none());
                assert!(list.get(tail).unwrap().next.is_none());
            }
            ends => panic!("head and tail disagree: {:?}", ends),
        }
    }

    #[test]
    fn test_empty_list() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_insert_at_head_orders_mru_first() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");
        let c = push(&mut list, "c");

        assert_eq!(keys(&list), ["c", "b", "a"]);
        assert_eq!(list.head(), Some(c));
        assert_eq!(list.tail(), Some(a));
        assert_links(&list);
    }

    #[test]
    fn test_detach_single_element() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");

        list.detach(a);

        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_links(&list);
    }

    #[test]
    fn test_detach_head_tail_and_interior() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        let b = push(&mut list, "b");
        let c = push(&mut list, "c");
        let d = push(&mut list, "d");

        list.detach(d);
        assert_eq!(keys(&list), ["c", "b", "a"]);
        assert_links(&list);

        list.detach(a);
        assert_eq!(keys(&list), ["c", "b"]);
        assert_eq!(list.tail(), Some(b));
        assert_links(&list);

        list.insert_at_head(a);
        list.insert_at_head(d);
        list.detach(b);
        assert_eq!(keys(&list), ["d", "a", "c"]);
        assert_eq!(list.tail(), Some(c));
        assert_links(&list);
    }

    #[test]
    fn test_move_tail_to_head() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");

        list.detach(a);
        list.insert_at_head(a);

        assert_eq!(keys(&list), ["a", "b"]);
        assert_links(&list);
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");

        list.detach(a);
        let entry = list.release(a).unwrap();
        assert_eq!(entry.key(), "a");
        assert!(list.get(a).is_none());
        assert!(list.release(a).is_none());

        let c = push(&mut list, "c");
        assert_eq!(c, a);
        assert_eq!(list.occupied(), 2);
        assert_eq!(keys(&list), ["c", "b"]);
        assert_links(&list);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::with_capacity(4);
        push(&mut list, "a");
        push(&mut list, "b");

        list.clear();

        assert_eq!(list.occupied(), 0);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }
}
