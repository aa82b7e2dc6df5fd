//! Registry of content rendered outside its owner's place in the tree.
//!
//! Owners reserve a slot once, then place or clear content as they re-render. The outlet
//! renders occupied slots in reservation order, so overlays opened later stack on top.

use std::collections::BTreeMap;

/// Handle to a reserved slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u64);

impl SlotId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStack<T> {
    next: u64,
    slots: BTreeMap<SlotId, Option<T>>,
}

impl<T> Default for OverlayStack<T> {
    fn default() -> Self {
        Self { next: 0, slots: BTreeMap::new() }
    }
}

impl<T> OverlayStack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an empty slot. Ids are never reused.
    pub fn reserve(&mut self) -> SlotId {
        let id = SlotId(self.next);
        self.next += 1;
        self.slots.insert(id, None);
        id
    }

    /// Sets the content of a reserved slot, returning the previous content.
    ///
    /// Placing into a released or unknown slot is ignored and hands the content back.
    pub fn place(&mut self, id: SlotId, content: T) -> Result<Option<T>, T> {
        match self.slots.get_mut(&id) {
            Some(slot) => Ok(slot.replace(content)),
            None => Err(content),
        }
    }

    /// Empties a slot but keeps the reservation.
    pub fn clear(&mut self, id: SlotId) -> Option<T> {
        self.slots.get_mut(&id).and_then(Option::take)
    }

    /// Drops the reservation and returns the content it held.
    pub fn release(&mut self, id: SlotId) -> Option<T> {
        self.slots.remove(&id).flatten()
    }

    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(&id).and_then(Option::as_ref)
    }

    /// Occupied slots in reservation order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter().filter_map(|(id, slot)| slot.as_ref().map(|content| (*id, content)))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Option::is_none)
    }
}
