use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Logical state of one generated target, rendering lives behind [`Presenter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    order_index: SlotIndex,
    pub revealed: bool,
    pub enabled: bool,
}

impl Slot {
    const fn new(order_index: SlotIndex) -> Self {
        Self {
            order_index,
            revealed: false,
            enabled: false,
        }
    }

    pub const fn order_index(&self) -> SlotIndex {
        self.order_index
    }

    /// The 1-based number shown to the player.
    pub const fn label(&self) -> u32 {
        self.order_index as u32 + 1
    }
}

/// Ordered slots of the current game plus how many have been resolved in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStore {
    slots: Vec<Slot>,
    cursor: SlotIndex,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, n: SlotCount) {
        self.slots = (0..n).map(Slot::new).collect();
        self.cursor = 0;
    }

    pub fn advance(&mut self) -> Result<()> {
        if self.is_complete() {
            return Err(GameError::SequenceComplete);
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        usize::from(self.cursor) == self.slots.len()
    }

    pub fn cursor(&self) -> SlotIndex {
        self.cursor
    }

    /// Order index of the only slot that may be clicked next.
    pub fn expected(&self) -> Option<SlotIndex> {
        (!self.is_complete()).then_some(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: SlotIndex) -> Option<&Slot> {
        self.slots.get(usize::from(index))
    }

    pub fn reveal(&mut self, index: SlotIndex) {
        if let Some(slot) = self.slots.get_mut(usize::from(index)) {
            slot.revealed = true;
        }
    }

    pub fn reveal_all(&mut self) {
        self.slots.iter_mut().for_each(|slot| slot.revealed = true);
    }

    pub fn set_enabled_all(&mut self, enabled: bool) {
        self.slots.iter_mut().for_each(|slot| slot.enabled = enabled);
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.revealed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_creates_ordered_hidden_disabled_slots() {
        let mut store = SequenceStore::new();
        store.reset(4);

        assert_eq!(store.len(), 4);
        assert_eq!(store.cursor(), 0);
        for (i, slot) in store.slots().iter().enumerate() {
            assert_eq!(usize::from(slot.order_index()), i);
            assert_eq!(slot.label() as usize, i + 1);
            assert!(!slot.revealed);
            assert!(!slot.enabled);
        }
    }

    #[test]
    fn advance_stops_at_the_end() {
        let mut store = SequenceStore::new();
        store.reset(2);

        assert_eq!(store.expected(), Some(0));
        store.advance().unwrap();
        assert!(!store.is_complete());
        store.advance().unwrap();
        assert!(store.is_complete());
        assert_eq!(store.expected(), None);

        assert_eq!(store.advance(), Err(GameError::SequenceComplete));
        assert_eq!(store.cursor(), 2);
    }

    #[test]
    fn reset_discards_previous_progress() {
        let mut store = SequenceStore::new();
        store.reset(3);
        store.advance().unwrap();
        store.reveal(0);
        store.set_enabled_all(true);

        store.reset(5);

        assert_eq!(store.cursor(), 0);
        assert_eq!(store.len(), 5);
        assert_eq!(store.revealed_count(), 0);
        assert!(store.slots().iter().all(|slot| !slot.enabled));
    }

    #[test]
    fn reveal_out_of_bounds_is_a_no_op() {
        let mut store = SequenceStore::new();
        store.reset(1);

        store.reveal(7);
        assert_eq!(store.revealed_count(), 0);

        store.reveal_all();
        assert_eq!(store.revealed_count(), 1);
        assert!(store.slot(0).unwrap().revealed);
        assert!(store.slot(1).is_none());
    }
}
