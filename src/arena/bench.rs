//! Bench slot model and occupancy reconciliation
//!
//! Each of the 9 staging slots is in exactly one of three states. The
//! `Unresolved` state is how ambiguity stays representable instead of
//! blocking progress: something is physically present but its identity is
//! not yet confirmed. The optional payload is a name hint carried by
//! opportunistic purchases.

use crate::arena::champion::Champion;
use crate::core::types::BENCH_SLOTS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BenchSlot {
    #[default]
    Empty,
    Unresolved(Option<String>),
    Resolved(Champion),
}

impl BenchSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, BenchSlot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }
}

/// The 9 bench staging slots
#[derive(Debug, Clone, Default)]
pub struct Bench {
    slots: [BenchSlot; BENCH_SLOTS],
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> &BenchSlot {
        &self.slots[index]
    }

    pub fn set(&mut self, index: usize, slot: BenchSlot) {
        self.slots[index] = slot;
    }

    /// Replace a slot with `Empty`, returning what it held
    pub fn take(&mut self, index: usize) -> BenchSlot {
        std::mem::take(&mut self.slots[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &BenchSlot)> {
        self.slots.iter().enumerate()
    }

    /// Index of the first unresolved occupant, if any
    pub fn first_unresolved(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, BenchSlot::Unresolved(_)))
    }

    pub fn has_unresolved(&self) -> bool {
        self.first_unresolved().is_some()
    }

    /// Repair drift between the model and an observed occupancy vector
    ///
    /// Per slot: expected empty but observed occupied becomes an
    /// unresolved occupant; expected occupied but observed empty becomes
    /// empty. This is the sole mechanism for detecting externally-caused
    /// bench changes, and it is idempotent for an unchanged vector.
    pub fn reconcile(&mut self, occupancy: &[bool; BENCH_SLOTS]) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            match (&*slot, occupancy[index]) {
                (BenchSlot::Empty, true) => {
                    tracing::debug!(slot = index, "occupied slot with no known owner");
                    *slot = BenchSlot::Unresolved(None);
                }
                (BenchSlot::Unresolved(_), false) | (BenchSlot::Resolved(_), false) => {
                    tracing::debug!(slot = index, "tracked slot observed empty");
                    *slot = BenchSlot::Empty;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_marks_surprise_occupant() {
        let mut bench = Bench::new();
        let mut occupancy = [false; BENCH_SLOTS];
        occupancy[2] = true;

        bench.reconcile(&occupancy);
        assert_eq!(*bench.get(2), BenchSlot::Unresolved(None));
        assert!(bench.get(0).is_empty());
    }

    #[test]
    fn test_reconcile_clears_vanished_occupant() {
        let mut bench = Bench::new();
        bench.set(1, BenchSlot::Unresolved(Some("Zed".into())));

        bench.reconcile(&[false; BENCH_SLOTS]);
        assert!(bench.get(1).is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut bench = Bench::new();
        let mut occupancy = [false; BENCH_SLOTS];
        occupancy[0] = true;
        occupancy[5] = true;

        bench.reconcile(&occupancy);
        let snapshot: Vec<BenchSlot> = (0..BENCH_SLOTS).map(|i| bench.get(i).clone()).collect();

        bench.reconcile(&occupancy);
        for (index, before) in snapshot.iter().enumerate() {
            assert_eq!(bench.get(index), before);
        }
    }
}
