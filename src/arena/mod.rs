//! Canonical match state and its repair operations
//!
//! The `Arena` owns everything the decision engine believes about the
//! current match: bench, board, provisional placements, residual purchase
//! list, and the policy flags that latch during a match. It is passed by
//! reference into every operation - there is no ambient global state.

pub mod bench;
pub mod board;
pub mod champion;
pub mod economy;
pub mod items;
pub mod select;

pub use bench::{Bench, BenchSlot};
pub use champion::Champion;

use crate::catalog::comps::CompCatalog;
use crate::core::types::{Vec2, BENCH_SLOTS};
use crate::ports::ScreenLayout;

/// Reconciled model of the in-progress match
#[derive(Debug, Clone)]
pub struct Arena {
    pub bench: Bench,
    /// Champions deployed on the board
    pub board: Vec<Champion>,
    /// Names currently represented on the board
    pub board_names: Vec<String>,
    /// Provisional placements: (claimed reserved slot, name hint),
    /// oldest first
    pub board_unknown: Vec<(usize, Option<String>)>,
    /// Occupied board footprint
    pub board_size: u32,
    /// Capacity gained beyond level (extra-slot trinket)
    pub extra_capacity: u32,
    pub level: u32,
    /// Board slots reserved for provisional placement, in claim order
    pub unknown_slots: Vec<usize>,
    /// Champion names still wanted for the target composition
    pub champs_to_buy: Vec<String>,
    /// Low-health economy policy; latches on, never resets
    pub spam_roll: bool,
    /// One-shot augment reroll still available this augment round
    pub augment_reroll: bool,
    /// Still watching the item bench for the extra-slot trinket
    pub crown_watch: bool,
    /// Set once the mid-game carousel passes; enables final-comp swaps
    pub final_comp_stage: bool,
}

impl Arena {
    /// Fresh match state derived from the catalog's active composition
    pub fn new(catalog: &CompCatalog) -> Self {
        Self {
            bench: Bench::new(),
            board: Vec::new(),
            board_names: Vec::new(),
            board_unknown: Vec::new(),
            board_size: 0,
            extra_capacity: 0,
            level: 0,
            unknown_slots: catalog.unknown_board_slots(),
            champs_to_buy: catalog.champions_to_buy(),
            spam_roll: false,
            augment_reroll: true,
            crown_watch: true,
            final_comp_stage: false,
        }
    }

    /// Board capacity at the current level
    pub fn capacity(&self) -> u32 {
        self.level + self.extra_capacity
    }

    /// Repair bench drift against a fresh occupancy vector
    pub fn reconcile(&mut self, occupancy: &[bool; BENCH_SLOTS]) {
        self.bench.reconcile(occupancy);
    }

    /// Resolve a confirmed purchase into a known champion
    ///
    /// Fails silently on a catalog miss - buying a champion outside the
    /// target composition is handled by later cleanup, not here.
    pub fn resolve_purchase(
        &mut self,
        name: &str,
        slot: usize,
        catalog: &CompCatalog,
        layout: &ScreenLayout,
    ) {
        let comp = catalog.active_comp();
        let (Some(spec), Some(info)) = (comp.spec(name), catalog.champions.get(name)) else {
            tracing::warn!(name, slot, "purchase outside target composition, leaving slot as-is");
            return;
        };
        self.bench.set(
            slot,
            BenchSlot::Resolved(Champion::new(spec, info, layout.bench[slot])),
        );
    }

    /// First bench champion whose identity is known and whose name is not
    /// yet represented on the board
    pub fn have_champion(&self) -> Option<usize> {
        self.bench.iter().find_map(|(index, slot)| match slot {
            BenchSlot::Resolved(champion) if !self.board_names.contains(&champion.name) => {
                Some(index)
            }
            _ => None,
        })
    }

    /// Labels for the overlay: every tracked unit and its position
    pub fn labels(&self, layout: &ScreenLayout) -> Vec<(String, Vec2)> {
        let mut labels: Vec<(String, Vec2)> = self
            .bench
            .iter()
            .filter_map(|(_, slot)| match slot {
                BenchSlot::Resolved(champion) => {
                    Some((champion.name.clone(), champion.coords))
                }
                _ => None,
            })
            .collect();

        for champion in &self.board {
            labels.push((champion.name.clone(), champion.coords));
        }

        for (slot, hint) in &self.board_unknown {
            let text = hint.clone().unwrap_or_else(|| "?".to_string());
            labels.push((text, layout.board[*slot]));
        }

        labels
    }
}
