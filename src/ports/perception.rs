//! Read-side port: best-effort observations of the game client
//!
//! Every reading is a snapshot that may already be stale by the time the
//! caller acts on it, and any reading can fail. `None` (or
//! [`HealthReading::Unreadable`]) means "no information this tick" and is
//! never treated as fatal by the core.

use crate::catalog::comps::CompCatalog;
use crate::core::types::{HealthReading, ItemId, RoundId, BENCH_SLOTS, ITEM_SLOTS};

/// Observation surface of the game client
///
/// Implementations wrap whatever recognition layer is available (text
/// recognition against a live window, or a recorded script in tests).
pub trait Perception {
    /// Current gold amount
    fn read_gold(&mut self) -> Option<u32>;

    /// Current tactician level
    fn read_level(&mut self) -> Option<u32>;

    /// Current round identifier
    fn read_round(&mut self) -> Option<RoundId>;

    /// Current health, including the two session-terminal sentinels
    fn read_health(&mut self) -> HealthReading;

    /// Shop contents as (slot index, champion name) pairs
    ///
    /// The catalog is consulted to repair near-miss name readings; entries
    /// that cannot be matched to any catalog name are still returned
    /// verbatim so the caller can log and skip them.
    fn read_shop(&mut self, catalog: &CompCatalog) -> Vec<(usize, String)>;

    /// One occupancy flag per bench slot
    fn read_bench_occupancy(&mut self) -> [bool; BENCH_SLOTS];

    /// Index of the first empty bench slot, if any
    fn read_empty_slot(&mut self) -> Option<usize>;

    /// Item bench contents; `None` per empty slot
    fn read_items(&mut self) -> [Option<ItemId>; ITEM_SLOTS];

    /// Candidate portal option texts, in on-screen order
    fn read_portal_options(&mut self) -> Vec<String>;

    /// Candidate augment option texts, in on-screen order
    fn read_augment_options(&mut self) -> Vec<String>;
}
