//! Per-round-kind task sequences
//!
//! The "must happen in this order" contract is a first-class value: each
//! round kind maps to an ordered task list the dispatcher executes
//! strictly in sequence. Later tasks depend on state mutated by earlier
//! ones (board assembly must follow bench reconciliation), so no
//! reordering is permitted.

use crate::core::types::RoundId;
use crate::session::rounds::{
    self, RoundKind, FINAL_COMP_ROUND,
};

/// One step of a round's fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTask {
    /// Read health, log it, latch spam roll below the threshold
    CheckHealth,
    /// Drop all overlay labels
    ClearDisplay,
    /// Send the tactician back to its home position
    ParkTactician,
    /// Vote on the portal offer
    PickPortal,
    /// Choose an augment (arms the one-shot reroll first)
    PickAugment,
    /// Standalone early-round XP purchase
    EarlyXp,
    /// Wait for the opening carousel unit to land on the bench
    AwaitFirstBench,
    /// Move an unresolved bench unit to a reserved board slot
    MoveUnknownToBoard,
    /// Reconcile the bench model against observed occupancy
    FixBench,
    /// Run the economy engine
    SpendGold,
    /// Fill the board up to capacity
    MoveChampions,
    /// Swap the oldest provisional occupant for a known champion
    ReplaceUnknown,
    /// Enforce final-comp membership (no-op before the trigger carousel)
    FinalCompCheck,
    /// Sell unresolved occupants and duplicates off the bench
    BenchCleanup,
    /// Assign bench items to board champions
    PlaceItems,
    /// Begin final-comp enforcement for the rest of the match
    MarkFinalCompStage,
    /// Walk into the carousel ring to grab a unit
    GrabCarouselUnit,
    /// Publish overlay labels for every tracked unit
    EmitLabels,
    /// Park the cursor at the neutral position
    ResetCamera,
}

/// The ordered task list for one (kind, round) pair
pub fn task_sequence(kind: RoundKind, round: RoundId) -> Vec<RoundTask> {
    use RoundTask::*;

    match kind {
        RoundKind::Portal => vec![CheckHealth, PickPortal, EmitLabels, ResetCamera],
        RoundKind::Second => vec![
            CheckHealth,
            ClearDisplay,
            AwaitFirstBench,
            MoveUnknownToBoard,
            EmitLabels,
            ResetCamera,
        ],
        RoundKind::Carousel => {
            let mut sequence = vec![CheckHealth, ClearDisplay];
            if round == FINAL_COMP_ROUND {
                sequence.push(MarkFinalCompStage);
            }
            sequence.extend([GrabCarouselUnit, EmitLabels, ResetCamera]);
            sequence
        }
        RoundKind::Pve => {
            let mut sequence = vec![CheckHealth, ClearDisplay, ParkTactician];
            if rounds::is_augment_round(round) {
                sequence.push(PickAugment);
            }
            sequence.extend([
                FixBench,
                SpendGold,
                MoveChampions,
                ReplaceUnknown,
                FinalCompCheck,
                BenchCleanup,
                EmitLabels,
                ResetCamera,
            ]);
            sequence
        }
        RoundKind::Pvp => {
            let mut sequence = vec![CheckHealth, ClearDisplay, ParkTactician];
            if rounds::is_augment_round(round) {
                sequence.push(PickAugment);
            }
            if rounds::is_early_xp_round(round) {
                sequence.push(EarlyXp);
            }
            sequence.extend([
                FixBench,
                BenchCleanup,
                SpendGold,
                MoveChampions,
                ReplaceUnknown,
                FinalCompCheck,
                BenchCleanup,
            ]);
            if rounds::is_item_placement_round(round) {
                sequence.push(PlaceItems);
            }
            sequence.extend([EmitLabels, ResetCamera]);
            sequence
        }
    }
}
