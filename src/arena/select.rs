//! Portal voting and augment picking
//!
//! Both are priority scans over candidate option texts. When nothing
//! matches, the augment flow gets exactly one reroll before both fall
//! back to the first candidate - an explicit escape valve whose
//! downstream behavior is undefined, not a silent failure.

use crate::arena::Arena;
use crate::catalog::comps::CompCatalog;
use crate::ports::{Actuation, GameIo, Perception};

/// Vote for the highest-priority portal on offer
pub fn pick_portal<P: Perception, A: Actuation>(
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    let options = io.perception.read_portal_options();
    let limit = io.layout.portals.len();

    for wanted in &catalog.portal_priorities {
        if let Some(index) = options
            .iter()
            .take(limit)
            .position(|text| text.contains(wanted.as_str()))
        {
            tracing::info!(portal = %options[index], "voting for portal");
            io.actuation.click(io.layout.portals[index]);
            io.actuation.click(io.layout.portal_votes[index]);
            return;
        }
    }

    tracing::warn!("no priority portal found, choosing the first");
    io.actuation.click(io.layout.portals[0]);
    io.actuation.click(io.layout.portal_votes[0]);
}

/// Pick the highest-priority augment on offer
///
/// One reroll per augment round: if no candidate matches and the reroll
/// is still available, spend it and rescan once.
pub fn pick_augment<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    let priorities = &catalog.active_comp().augment_priorities;
    let limit = io.layout.augments.len();

    for _attempt in 0..2 {
        let options = io.perception.read_augment_options();
        for wanted in priorities {
            if let Some(index) = options
                .iter()
                .take(limit)
                .position(|text| text.contains(wanted.as_str()))
            {
                tracing::info!(augment = %options[index], "choosing augment");
                io.actuation.click(io.layout.augments[index]);
                return;
            }
        }

        if !arena.augment_reroll {
            break;
        }
        tracing::info!("rerolling augments");
        for position in io.layout.augment_rolls {
            io.actuation.click(position);
        }
        arena.augment_reroll = false;
    }

    tracing::warn!("no priority augment found, choosing the first; downstream behavior undefined");
    io.actuation.click(io.layout.augments[0]);
}
