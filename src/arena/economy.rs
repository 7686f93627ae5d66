//! Gold spending
//!
//! Rerolls, levels, and buys toward the target composition while gold
//! stays above the active floor. Nothing here is transactional: a
//! purchase whose slot assignment cannot be confirmed is a sunk cost,
//! corrected only by the next reconciliation pass.

use crate::arena::Arena;
use crate::catalog::comps::CompCatalog;
use crate::core::config::PilotConfig;
use crate::ports::{Actuation, GameIo, Perception};

/// Spend gold down to the policy floor
///
/// The first iteration runs unconditionally; every later iteration first
/// re-checks gold against the floor, buys experience (below max level)
/// and rerolls, then scans the fresh shop for residual-list champions.
pub fn spend_gold<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
    config: &PilotConfig,
) {
    let floor = if arena.spam_roll {
        config.spam_roll_floor
    } else {
        config.gold_floor
    };

    let mut first_run = true;
    loop {
        if !first_run {
            match io.perception.read_gold() {
                Some(gold) if gold >= floor => {}
                Some(_) => break,
                None => {
                    tracing::warn!("gold unreadable, stopping spend loop");
                    break;
                }
            }
            if io
                .perception
                .read_level()
                .is_some_and(|level| level < config.max_level)
            {
                tracing::info!("purchasing XP");
                io.actuation.buy_xp();
            }
            tracing::info!("rerolling shop");
            io.actuation.reroll();
        }

        let shop = io.perception.read_shop(catalog);
        tracing::debug!(?shop, "shop contents");
        for (shop_index, name) in shop {
            if !arena.champs_to_buy.contains(&name) {
                continue;
            }
            let Some(cost) = catalog.champion_cost(&name) else {
                tracing::warn!(name = %name, "wanted champion missing from catalog");
                continue;
            };
            let affordable = io
                .perception
                .read_gold()
                .is_some_and(|gold| gold >= cost);
            if !affordable {
                continue;
            }
            buy_champion(arena, catalog, io, shop_index, &name);
        }
        first_run = false;
    }
}

/// Purchase one shop entry, including the full-bench fallback
fn buy_champion<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
    shop_index: usize,
    name: &str,
) {
    match io.perception.read_empty_slot() {
        Some(slot) => {
            io.actuation.click(io.layout.shop[shop_index]);
            tracing::info!(name = %name, slot, "purchased champion");
            arena.resolve_purchase(name, slot, catalog, io.layout);
            io.actuation.move_cursor(io.layout.default_pos);
            let occupancy = io.perception.read_bench_occupancy();
            arena.reconcile(&occupancy);
            remove_residual(arena, name);
        }
        None => {
            // The client enforces shop-slot exclusivity even with a full
            // bench, so buy anyway and see whether a slot opened up.
            tracing::info!(name = %name, "bench is full but champion is wanted, buying anyway");
            io.actuation.click(io.layout.shop[shop_index]);
            io.actuation.move_cursor(io.layout.default_pos);
            let occupancy = io.perception.read_bench_occupancy();
            arena.reconcile(&occupancy);
            if io.perception.read_empty_slot().is_some() {
                tracing::info!(name = %name, "purchased champion");
                remove_residual(arena, name);
            } else {
                tracing::warn!(name = %name, "purchase not confirmed, accepting sunk cost");
            }
        }
    }
}

fn remove_residual(arena: &mut Arena, name: &str) {
    if let Some(position) = arena.champs_to_buy.iter().position(|wanted| wanted == name) {
        arena.champs_to_buy.remove(position);
    }
}

/// Early-round standalone XP purchase
pub fn buy_xp_round<P: Perception, A: Actuation>(io: &mut GameIo<'_, P, A>, config: &PilotConfig) {
    if io
        .perception
        .read_gold()
        .is_some_and(|gold| gold >= config.early_xp_gold)
    {
        io.actuation.buy_xp();
    }
}
