//! Board assembly
//!
//! Moves purchased and provisional units from the bench onto the board up
//! to the level-determined capacity, swaps provisional occupants out for
//! resolved champions, enforces final-comp membership, and liquidates the
//! bench when the tracked state has become unrecoverable.

use crate::arena::{Arena, BenchSlot};
use crate::catalog::comps::CompCatalog;
use crate::ports::{Actuation, GameIo, Perception};

/// Deploy a resolved bench champion to its composition slot
///
/// Returns false when the champion has no slot in the active comp (only
/// possible after a comp switch); the unit stays benched for cleanup.
pub fn move_known<P: Perception, A: Actuation>(
    arena: &mut Arena,
    bench_index: usize,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) -> bool {
    let BenchSlot::Resolved(mut champion) = arena.bench.take(bench_index) else {
        return false;
    };
    let Some(spec) = catalog.active_comp().spec(&champion.name) else {
        tracing::warn!(name = %champion.name, "no composition slot for champion, leaving on bench");
        arena.bench.set(bench_index, BenchSlot::Resolved(champion));
        return false;
    };

    tracing::info!(name = %champion.name, slot = spec.board_position, "moving champion to board");
    let destination = io.layout.board[spec.board_position];
    io.actuation.click(champion.coords);
    io.actuation.click(destination);

    champion.coords = destination;
    champion.board_slot = Some(spec.board_position);
    arena.board_size += u32::from(champion.size);
    arena.board_names.push(champion.name.clone());
    arena.board.push(champion);
    true
}

/// Deploy the first unresolved bench occupant to a reserved board slot
///
/// Claims reserved slots in first-available order. Returns false when no
/// unresolved occupant exists or every reserved slot is already claimed.
pub fn move_unknown<P: Perception, A: Actuation>(
    arena: &mut Arena,
    io: &mut GameIo<'_, P, A>,
) -> bool {
    let Some(bench_index) = arena.bench.first_unresolved() else {
        return false;
    };
    let claimed: Vec<usize> = arena.board_unknown.iter().map(|(slot, _)| *slot).collect();
    let Some(&target) = arena
        .unknown_slots
        .iter()
        .find(|slot| !claimed.contains(slot))
    else {
        tracing::warn!("no reserved board slot left for an unresolved unit");
        return false;
    };

    let BenchSlot::Unresolved(hint) = arena.bench.take(bench_index) else {
        return false;
    };
    tracing::info!(
        name = hint.as_deref().unwrap_or("?"),
        slot = target,
        "moving unresolved unit to board"
    );
    io.actuation.click(io.layout.bench[bench_index]);
    io.actuation.click(io.layout.board[target]);

    arena.board_unknown.push((target, hint));
    arena.board_size += 1;
    true
}

/// Sell every bench occupant
///
/// The explicit reset for an unrecoverable bench state.
pub fn sell_bench<P: Perception, A: Actuation>(arena: &mut Arena, io: &mut GameIo<'_, P, A>) {
    for index in 0..io.layout.bench.len() {
        io.actuation.press_sell(io.layout.bench[index]);
        arena.bench.set(index, BenchSlot::Empty);
    }
}

/// Fill the board up to capacity
///
/// Preference order per iteration: a resolved champion not yet on the
/// board, then an unresolved occupant via a reserved slot, then an
/// opportunistic shop purchase converted through the unknown path. When
/// none is possible the bench is liquidated and the loop aborts.
pub fn move_champions<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    match io.perception.read_level() {
        Some(level) => arena.level = level,
        None => tracing::warn!("level unreadable, keeping previous value"),
    }

    while arena.capacity() > arena.board_size {
        let progressed = if let Some(bench_index) = arena.have_champion() {
            move_known(arena, bench_index, catalog, io)
        } else if arena.bench.has_unresolved() {
            move_unknown(arena, io)
        } else {
            buy_filler_unit(arena, catalog, io)
        };

        if !progressed {
            tracing::warn!("need to sell entire bench to keep track of board");
            sell_bench(arena, io);
            return;
        }
    }
}

/// Opportunistic purchase of any affordable 1-cell shop unit
///
/// The unit is not part of the plan: it goes straight onto the board as a
/// provisional occupant just to fill capacity.
fn buy_filler_unit<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) -> bool {
    let shop = io.perception.read_shop(catalog);
    for (shop_index, name) in shop {
        let Some(cost) = catalog.champion_cost(&name) else {
            continue;
        };
        let Some(gold) = io.perception.read_gold() else {
            continue;
        };
        let provisional = arena
            .board_unknown
            .iter()
            .any(|(_, hint)| hint.as_deref() == Some(name.as_str()));
        let valid = cost <= gold
            && catalog.champion_size(&name) == Some(1)
            && !arena.champs_to_buy.contains(&name)
            && !arena.board_names.contains(&name)
            && !provisional;
        if !valid {
            continue;
        }
        let Some(empty_slot) = io.perception.read_empty_slot() else {
            continue;
        };

        tracing::info!(name = %name, "buying filler unit for the board");
        io.actuation.click(io.layout.shop[shop_index]);
        arena.bench.set(empty_slot, BenchSlot::Unresolved(Some(name)));
        move_unknown(arena, io);
        return true;
    }
    false
}

/// Swap the oldest provisional occupant for a known champion
pub fn replace_unknown<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    if arena.board_unknown.is_empty() {
        return;
    }
    let Some(bench_index) = arena.have_champion() else {
        return;
    };

    let (slot, hint) = arena.board_unknown.remove(0);
    tracing::info!(
        name = hint.as_deref().unwrap_or("?"),
        slot,
        "selling provisional occupant"
    );
    io.actuation.press_sell(io.layout.board[slot]);
    arena.board_size -= 1;
    move_known(arena, bench_index, catalog, io);
}

/// Sell a board champion, purging its bench duplicates and residual entry
pub fn remove_champion<P: Perception, A: Actuation>(
    arena: &mut Arena,
    board_index: usize,
    io: &mut GameIo<'_, P, A>,
) {
    let champion = arena.board.remove(board_index);

    for index in 0..io.layout.bench.len() {
        if let BenchSlot::Resolved(benched) = arena.bench.get(index) {
            if benched.name == champion.name {
                io.actuation.press_sell(io.layout.bench[index]);
                arena.bench.set(index, BenchSlot::Empty);
            }
        }
    }

    arena.champs_to_buy.retain(|name| *name != champion.name);
    io.actuation.press_sell(champion.coords);
    arena.board_names.retain(|name| *name != champion.name);
    arena.board_size -= u32::from(champion.size);
}

/// Replace non-final board champions with benched final-comp champions
///
/// First board champion with matching footprint wins; no optimization
/// across candidates.
pub fn final_comp_check<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &CompCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    for bench_index in 0..io.layout.bench.len() {
        let (name, size) = match arena.bench.get(bench_index) {
            BenchSlot::Resolved(champion)
                if champion.final_comp && !arena.board_names.contains(&champion.name) =>
            {
                (champion.name.clone(), champion.size)
            }
            _ => continue,
        };

        let Some(victim_index) = arena
            .board
            .iter()
            .position(|champion| !champion.final_comp && champion.size == size)
        else {
            continue;
        };

        tracing::info!(
            replacing = %arena.board[victim_index].name,
            with = %name,
            "final comp swap"
        );
        remove_champion(arena, victim_index, io);
        move_known(arena, bench_index, catalog, io);
    }
}

/// Sell unresolved occupants and resolved duplicates off the bench
pub fn bench_cleanup<P: Perception, A: Actuation>(arena: &mut Arena, io: &mut GameIo<'_, P, A>) {
    for index in 0..io.layout.bench.len() {
        let sell = match arena.bench.get(index) {
            BenchSlot::Unresolved(_) => true,
            BenchSlot::Resolved(champion) => {
                !arena.champs_to_buy.contains(&champion.name)
                    && arena.board_names.contains(&champion.name)
            }
            BenchSlot::Empty => false,
        };
        if sell {
            tracing::info!(slot = index, "selling leftover bench unit");
            io.actuation.press_sell(io.layout.bench[index]);
            arena.bench.set(index, BenchSlot::Empty);
        }
    }
}
