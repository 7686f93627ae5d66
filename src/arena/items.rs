//! Item assignment
//!
//! Matches bench items against board champions' build targets, including
//! partial two-component crafting chains. Matching priority per
//! (item, champion) pair: direct completion, then component start, then
//! component finish. One item is consumed per evaluation and a consumed
//! cell is never reconsidered within the same pass.

use crate::arena::{Arena, Champion};
use crate::catalog::items::{ItemCatalog, TACTICIANS_CROWN};
use crate::core::types::{ItemId, ITEM_SLOTS};
use crate::ports::{Actuation, GameIo, Perception};

/// Assign bench items to champions that still need them
pub fn place_items<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &ItemCatalog,
    io: &mut GameIo<'_, P, A>,
) {
    let mut items = io.perception.read_items();
    let present: Vec<&ItemId> = items.iter().flatten().collect();
    tracing::debug!(?present, "items on bench");

    for index in 0..ITEM_SLOTS {
        if items[index].is_some() {
            assign_to_board(arena, catalog, io, &mut items, index);
        }
    }

    // The extra-slot trinket is watched once per match and never given to
    // a champion: it widens the board instead.
    if arena.crown_watch
        && items
            .iter()
            .flatten()
            .any(|item| item == TACTICIANS_CROWN)
    {
        tracing::info!("extra-slot trinket on bench, raising board capacity");
        arena.extra_capacity += 1;
        arena.crown_watch = false;
    }
}

fn assign_to_board<P: Perception, A: Actuation>(
    arena: &mut Arena,
    catalog: &ItemCatalog,
    io: &mut GameIo<'_, P, A>,
    items: &mut [Option<ItemId>; ITEM_SLOTS],
    index: usize,
) {
    for champion in arena.board.iter_mut() {
        if items[index].is_none() {
            return;
        }
        if champion.does_need_items() {
            assign_to_champion(champion, catalog, io, items, index);
        }
    }
}

/// Try one (item, champion) pairing through the three-tier matcher
fn assign_to_champion<P: Perception, A: Actuation>(
    champion: &mut Champion,
    catalog: &ItemCatalog,
    io: &mut GameIo<'_, P, A>,
    items: &mut [Option<ItemId>; ITEM_SLOTS],
    index: usize,
) {
    let Some(item) = items[index].clone() else {
        return;
    };

    if catalog.is_full_item(&item) {
        // Direct completion: the finished item is itself wanted.
        if let Some(position) = champion.build.iter().position(|wanted| *wanted == item) {
            give_item(champion, io, items, index);
            tracing::info!(item = %item, champion = %champion.name, "placed item");
            champion.build.remove(position);
            champion.completed_items.push(item);
        }
    } else if champion.current_building.is_empty() {
        // Component start: open a crafting chain for a build target whose
        // recipe includes this component.
        let Some((build_position, remaining)) =
            champion.build.iter().enumerate().find_map(|(i, target)| {
                catalog
                    .remaining_component(target, &item)
                    .map(|needed| (i, needed))
            })
        else {
            return;
        };
        let target = champion.build.remove(build_position);
        give_item(champion, io, items, index);
        tracing::info!(item = %item, champion = %champion.name, target = %target, "started item");
        champion.current_building.push((target, remaining));
    } else {
        // Component finish: this component completes an open chain.
        let Some(position) = champion
            .current_building
            .iter()
            .position(|(_, needed)| *needed == item)
        else {
            return;
        };
        let (target, _) = champion.current_building.remove(position);
        give_item(champion, io, items, index);
        tracing::info!(item = %item, champion = %champion.name, completed = %target, "completed item");
        champion.completed_items.push(target);
    }
}

fn give_item<P: Perception, A: Actuation>(
    champion: &Champion,
    io: &mut GameIo<'_, P, A>,
    items: &mut [Option<ItemId>; ITEM_SLOTS],
    index: usize,
) {
    io.actuation.click(io.layout.items[index]);
    io.actuation.click(champion.coords);
    items[index] = None;
}
