//! Integration tests for the item assignment engine
//!
//! These tests verify the three-tier matcher:
//! - Direct completion of a wanted full item
//! - The two-pass component crafting chain (start, then finish)
//! - Idempotence once an item has been consumed
//! - The extra-slot trinket capacity bump

use arena_pilot::arena::{board, items, Arena};
use arena_pilot::catalog::comps::CompCatalog;
use arena_pilot::catalog::items::{ItemCatalog, TACTICIANS_CROWN};
use arena_pilot::core::types::{ItemId, ITEM_SLOTS};
use arena_pilot::ports::replay::{RecordingActuation, ScriptedPerception};
use arena_pilot::ports::{GameIo, ScreenLayout};

fn item_row(present: &[(usize, &str)]) -> [Option<ItemId>; ITEM_SLOTS] {
    let mut row: [Option<ItemId>; ITEM_SLOTS] = Default::default();
    for (index, name) in present {
        row[*index] = Some((*name).to_string());
    }
    row
}

/// Board with one Ahri (build: GuinsoosRageblade) deployed
fn board_with_ahri() -> (
    CompCatalog,
    ScreenLayout,
    Arena,
    ScriptedPerception,
    RecordingActuation,
) {
    let catalog = CompCatalog::with_defaults();
    let layout = ScreenLayout::reference();
    let mut arena = Arena::new(&catalog);
    let mut perception = ScriptedPerception::new();
    let mut actuation = RecordingActuation::new();

    arena.resolve_purchase("Ahri", 0, &catalog, &layout);
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    board::move_known(&mut arena, 0, &catalog, &mut io);
    actuation.actions.clear();

    (catalog, layout, arena, perception, actuation)
}

/// Component start then component finish across two passes completes the
/// build target and clears both bench cells.
#[test]
fn test_component_chain_across_two_passes() {
    let (_catalog, layout, mut arena, mut perception, mut actuation) = board_with_ahri();
    let item_catalog = ItemCatalog::with_defaults();

    // Pass 1: a RecurveBow opens the Rageblade chain.
    perception.push_items(item_row(&[(0, "RecurveBow")]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    {
        let ahri = &arena.board[0];
        assert!(ahri.build.is_empty());
        assert_eq!(
            ahri.current_building,
            vec![(
                "GuinsoosRageblade".to_string(),
                "NeedlesslyLargeRod".to_string()
            )]
        );
        assert!(ahri.completed_items.is_empty());
    }

    // Pass 2: the rod matches the remaining component and finishes it.
    perception.push_items(item_row(&[(1, "NeedlesslyLargeRod")]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    let ahri = &arena.board[0];
    assert!(ahri.current_building.is_empty());
    assert_eq!(ahri.completed_items, vec!["GuinsoosRageblade".to_string()]);
    assert!(!ahri.does_need_items());
}

/// A full item sitting in the build list is placed directly.
#[test]
fn test_direct_completion() {
    let (_catalog, layout, mut arena, mut perception, mut actuation) = board_with_ahri();
    let item_catalog = ItemCatalog::with_defaults();

    perception.push_items(item_row(&[(4, "GuinsoosRageblade")]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    let ahri = &arena.board[0];
    assert!(ahri.build.is_empty());
    assert_eq!(ahri.completed_items, vec!["GuinsoosRageblade".to_string()]);
    // Item click plus champion click.
    assert_eq!(actuation.actions.len(), 2);
}

/// Re-invocation with the post-consumption snapshot performs no action.
#[test]
fn test_place_items_idempotent_after_consumption() {
    let (_catalog, layout, mut arena, mut perception, mut actuation) = board_with_ahri();
    let item_catalog = ItemCatalog::with_defaults();

    perception.push_items(item_row(&[(4, "GuinsoosRageblade")]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);
    let actions_after_first = actuation.actions.len();

    // The consumed cell reads empty on the next poll.
    perception.push_items(item_row(&[]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    assert_eq!(actuation.actions.len(), actions_after_first);
    assert_eq!(
        arena.board[0].completed_items,
        vec!["GuinsoosRageblade".to_string()]
    );
}

/// An item no champion wants stays on the bench.
#[test]
fn test_unwanted_item_is_left_alone() {
    let (_catalog, layout, mut arena, mut perception, mut actuation) = board_with_ahri();
    let item_catalog = ItemCatalog::with_defaults();

    perception.push_items(item_row(&[(0, "WarmogsArmor")]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    assert!(actuation.actions.is_empty());
    assert_eq!(arena.board[0].build, vec!["GuinsoosRageblade".to_string()]);
}

/// The extra-slot trinket raises capacity once and only once.
#[test]
fn test_crown_raises_capacity_once() {
    let (_catalog, layout, mut arena, mut perception, mut actuation) = board_with_ahri();
    let item_catalog = ItemCatalog::with_defaults();
    assert!(arena.crown_watch);

    perception.push_items(item_row(&[(9, TACTICIANS_CROWN)]));
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);

    assert_eq!(arena.extra_capacity, 1);
    assert!(!arena.crown_watch);

    // The crown is still on the bench next pass; capacity must not climb.
    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    items::place_items(&mut arena, &item_catalog, &mut io);
    assert_eq!(arena.extra_capacity, 1);
}
