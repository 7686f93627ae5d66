//! Logical screen layout consulted when issuing actions
//!
//! Positions are client-window pixel coordinates for the reference
//! 1920x1080 client. Discovering the actual window geometry (and scaling
//! these tables to it) is the embedder's job; the core only reads them.

use crate::core::types::{Vec2, BENCH_SLOTS, ITEM_SLOTS};

/// Number of board hex slots (4 rows of 7)
pub const BOARD_SLOTS: usize = 28;

/// Number of shop cards
pub const SHOP_SLOTS: usize = 5;

/// Click/hover targets for every actionable region
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    /// Bench slot centers, left to right
    pub bench: [Vec2; BENCH_SLOTS],
    /// Board hex centers, row-major from the back row
    pub board: [Vec2; BOARD_SLOTS],
    /// Shop card purchase targets
    pub shop: [Vec2; SHOP_SLOTS],
    /// Item bench slot centers
    pub items: [Vec2; ITEM_SLOTS],
    /// Portal option rows and their vote buttons
    pub portals: [Vec2; 3],
    pub portal_votes: [Vec2; 3],
    /// Augment cards and their reroll buttons
    pub augments: [Vec2; 3],
    pub augment_rolls: [Vec2; 3],
    /// Neutral cursor parking spot
    pub default_pos: Vec2,
    /// Home position the tactician is sent back to each round
    pub tactician_home: Vec2,
    /// Center of the shared-draft carousel ring
    pub carousel_pos: Vec2,
}

impl ScreenLayout {
    /// Layout for the reference 1920x1080 client
    pub fn reference() -> Self {
        let mut bench = [Vec2::default(); BENCH_SLOTS];
        for (i, slot) in bench.iter_mut().enumerate() {
            *slot = Vec2::new(425 + i as i32 * 120, 777);
        }

        // Board rows are offset half a hex on alternating rows.
        let mut board = [Vec2::default(); BOARD_SLOTS];
        for row in 0..4 {
            let x0 = if row % 2 == 0 { 466 } else { 533 };
            for col in 0..7 {
                board[row * 7 + col] = Vec2::new(x0 + col as i32 * 134, 373 + row as i32 * 100);
            }
        }

        let mut shop = [Vec2::default(); SHOP_SLOTS];
        for (i, slot) in shop.iter_mut().enumerate() {
            *slot = Vec2::new(575 + i as i32 * 202, 1010);
        }

        let mut items = [Vec2::default(); ITEM_SLOTS];
        for (i, slot) in items.iter_mut().enumerate() {
            // Two stacked columns climbing the left edge
            let col = i as i32 % 2;
            let row = i as i32 / 2;
            *slot = Vec2::new(288 + col * 42, 920 - row * 42);
        }

        Self {
            bench,
            board,
            shop,
            items,
            portals: [
                Vec2::new(960, 340),
                Vec2::new(960, 420),
                Vec2::new(960, 500),
            ],
            portal_votes: [
                Vec2::new(1270, 340),
                Vec2::new(1270, 420),
                Vec2::new(1270, 500),
            ],
            augments: [
                Vec2::new(610, 540),
                Vec2::new(960, 540),
                Vec2::new(1310, 540),
            ],
            augment_rolls: [
                Vec2::new(610, 825),
                Vec2::new(960, 825),
                Vec2::new(1310, 825),
            ],
            default_pos: Vec2::new(60, 222),
            tactician_home: Vec2::new(1625, 300),
            carousel_pos: Vec2::new(960, 460),
        }
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::reference()
    }
}
