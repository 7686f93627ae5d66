//! Owned champion state
//!
//! A `Champion` exists only after a purchase has been resolved against the
//! active composition's metadata; until then the slot holding it is an
//! unresolved occupant.

use crate::catalog::comps::{ChampionInfo, ChampionSpec};
use crate::core::types::{ItemId, Vec2};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub name: String,
    /// Current click target (bench or board position)
    pub coords: Vec2,
    /// Board slot index once deployed
    pub board_slot: Option<usize>,
    /// Board footprint in cells
    pub size: u8,
    /// Completed items still wanted, in build order
    pub build: Vec<ItemId>,
    /// In-progress crafts: (target item, component still needed)
    pub current_building: Vec<(ItemId, ItemId)>,
    pub completed_items: Vec<ItemId>,
    /// Required member of the finished composition
    pub final_comp: bool,
}

impl Champion {
    pub fn new(spec: &ChampionSpec, info: &ChampionInfo, coords: Vec2) -> Self {
        Self {
            name: spec.name.clone(),
            coords,
            board_slot: None,
            size: info.board_size,
            build: spec.items.clone(),
            current_building: Vec::new(),
            completed_items: Vec::new(),
            final_comp: spec.final_comp,
        }
    }

    /// True while the champion can still accept items
    pub fn does_need_items(&self) -> bool {
        !self.build.is_empty() || !self.current_building.is_empty()
    }
}
