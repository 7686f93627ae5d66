//! Scripted port implementations
//!
//! [`ScriptedPerception`] serves canned readings from per-reading queues,
//! [`RecordingActuation`] logs every issued action. Together they let the
//! whole control loop run without a game client: integration tests script
//! exact observation sequences, and the replay binary feeds recorded
//! frames from a JSON file.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::comps::CompCatalog;
use crate::core::error::Result;
use crate::core::types::{HealthReading, ItemId, RoundId, Vec2, BENCH_SLOTS, ITEM_SLOTS};
use crate::ports::{Actuation, Perception};

/// One recorded observation snapshot
///
/// Health uses the wire sentinels: 0 = dead, -1 = match ended, absent =
/// unreadable. Collection fields left empty mean "nothing new observed" -
/// the previous reading keeps repeating - so a recording only carries the
/// fields that actually changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub gold: Option<u32>,
    pub level: Option<u32>,
    pub round: Option<RoundId>,
    pub health: Option<i32>,
    #[serde(default)]
    pub shop: Vec<(usize, String)>,
    #[serde(default)]
    pub bench_occupancy: Vec<bool>,
    #[serde(default)]
    pub items: Vec<Option<ItemId>>,
    #[serde(default)]
    pub portal_options: Vec<String>,
    #[serde(default)]
    pub augment_options: Vec<String>,
}

/// Perception fed from scripted reading queues
///
/// Each reading kind has its own queue; when a queue runs dry the last
/// served value repeats. This keeps scripted runs robust against the
/// engine polling a reading more or fewer times than the script author
/// anticipated.
#[derive(Debug, Default)]
pub struct ScriptedPerception {
    gold: Sticky<Option<u32>>,
    level: Sticky<Option<u32>>,
    round: Sticky<Option<RoundId>>,
    health: Sticky<Option<i32>>,
    shop: Sticky<Vec<(usize, String)>>,
    occupancy: Sticky<[bool; BENCH_SLOTS]>,
    empty_slot: Sticky<Option<usize>>,
    items: Sticky<[Option<ItemId>; ITEM_SLOTS]>,
    portal_options: Sticky<Vec<String>>,
    augment_options: Sticky<Vec<String>>,
}

/// Queue that repeats its last value once drained
#[derive(Debug)]
struct Sticky<T> {
    queue: VecDeque<T>,
    last: T,
}

impl<T: Default> Default for Sticky<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            last: T::default(),
        }
    }
}

impl<T: Clone> Sticky<T> {
    fn push(&mut self, value: T) {
        self.queue.push_back(value);
    }

    fn next(&mut self) -> T {
        if let Some(value) = self.queue.pop_front() {
            self.last = value;
        }
        self.last.clone()
    }
}

impl ScriptedPerception {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a frame sequence recorded as a JSON array
    pub fn from_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let frames: Vec<Frame> = serde_json::from_str(&text)?;
        Ok(Self::from_frames(frames))
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        let mut scripted = Self::new();
        for frame in frames {
            scripted.push_frame(frame);
        }
        scripted
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.gold.push(frame.gold);
        self.level.push(frame.level);
        self.round.push(frame.round);
        self.health.push(frame.health);

        if !frame.shop.is_empty() {
            self.shop.push(frame.shop);
        }
        if !frame.bench_occupancy.is_empty() {
            let mut occupancy = [false; BENCH_SLOTS];
            for (i, flag) in frame.bench_occupancy.iter().take(BENCH_SLOTS).enumerate() {
                occupancy[i] = *flag;
            }
            self.occupancy.push(occupancy);
        }
        if !frame.items.is_empty() {
            let mut items: [Option<ItemId>; ITEM_SLOTS] = Default::default();
            for (i, item) in frame.items.into_iter().take(ITEM_SLOTS).enumerate() {
                items[i] = item;
            }
            self.items.push(items);
        }
        if !frame.portal_options.is_empty() {
            self.portal_options.push(frame.portal_options);
        }
        if !frame.augment_options.is_empty() {
            self.augment_options.push(frame.augment_options);
        }
    }

    // Per-reading push helpers used by tests to script exact sequences.

    pub fn push_gold(&mut self, gold: u32) {
        self.gold.push(Some(gold));
    }

    pub fn push_level(&mut self, level: u32) {
        self.level.push(Some(level));
    }

    pub fn push_round(&mut self, round: RoundId) {
        self.round.push(Some(round));
    }

    pub fn push_health(&mut self, health: i32) {
        self.health.push(Some(health));
    }

    pub fn push_shop(&mut self, shop: Vec<(usize, String)>) {
        self.shop.push(shop);
    }

    pub fn push_occupancy(&mut self, occupancy: [bool; BENCH_SLOTS]) {
        self.occupancy.push(occupancy);
    }

    /// Override the derived empty-slot reading for upcoming polls
    pub fn push_empty_slot(&mut self, slot: Option<usize>) {
        self.empty_slot.push(slot);
    }

    pub fn push_items(&mut self, items: [Option<ItemId>; ITEM_SLOTS]) {
        self.items.push(items);
    }

    pub fn push_portal_options(&mut self, options: Vec<String>) {
        self.portal_options.push(options);
    }

    pub fn push_augment_options(&mut self, options: Vec<String>) {
        self.augment_options.push(options);
    }
}

impl Perception for ScriptedPerception {
    fn read_gold(&mut self) -> Option<u32> {
        self.gold.next()
    }

    fn read_level(&mut self) -> Option<u32> {
        self.level.next()
    }

    fn read_round(&mut self) -> Option<RoundId> {
        self.round.next()
    }

    fn read_health(&mut self) -> HealthReading {
        match self.health.next() {
            Some(0) => HealthReading::Dead,
            Some(h) if h < 0 => HealthReading::Ended,
            Some(h) => HealthReading::Alive(h as u32),
            None => HealthReading::Unreadable,
        }
    }

    fn read_shop(&mut self, _catalog: &CompCatalog) -> Vec<(usize, String)> {
        self.shop.next()
    }

    fn read_bench_occupancy(&mut self) -> [bool; BENCH_SLOTS] {
        self.occupancy.next()
    }

    fn read_empty_slot(&mut self) -> Option<usize> {
        // Scripted overrides win; otherwise derive from the occupancy
        // reading most recently served.
        if !self.empty_slot.queue.is_empty() {
            return self.empty_slot.next();
        }
        self.occupancy.last.iter().position(|occupied| !occupied)
    }

    fn read_items(&mut self) -> [Option<ItemId>; ITEM_SLOTS] {
        self.items.next()
    }

    fn read_portal_options(&mut self) -> Vec<String> {
        self.portal_options.next()
    }

    fn read_augment_options(&mut self) -> Vec<String> {
        self.augment_options.next()
    }
}

/// Every action kind an [`Actuation`] implementation can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRecord {
    Click(Vec2),
    RightClick(Vec2),
    MoveCursor(Vec2),
    Sell(Vec2),
    Reroll,
    BuyXp,
    ExitMatch,
    Forfeit,
}

/// Actuation that records instead of acting
#[derive(Debug, Default)]
pub struct RecordingActuation {
    pub actions: Vec<ActionRecord>,
}

impl RecordingActuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, matches: impl Fn(&ActionRecord) -> bool) -> usize {
        self.actions.iter().filter(|action| matches(action)).count()
    }

    pub fn rerolls(&self) -> usize {
        self.count(|action| *action == ActionRecord::Reroll)
    }

    pub fn sells(&self) -> usize {
        self.count(|action| matches!(action, ActionRecord::Sell(_)))
    }
}

impl Actuation for RecordingActuation {
    fn click(&mut self, pos: Vec2) {
        self.actions.push(ActionRecord::Click(pos));
    }

    fn right_click(&mut self, pos: Vec2) {
        self.actions.push(ActionRecord::RightClick(pos));
    }

    fn move_cursor(&mut self, pos: Vec2) {
        self.actions.push(ActionRecord::MoveCursor(pos));
    }

    fn press_sell(&mut self, pos: Vec2) {
        self.actions.push(ActionRecord::Sell(pos));
    }

    fn reroll(&mut self) {
        self.actions.push(ActionRecord::Reroll);
    }

    fn buy_xp(&mut self) {
        self.actions.push(ActionRecord::BuyXp);
    }

    fn exit_match(&mut self) {
        self.actions.push(ActionRecord::ExitMatch);
    }

    fn forfeit(&mut self) {
        self.actions.push(ActionRecord::Forfeit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_reading_repeats_last_value() {
        let mut perception = ScriptedPerception::new();
        perception.push_gold(50);
        perception.push_gold(30);
        assert_eq!(perception.read_gold(), Some(50));
        assert_eq!(perception.read_gold(), Some(30));
        assert_eq!(perception.read_gold(), Some(30));
    }

    #[test]
    fn test_health_sentinels() {
        let mut perception = ScriptedPerception::new();
        perception.push_health(42);
        perception.push_health(0);
        perception.push_health(-1);
        assert_eq!(perception.read_health(), HealthReading::Alive(42));
        assert_eq!(perception.read_health(), HealthReading::Dead);
        assert_eq!(perception.read_health(), HealthReading::Ended);
    }

    #[test]
    fn test_empty_slot_follows_occupancy() {
        let mut perception = ScriptedPerception::new();
        let mut occupancy = [true; BENCH_SLOTS];
        occupancy[4] = false;
        perception.push_occupancy(occupancy);
        perception.read_bench_occupancy();
        assert_eq!(perception.read_empty_slot(), Some(4));
    }
}
