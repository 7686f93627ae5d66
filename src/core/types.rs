//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::PilotError;

/// Number of bench staging slots.
pub const BENCH_SLOTS: usize = 9;

/// Number of item slots along the bench edge.
pub const ITEM_SLOTS: usize = 10;

/// Logical screen position (client-window pixel coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Item identifier - a catalog name such as "BfSword" or "Deathblade"
pub type ItemId = String;

/// Round identifier in "stage-round" form, e.g. "3-2"
///
/// Ordered lexicographically by (stage, round) so "2-7" < "3-1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId {
    pub stage: u8,
    pub round: u8,
}

impl RoundId {
    pub const fn new(stage: u8, round: u8) -> Self {
        Self { stage, round }
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage, self.round)
    }
}

impl FromStr for RoundId {
    type Err = PilotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (stage, round) = s
            .split_once('-')
            .ok_or_else(|| PilotError::InvalidRound(s.to_string()))?;
        let stage = stage
            .trim()
            .parse()
            .map_err(|_| PilotError::InvalidRound(s.to_string()))?;
        let round = round
            .trim()
            .parse()
            .map_err(|_| PilotError::InvalidRound(s.to_string()))?;
        Ok(Self { stage, round })
    }
}

/// Best-effort health reading from the perception layer
///
/// `Dead` and `Ended` are the two session-terminal sentinels; `Unreadable`
/// means "no information this tick" and is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthReading {
    Alive(u32),
    Dead,
    Ended,
    Unreadable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_parse_display() {
        let round: RoundId = "3-2".parse().unwrap();
        assert_eq!(round, RoundId::new(3, 2));
        assert_eq!(round.to_string(), "3-2");
    }

    #[test]
    fn test_round_id_parse_rejects_garbage() {
        assert!("".parse::<RoundId>().is_err());
        assert!("3".parse::<RoundId>().is_err());
        assert!("a-b".parse::<RoundId>().is_err());
    }

    #[test]
    fn test_round_id_ordering() {
        // Stage dominates: "2-7" < "3-1"
        assert!(RoundId::new(2, 7) < RoundId::new(3, 1));
        assert!(RoundId::new(3, 1) < RoundId::new(3, 2));
    }
}
