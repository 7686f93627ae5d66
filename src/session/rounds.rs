//! Round identifier classification
//!
//! Every observed round id maps to exactly one round kind; the per-stage
//! cadence (carousel on x-4, monster round on x-7) is fixed by the game.

use crate::core::types::RoundId;

/// The opening portal-vote round
pub const PORTAL_ROUND: RoundId = RoundId::new(1, 1);

/// The special second round following the opening carousel
pub const SECOND_ROUND: RoundId = RoundId::new(1, 2);

/// Carousel after which final-comp enforcement begins
pub const FINAL_COMP_ROUND: RoundId = RoundId::new(3, 4);

/// Rounds offering an augment choice
pub const AUGMENT_ROUNDS: [RoundId; 3] = [
    RoundId::new(2, 1),
    RoundId::new(3, 2),
    RoundId::new(4, 2),
];

/// Early rounds with a standalone XP purchase
pub const EARLY_XP_ROUNDS: [RoundId; 2] = [RoundId::new(2, 1), RoundId::new(2, 5)];

/// Behavioral category of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundKind {
    Portal,
    Second,
    Carousel,
    Pve,
    Pvp,
}

/// Classify a round identifier into its round kind
pub fn classify(round: RoundId) -> RoundKind {
    match (round.stage, round.round) {
        (1, 1) => RoundKind::Portal,
        (1, 2) => RoundKind::Second,
        (1, _) => RoundKind::Pve,
        (_, 4) => RoundKind::Carousel,
        (_, 7) => RoundKind::Pve,
        _ => RoundKind::Pvp,
    }
}

pub fn is_augment_round(round: RoundId) -> bool {
    AUGMENT_ROUNDS.contains(&round)
}

pub fn is_early_xp_round(round: RoundId) -> bool {
    EARLY_XP_ROUNDS.contains(&round)
}

/// Rounds on which bench items get assigned to champions
pub fn is_item_placement_round(round: RoundId) -> bool {
    round.stage >= 2 && matches!(round.round, 2 | 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_one_specials() {
        assert_eq!(classify(RoundId::new(1, 1)), RoundKind::Portal);
        assert_eq!(classify(RoundId::new(1, 2)), RoundKind::Second);
        assert_eq!(classify(RoundId::new(1, 3)), RoundKind::Pve);
        assert_eq!(classify(RoundId::new(1, 4)), RoundKind::Pve);
    }

    #[test]
    fn test_stage_cadence() {
        assert_eq!(classify(RoundId::new(3, 4)), RoundKind::Carousel);
        assert_eq!(classify(RoundId::new(4, 7)), RoundKind::Pve);
        assert_eq!(classify(RoundId::new(5, 2)), RoundKind::Pvp);
        assert_eq!(classify(RoundId::new(2, 1)), RoundKind::Pvp);
    }

    #[test]
    fn test_augment_and_xp_rounds() {
        assert!(is_augment_round(RoundId::new(2, 1)));
        assert!(is_augment_round(RoundId::new(4, 2)));
        assert!(!is_augment_round(RoundId::new(4, 3)));
        assert!(is_early_xp_round(RoundId::new(2, 5)));
        assert!(!is_early_xp_round(RoundId::new(3, 5)));
    }

    #[test]
    fn test_item_placement_cadence() {
        assert!(is_item_placement_round(RoundId::new(2, 2)));
        assert!(is_item_placement_round(RoundId::new(4, 5)));
        assert!(!is_item_placement_round(RoundId::new(1, 2)));
        assert!(!is_item_placement_round(RoundId::new(3, 3)));
    }
}
