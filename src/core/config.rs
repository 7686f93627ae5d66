//! Pilot configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other. A config can be loaded from a
//! TOML file; every field has a default matching the stock behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Configuration for the pilot's control loop and economy policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    // === ECONOMY ===
    /// Gold reserve the economy engine will not spend below
    ///
    /// Keeping 50 gold maximizes interest income; the engine rerolls and
    /// buys only while gold stays at or above this floor.
    pub gold_floor: u32,

    /// Lowered gold floor used once spam roll is active
    ///
    /// At low health, interest no longer matters; a floor of 24 permits
    /// near-continuous rerolling while still affording most purchases.
    pub spam_roll_floor: u32,

    /// Health below which the spam-roll policy latches on
    ///
    /// The flag is monotonic: once health dips under this value the
    /// lowered floor applies for the remainder of the match.
    pub spam_roll_health: u32,

    /// Level at which experience purchases stop
    pub max_level: u32,

    /// Minimum gold for the standalone early-round XP purchase
    pub early_xp_gold: u32,

    // === CONTROL LOOP ===
    /// Delay between dispatcher polls, in milliseconds
    ///
    /// Matches the cadence at which round identifier and health are
    /// re-read. Shorter polls gain nothing; the game client's own
    /// animations dominate latency.
    pub poll_interval_ms: u64,

    /// Pause after issuing an input action, in milliseconds
    ///
    /// Respects the client's input/animation latency so a follow-up
    /// reading observes the effect of the action.
    pub action_delay_ms: u64,

    /// Maximum polls while waiting for the opening round to appear
    ///
    /// Bounds the match-start wait; exceeding it is a typed error rather
    /// than an unbounded retry loop.
    pub start_poll_limit: u32,

    /// Polls granted to the defeat-confirmation wait
    ///
    /// After the health reading hits the dead sentinel, the dispatcher
    /// waits up to this many polls for the match-over confirmation before
    /// exiting anyway.
    pub defeat_confirm_polls: u32,

    // === FORFEIT ===
    /// Whether the forfeit deadline is armed at all
    pub forfeit_enabled: bool,

    /// Base match duration before forfeiting, in seconds
    pub forfeit_after_secs: u64,

    /// Upper bound of the random jitter added to the forfeit deadline,
    /// in seconds
    ///
    /// The actual deadline is `forfeit_after_secs` plus a value drawn
    /// uniformly from `[forfeit_jitter_min_secs, forfeit_jitter_secs]`.
    pub forfeit_jitter_secs: u64,

    /// Lower bound of the forfeit jitter, in seconds
    pub forfeit_jitter_min_secs: u64,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            gold_floor: 50,
            spam_roll_floor: 24,
            spam_roll_health: 30,
            max_level: 9,
            early_xp_gold: 4,

            poll_interval_ms: 500,
            action_delay_ms: 200,
            start_poll_limit: 600,
            defeat_confirm_polls: 15,

            forfeit_enabled: false,
            forfeit_after_secs: 1800,
            forfeit_jitter_secs: 150,
            forfeit_jitter_min_secs: 50,
        }
    }
}

impl PilotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file, falling back to defaults for
    /// omitted fields
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: PilotConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        use crate::core::error::PilotError;

        if self.spam_roll_floor > self.gold_floor {
            return Err(PilotError::Config(format!(
                "spam_roll_floor ({}) must be <= gold_floor ({})",
                self.spam_roll_floor, self.gold_floor
            )));
        }

        if self.forfeit_jitter_min_secs > self.forfeit_jitter_secs {
            return Err(PilotError::Config(format!(
                "forfeit_jitter_min_secs ({}) must be <= forfeit_jitter_secs ({})",
                self.forfeit_jitter_min_secs, self.forfeit_jitter_secs
            )));
        }

        if self.start_poll_limit == 0 {
            return Err(PilotError::Config(
                "start_poll_limit must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
