//! Integration tests for the round dispatcher
//!
//! These tests drive the full control loop through scripted ports:
//! - At-most-once execution per distinct round identifier
//! - The monotonic spam-roll latch and its lowered gold floor
//! - Selection policy fallbacks (portal, bounded augment reroll)
//! - The three terminal outcomes and the bounded match-start wait

use arena_pilot::arena::{select, Arena};
use arena_pilot::catalog::comps::CompCatalog;
use arena_pilot::catalog::items::ItemCatalog;
use arena_pilot::core::config::PilotConfig;
use arena_pilot::core::error::PilotError;
use arena_pilot::core::types::RoundId;
use arena_pilot::ports::replay::{ActionRecord, RecordingActuation, ScriptedPerception};
use arena_pilot::ports::{DisplaySink, DisplayUpdate, GameIo, ScreenLayout};
use arena_pilot::session::{Outcome, Session};

/// Config with no real-time pauses for scripted runs
fn fast_config() -> PilotConfig {
    PilotConfig {
        poll_interval_ms: 0,
        action_delay_ms: 0,
        start_poll_limit: 20,
        ..Default::default()
    }
}

fn session_with(
    config: PilotConfig,
    perception: ScriptedPerception,
) -> Session<ScriptedPerception, RecordingActuation> {
    Session::new(
        config,
        CompCatalog::with_defaults(),
        ItemCatalog::with_defaults(),
        ScreenLayout::reference(),
        perception,
        RecordingActuation::new(),
        DisplaySink::disconnected(),
    )
}

// ============================================================================
// Round Dispatch
// ============================================================================

/// Repeated polls returning the same round identifier run its task
/// sequence exactly once.
#[test]
fn test_round_runs_once_per_identifier() {
    let mut perception = ScriptedPerception::new();
    // Match start consumes the first reading; the loop then handles 1-1,
    // sees 2-2, and keeps reading 2-2 until the end sentinel.
    perception.push_round(RoundId::new(1, 1));
    perception.push_round(RoundId::new(1, 1));
    perception.push_round(RoundId::new(2, 2));
    for health in [100, 100, 100, 100, 100, 100] {
        perception.push_health(health);
    }
    perception.push_health(-1);

    let mut session = session_with(fast_config(), perception);
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Ended);
    assert_eq!(
        session.handled,
        vec![RoundId::new(1, 1), RoundId::new(2, 2)]
    );
    // The camera reset runs once per handled round, no matter how many
    // polls observed the same identifier.
    let layout = ScreenLayout::reference();
    assert_eq!(
        session
            .actuation
            .count(|a| *a == ActionRecord::Click(layout.default_pos)),
        2
    );
}

/// Health dipping under the threshold latches spam roll, lowers the gold
/// floor for the next spend, and never resets on recovery.
#[test]
fn test_spam_roll_latches_and_lowers_floor() {
    let mut perception = ScriptedPerception::new();
    perception.push_round(RoundId::new(1, 1));
    perception.push_round(RoundId::new(1, 1));
    perception.push_round(RoundId::new(2, 2));
    perception.push_round(RoundId::new(2, 3));
    // 40 at the portal round, 25 when 2-2 is handled, back to 50 later.
    for health in [40, 40, 25, 25, 50, 50] {
        perception.push_health(health);
    }
    perception.push_health(-1);
    // With the lowered floor of 24, a 24-gold reading survives one floor
    // check (reroll), then 23 ends the loop. The default floor of 50
    // would never reroll.
    perception.push_gold(24);
    perception.push_gold(23);
    perception.push_gold(23);

    let mut session = session_with(fast_config(), perception);
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Ended);
    assert!(session.arena.spam_roll, "latch must survive the recovery to 50");
    assert!(session.actuation.rerolls() >= 1);
}

// ============================================================================
// Selection Policies
// ============================================================================

/// No catalog match and no reroll available: the first candidate is
/// selected unconditionally.
#[test]
fn test_portal_fallback_selects_first_candidate() {
    let catalog = CompCatalog::with_defaults();
    let layout = ScreenLayout::reference();
    let mut perception = ScriptedPerception::new();
    let mut actuation = RecordingActuation::new();

    perception.push_portal_options(vec![
        "UnknownRegion".into(),
        "AnotherRegion".into(),
        "ThirdRegion".into(),
    ]);

    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    select::pick_portal(&catalog, &mut io);

    assert_eq!(
        actuation.actions,
        vec![
            ActionRecord::Click(layout.portals[0]),
            ActionRecord::Click(layout.portal_votes[0]),
        ]
    );
}

/// A priority portal lower on the list is matched and voted for.
#[test]
fn test_portal_priority_match() {
    let catalog = CompCatalog::with_defaults();
    let layout = ScreenLayout::reference();
    let mut perception = ScriptedPerception::new();
    let mut actuation = RecordingActuation::new();

    perception.push_portal_options(vec![
        "SomethingElse".into(),
        "The ScuttlePuddle".into(),
        "ThirdRegion".into(),
    ]);

    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    select::pick_portal(&catalog, &mut io);

    assert_eq!(
        actuation.actions,
        vec![
            ActionRecord::Click(layout.portals[1]),
            ActionRecord::Click(layout.portal_votes[1]),
        ]
    );
}

/// The augment reroll fires exactly once before the first-candidate
/// fallback.
#[test]
fn test_augment_reroll_is_bounded() {
    let catalog = CompCatalog::with_defaults();
    let layout = ScreenLayout::reference();
    let mut arena = Arena::new(&catalog);
    let mut perception = ScriptedPerception::new();
    let mut actuation = RecordingActuation::new();

    perception.push_augment_options(vec!["NoMatchOne".into(), "NoMatchTwo".into()]);
    perception.push_augment_options(vec!["StillNothing".into(), "NopeAgain".into()]);

    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    select::pick_augment(&mut arena, &catalog, &mut io);

    assert!(!arena.augment_reroll, "the one-shot reroll must be spent");
    // Three reroll clicks, then the first-candidate fallback click.
    let mut expected: Vec<ActionRecord> = layout
        .augment_rolls
        .iter()
        .map(|pos| ActionRecord::Click(*pos))
        .collect();
    expected.push(ActionRecord::Click(layout.augments[0]));
    assert_eq!(actuation.actions, expected);
}

/// A matching augment after the reroll is picked instead of the fallback.
#[test]
fn test_augment_reroll_then_match() {
    let catalog = CompCatalog::with_defaults();
    let layout = ScreenLayout::reference();
    let mut arena = Arena::new(&catalog);
    let mut perception = ScriptedPerception::new();
    let mut actuation = RecordingActuation::new();

    let wanted = catalog.active_comp().augment_priorities[0].clone();
    perception.push_augment_options(vec!["NoMatchOne".into(), "NoMatchTwo".into()]);
    perception.push_augment_options(vec!["NoMatchThree".into(), wanted.clone()]);

    let mut io = GameIo {
        perception: &mut perception,
        actuation: &mut actuation,
        layout: &layout,
    };
    select::pick_augment(&mut arena, &catalog, &mut io);

    assert_eq!(
        actuation.actions.last(),
        Some(&ActionRecord::Click(layout.augments[1]))
    );
}

// ============================================================================
// Terminal Conditions
// ============================================================================

/// The defeat sentinel waits for confirmation, leaves the match, and
/// clears the overlay.
#[test]
fn test_defeat_outcome() {
    let mut perception = ScriptedPerception::new();
    perception.push_round(RoundId::new(1, 1));
    perception.push_health(0);
    perception.push_health(-1);

    let (display, updates) = DisplaySink::channel();
    let mut session = Session::new(
        fast_config(),
        CompCatalog::with_defaults(),
        ItemCatalog::with_defaults(),
        ScreenLayout::reference(),
        perception,
        RecordingActuation::new(),
        display,
    );
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Defeated);
    assert_eq!(
        session
            .actuation
            .count(|a| *a == ActionRecord::ExitMatch),
        1
    );
    let sent: Vec<DisplayUpdate> = updates.try_iter().collect();
    assert!(sent.contains(&DisplayUpdate::Clear));
}

/// The ended sentinel terminates immediately without an exit action.
#[test]
fn test_ended_outcome() {
    let mut perception = ScriptedPerception::new();
    perception.push_round(RoundId::new(1, 1));
    perception.push_health(-1);

    let mut session = session_with(fast_config(), perception);
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Ended);
    assert_eq!(session.actuation.count(|a| *a == ActionRecord::ExitMatch), 0);
}

/// An armed zero-second forfeit deadline surrenders on the first poll.
#[test]
fn test_forfeit_outcome() {
    let mut perception = ScriptedPerception::new();
    perception.push_round(RoundId::new(1, 1));
    perception.push_health(100);

    let config = PilotConfig {
        forfeit_enabled: true,
        forfeit_after_secs: 0,
        forfeit_jitter_secs: 0,
        forfeit_jitter_min_secs: 0,
        ..fast_config()
    };
    let mut session = session_with(config, perception);
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Forfeited);
    assert_eq!(session.actuation.count(|a| *a == ActionRecord::Forfeit), 1);
}

/// The match-start wait is bounded and surfaces a typed error.
#[test]
fn test_match_start_timeout() {
    let perception = ScriptedPerception::new();
    let config = PilotConfig {
        start_poll_limit: 3,
        ..fast_config()
    };
    let mut session = session_with(config, perception);

    match session.run() {
        Err(PilotError::StartTimeout { attempts }) => assert_eq!(attempts, 3),
        other => panic!("expected StartTimeout, got {other:?}"),
    }
}
