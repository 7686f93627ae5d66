//! Arena Pilot - entry point
//!
//! Wires the decision engine to scripted ports: observations come from a
//! recorded frame script (or a small built-in demo) and actions are
//! recorded rather than injected. Embedders wanting to drive a live game
//! client supply their own `Perception`/`Actuation` implementations and
//! call `Session::run` the same way.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arena_pilot::catalog::comps::CompCatalog;
use arena_pilot::catalog::items::ItemCatalog;
use arena_pilot::core::config::PilotConfig;
use arena_pilot::core::error::Result;
use arena_pilot::core::types::RoundId;
use arena_pilot::ports::replay::{Frame, RecordingActuation, ScriptedPerception};
use arena_pilot::ports::{DisplaySink, DisplayUpdate, ScreenLayout};
use arena_pilot::session::Session;

#[derive(Parser, Debug)]
#[command(name = "arena-pilot", about = "Round-driven auto-battler pilot")]
struct Args {
    /// TOML config file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON composition catalog; built-in comps when omitted
    #[arg(long)]
    comps: Option<PathBuf>,

    /// JSON array of recorded observation frames; a built-in demo script
    /// runs when omitted
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Arm the forfeit deadline
    #[arg(long)]
    forfeit: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_pilot=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PilotConfig::load(path)?,
        None => PilotConfig::default(),
    };
    if args.forfeit {
        config.forfeit_enabled = true;
    }

    let comp_catalog = match &args.comps {
        Some(path) => CompCatalog::from_json(path)?,
        None => CompCatalog::with_defaults(),
    };

    let perception = match &args.replay {
        Some(path) => ScriptedPerception::from_json(path)?,
        None => {
            tracing::info!("no replay script given, running the built-in demo");
            ScriptedPerception::from_frames(demo_frames())
        }
    };

    let (display, updates) = DisplaySink::channel();
    let consumer = std::thread::spawn(move || {
        for update in updates {
            match update {
                DisplayUpdate::Labels(labels) => {
                    tracing::debug!(count = labels.len(), "overlay labels updated")
                }
                DisplayUpdate::Clear => tracing::debug!("overlay cleared"),
            }
        }
    });

    let mut session = Session::new(
        config,
        comp_catalog,
        ItemCatalog::with_defaults(),
        ScreenLayout::reference(),
        perception,
        RecordingActuation::new(),
        display,
    );

    let outcome = session.run()?;
    tracing::info!(
        ?outcome,
        rounds = session.handled.len(),
        actions = session.actuation.actions.len(),
        "session complete"
    );

    drop(session);
    let _ = consumer.join();
    Ok(())
}

/// A short scripted opening: portal vote, second round, the first two
/// monster rounds with a purchase, then the match-over sentinel.
fn demo_frames() -> Vec<Frame> {
    let mut occupied = vec![false; 9];
    occupied[0] = true;

    vec![
        Frame {
            round: Some(RoundId::new(1, 1)),
            health: Some(100),
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 1)),
            health: Some(100),
            gold: Some(5),
            portal_options: vec![
                "GlacialArmory".into(),
                "ScuttlePuddle".into(),
                "CrabRave".into(),
            ],
            shop: vec![(0, "Garen".into()), (1, "Vayne".into())],
            bench_occupancy: vec![false; 9],
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 2)),
            health: Some(100),
            bench_occupancy: occupied.clone(),
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 3)),
            health: Some(100),
            gold: Some(5),
            level: Some(2),
            bench_occupancy: vec![false; 9],
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 4)),
            health: Some(96),
            gold: Some(2),
            level: Some(2),
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 4)),
            health: Some(96),
            ..Default::default()
        },
        Frame {
            round: Some(RoundId::new(1, 4)),
            health: Some(96),
            ..Default::default()
        },
        Frame {
            health: Some(-1),
            ..Default::default()
        },
    ]
}
