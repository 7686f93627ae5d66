//! The session control loop
//!
//! One thread polls, decides, and acts. Each poll re-reads health and the
//! round identifier, checks the terminal conditions, and - when the
//! identifier changes - runs the round kind's task sequence exactly once.
//! Terminal conditions are checked between iterations only; an in-flight
//! task sequence is never interrupted mid-step.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::arena::{board, economy, items, select, Arena, BenchSlot};
use crate::catalog::comps::CompCatalog;
use crate::catalog::items::ItemCatalog;
use crate::core::config::PilotConfig;
use crate::core::error::{PilotError, Result};
use crate::core::types::{HealthReading, RoundId};
use crate::ports::{Actuation, DisplaySink, GameIo, Perception, ScreenLayout};
use crate::session::rounds::{self, RoundKind, PORTAL_ROUND};
use crate::session::tasks::{task_sequence, RoundTask};

/// How a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Health reached the defeated sentinel
    Defeated,
    /// The match ended without a defeat reading
    Ended,
    /// The forfeit deadline fired
    Forfeited,
}

/// A running match session
pub struct Session<P: Perception, A: Actuation> {
    pub config: PilotConfig,
    pub comp_catalog: CompCatalog,
    pub item_catalog: ItemCatalog,
    pub layout: ScreenLayout,
    pub perception: P,
    pub actuation: A,
    pub display: DisplaySink,
    pub arena: Arena,
    /// Round ids whose task sequence has run, in handling order
    pub handled: Vec<RoundId>,
    last_handled: Option<RoundId>,
}

impl<P: Perception, A: Actuation> Session<P, A> {
    pub fn new(
        config: PilotConfig,
        comp_catalog: CompCatalog,
        item_catalog: ItemCatalog,
        layout: ScreenLayout,
        perception: P,
        actuation: A,
        display: DisplaySink,
    ) -> Self {
        let arena = Arena::new(&comp_catalog);
        Self {
            config,
            comp_catalog,
            item_catalog,
            layout,
            perception,
            actuation,
            display,
            arena,
            handled: Vec::new(),
            last_handled: None,
        }
    }

    /// Drive the match to one of the terminal outcomes
    pub fn run(&mut self) -> Result<Outcome> {
        self.await_match_start()?;

        let started = Instant::now();
        let forfeit_after = self.forfeit_deadline();

        loop {
            match self.perception.read_health() {
                HealthReading::Dead => {
                    tracing::info!("defeat sentinel observed, awaiting confirmation");
                    let outcome = self.confirm_defeat();
                    self.display.clear();
                    return Ok(outcome);
                }
                HealthReading::Ended => {
                    tracing::info!("match ended");
                    self.display.clear();
                    return Ok(Outcome::Ended);
                }
                HealthReading::Alive(_) | HealthReading::Unreadable => {}
            }

            if self.config.forfeit_enabled && started.elapsed() >= forfeit_after {
                tracing::info!("forfeit deadline reached");
                self.actuation.forfeit();
                self.display.clear();
                return Ok(Outcome::Forfeited);
            }

            match self.perception.read_round() {
                Some(round) if self.last_handled != Some(round) => {
                    let kind = rounds::classify(round);
                    tracing::info!(%round, ?kind, "handling round");
                    self.run_round(kind, round);
                    self.last_handled = Some(round);
                    self.handled.push(round);
                }
                Some(_) => {}
                None => tracing::debug!("round identifier unreadable"),
            }

            self.pause();
        }
    }

    /// Wait for the opening round to appear, bounded by the poll limit
    pub fn await_match_start(&mut self) -> Result<()> {
        tracing::info!("waiting for the opening round");
        for _ in 0..self.config.start_poll_limit {
            if self.perception.read_round() == Some(PORTAL_ROUND) {
                return Ok(());
            }
            self.pause();
        }
        Err(PilotError::StartTimeout {
            attempts: self.config.start_poll_limit,
        })
    }

    /// Execute one round kind's task sequence in declared order
    ///
    /// A short pause between tasks respects the client's input latency so
    /// each step observes the effects of the previous one.
    pub fn run_round(&mut self, kind: RoundKind, round: RoundId) {
        for task in task_sequence(kind, round) {
            self.run_task(task, round);
            std::thread::sleep(Duration::from_millis(self.config.action_delay_ms));
        }
    }

    fn run_task(&mut self, task: RoundTask, _round: RoundId) {
        let Self {
            config,
            comp_catalog,
            item_catalog,
            layout,
            perception,
            actuation,
            display,
            arena,
            ..
        } = self;
        let mut io = GameIo {
            perception,
            actuation,
            layout,
        };

        match task {
            RoundTask::CheckHealth => match io.perception.read_health() {
                HealthReading::Alive(health) => {
                    tracing::info!(health, "health check");
                    if health < config.spam_roll_health && !arena.spam_roll {
                        tracing::info!(
                            threshold = config.spam_roll_health,
                            "health below threshold, spam roll activated"
                        );
                        arena.spam_roll = true;
                    }
                }
                HealthReading::Unreadable => tracing::warn!("health check failed"),
                // Terminal sentinels are the outer loop's business.
                HealthReading::Dead | HealthReading::Ended => {}
            },
            RoundTask::ClearDisplay => display.clear(),
            RoundTask::ParkTactician => io.actuation.right_click(io.layout.tactician_home),
            RoundTask::PickPortal => select::pick_portal(comp_catalog, &mut io),
            RoundTask::PickAugment => {
                arena.augment_reroll = true;
                select::pick_augment(arena, comp_catalog, &mut io);
            }
            RoundTask::EarlyXp => economy::buy_xp_round(&mut io, config),
            RoundTask::AwaitFirstBench => {
                let mut found = false;
                for _ in 0..config.start_poll_limit {
                    let occupancy = io.perception.read_bench_occupancy();
                    if let Some(index) = occupancy.iter().position(|occupied| *occupied) {
                        arena.bench.set(index, BenchSlot::Unresolved(None));
                        found = true;
                        break;
                    }
                    std::thread::sleep(Duration::from_millis(config.poll_interval_ms));
                }
                if !found {
                    tracing::warn!("no carousel unit appeared on the bench");
                }
            }
            RoundTask::MoveUnknownToBoard => {
                board::move_unknown(arena, &mut io);
            }
            RoundTask::FixBench => {
                let occupancy = io.perception.read_bench_occupancy();
                arena.reconcile(&occupancy);
            }
            RoundTask::SpendGold => economy::spend_gold(arena, comp_catalog, &mut io, config),
            RoundTask::MoveChampions => board::move_champions(arena, comp_catalog, &mut io),
            RoundTask::ReplaceUnknown => board::replace_unknown(arena, comp_catalog, &mut io),
            RoundTask::FinalCompCheck => {
                if arena.final_comp_stage {
                    board::final_comp_check(arena, comp_catalog, &mut io);
                }
            }
            RoundTask::BenchCleanup => board::bench_cleanup(arena, &mut io),
            RoundTask::PlaceItems => items::place_items(arena, item_catalog, &mut io),
            RoundTask::MarkFinalCompStage => {
                tracing::info!("final comp enforcement begins");
                arena.final_comp_stage = true;
            }
            RoundTask::GrabCarouselUnit => {
                tracing::info!("grabbing a unit from the carousel");
                io.actuation.right_click(io.layout.carousel_pos);
            }
            RoundTask::EmitLabels => display.labels(arena.labels(io.layout)),
            RoundTask::ResetCamera => io.actuation.click(io.layout.default_pos),
        }
    }

    /// Wait out the defeat animation, then leave the match
    ///
    /// Bounded: if the ended sentinel never shows up within the allotted
    /// polls, leave anyway.
    fn confirm_defeat(&mut self) -> Outcome {
        for _ in 0..self.config.defeat_confirm_polls {
            if self.perception.read_health() == HealthReading::Ended {
                break;
            }
            self.pause();
        }
        self.actuation.exit_match();
        Outcome::Defeated
    }

    fn forfeit_deadline(&self) -> Duration {
        let jitter = rand::thread_rng().gen_range(
            self.config.forfeit_jitter_min_secs..=self.config.forfeit_jitter_secs,
        );
        Duration::from_secs(self.config.forfeit_after_secs + jitter)
    }

    fn pause(&self) {
        std::thread::sleep(Duration::from_millis(self.config.poll_interval_ms));
    }
}
