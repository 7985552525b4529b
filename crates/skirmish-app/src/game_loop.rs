//! The real-time game loop.
//!
//! Each frame: wait for the frame boundary, sample input, tick the engine
//! with the measured elapsed time, then draw. There is no fixed-step catch
//! up; a late frame integrates a longer interval.

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

use skirmish_core::events::CombatEvent;
use skirmish_sim::engine::{SimConfig, SimulationEngine};
use skirmish_sim::pacing::FramePacer;
use skirmish_sim::systems::hud;

use crate::config::AppConfig;
use crate::input::{Bindings, InputSource, KeyboardInput};
use crate::terminal::{Display, TerminalScreen};

/// Summary of a session, logged at exit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub frames: u64,
    pub seconds: f64,
    pub average_fps: f64,
    pub matches: u32,
    pub torpedoes_fired: u32,
    pub hulls_destroyed: u32,
    pub rams: u32,
}

impl RunReport {
    fn record(&mut self, events: &[CombatEvent]) {
        for event in events {
            match event {
                CombatEvent::MatchStarted { .. } => self.matches += 1,
                CombatEvent::TorpedoFired { .. } => self.torpedoes_fired += 1,
                CombatEvent::Destroyed { .. } => self.hulls_destroyed += 1,
                CombatEvent::Rammed { .. } => self.rams += 1,
                CombatEvent::TorpedoExpired | CombatEvent::Hit { .. } => {}
            }
        }
    }
}

/// Run on the real terminal until the player quits.
pub fn run(config: &AppConfig) -> anyhow::Result<RunReport> {
    let mut screen =
        TerminalScreen::enter(config.space_theme).context("failed to set up terminal")?;
    let (columns, rows) = screen.field_size();
    let sim_config = config.sim_config(columns, rows);
    info!(seed = sim_config.seed, columns, rows, "terminal ready");

    let mut input = KeyboardInput::new(Bindings::default());
    let mut pacer = FramePacer::new(config.fps);
    drive(sim_config, &mut input, &mut screen, &mut pacer, None)
}

/// The loop proper, over any input source and display. Stops on quit or
/// after `max_frames` frames.
pub fn drive(
    sim_config: SimConfig,
    input: &mut impl InputSource,
    display: &mut impl Display,
    pacer: &mut FramePacer,
    max_frames: Option<u64>,
) -> anyhow::Result<RunReport> {
    let mut report = RunReport {
        seed: sim_config.seed,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(sim_config);
    let (columns, _) = display.field_size();

    loop {
        if max_frames.is_some_and(|max| pacer.frames() >= max) {
            break;
        }
        let dt = pacer.begin_frame();
        let tick_input = input.sample()?;
        if tick_input.quit {
            info!("quit requested");
            break;
        }

        let snapshot = engine.tick(dt, &tick_input);
        report.record(&snapshot.events);
        if !snapshot.events.is_empty() {
            debug!(events = ?snapshot.events, "frame events");
        }

        let centre = format!("{:.1} fps", pacer.average_fps());
        let status = hud::status_line(&snapshot.status, &centre, columns as usize);
        display.present(&snapshot, &status)?;
    }

    let time = engine.time();
    info!(passes = time.tick, sim_secs = time.elapsed_secs, "session over");
    report.frames = pacer.frames();
    report.seconds = pacer.running_secs();
    report.average_fps = pacer.average_fps();
    Ok(report)
}
