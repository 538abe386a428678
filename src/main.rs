//! Lightcycle entry point
//!
//! Runs a headless demo: the player follows a scripted
//! square-ish patrol at 60 Hz until it crashes, then the run is submitted to
//! an in-memory score sink.

use lightcycle::GameLoop;
use lightcycle::Settings;
use lightcycle::highscores::{MemoryScoreSink, RunResult, SubmissionGate};
use lightcycle::render::{RenderFrame, RenderSink};
use lightcycle::sim::{Direction, GameState};

/// Tracks the longest trail drawn for each agent
#[derive(Default)]
struct TrailStats {
    frames: u64,
    longest: [usize; 2],
}

impl RenderSink for TrailStats {
    fn draw(&mut self, frame: &RenderFrame<'_>) {
        self.frames += 1;
        for (longest, stroke) in self.longest.iter_mut().zip(frame.strokes()) {
            *longest = (*longest).max(stroke.points.len());
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Lightcycle (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut game = GameLoop::new(settings);
    game.start();

    // Turn clockwise whenever the head gets within 80 units of a wall
    let patrol = |state: &GameState| -> Option<Direction> {
        let head = state.player.head;
        let (w, h) = (state.settings.arena_width, state.settings.arena_height);
        let margin = 80.0;
        match state.player.direction {
            Direction::Right if head.x > w - margin => Some(Direction::Down),
            Direction::Down if head.y > h - margin => Some(Direction::Left),
            Direction::Left if head.x < margin => Some(Direction::Up),
            Direction::Up if head.y < margin => Some(Direction::Right),
            _ => None,
        }
    };

    let mut stats = TrailStats::default();
    let ticks = game.run_fixed(1000.0 / 60.0, 60 * 120, patrol, &mut stats);
    let state = game.state();
    println!(
        "Run over after {} ticks ({:.1}s): score {}, final speed {}",
        ticks,
        state.elapsed_ms / 1000.0,
        state.player.score,
        state.speed()
    );
    log::info!(
        "Drew {} frames, longest trails: player {} / bot {}",
        stats.frames,
        stats.longest[0],
        stats.longest[1]
    );

    let record = match RunResult::from_state(state, "demo") {
        Ok(record) => record,
        Err(e) => {
            log::warn!("No result to submit: {}", e);
            return;
        }
    };

    let mut sink = MemoryScoreSink::new();
    let mut gate = SubmissionGate::new();
    match gate.submit(&mut sink, &record) {
        Ok(()) => println!("Saved {}", record.to_json().unwrap_or_default()),
        Err(e) => log::error!("Submission failed: {}", e),
    }
}
