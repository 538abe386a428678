//! Host-driven game loop
//!
//! The host owns cadence: a display callback, a test harness or a fixed-step
//! driver. It asks the loop to schedule a frame, gets back a [`FrameToken`],
//! and later delivers that token with a timestamp. Exactly one token is
//! outstanding at a time. Cancelling clears it, so a callback that fires
//! after cancellation finds a stale token and does nothing.

use crate::render::{RenderFrame, RenderSink};
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GamePhase, GameState, TickInput, tick};

/// Handle for the single scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// What one delivered frame did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    /// Token for the next frame, if the loop is still running
    pub next: Option<FrameToken>,
}

impl FrameReport {
    /// The run finished during this frame
    pub fn ended(&self) -> Option<u64> {
        self.events.iter().find_map(|e| match e {
            GameEvent::RunEnded { score } => Some(*score),
            _ => None,
        })
    }
}

pub struct GameLoop {
    state: GameState,
    running: bool,
    pending: Option<FrameToken>,
    next_token: u64,
    last_timestamp: Option<f64>,
}

impl GameLoop {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings),
            running: false,
            pending: None,
            next_token: 0,
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Reset everything and schedule the first frame
    pub fn start(&mut self) -> FrameToken {
        self.state.start();
        self.running = true;
        self.last_timestamp = None;
        self.schedule()
    }

    /// Stop ticking (e.g. navigating away); any scheduled frame becomes a no-op
    pub fn cancel(&mut self) {
        self.running = false;
        self.pending = None;
        self.last_timestamp = None;
        self.state.abandon();
    }

    /// Input source hook; queued for the next tick
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.running && self.state.player.request_direction(direction)
    }

    /// Deliver a scheduled frame at host time `timestamp_ms`
    ///
    /// The first frame after `start` measures zero elapsed time.
    pub fn on_frame(
        &mut self,
        token: FrameToken,
        timestamp_ms: f64,
        sink: &mut impl RenderSink,
    ) -> FrameReport {
        if !self.running || self.pending != Some(token) {
            log::debug!("Ignoring stale frame {:?}", token);
            return FrameReport::default();
        }
        self.pending = None;

        let last = *self.last_timestamp.get_or_insert(timestamp_ms);
        let elapsed_ms = (timestamp_ms - last).max(0.0) as f32;
        self.last_timestamp = Some(timestamp_ms);

        let events = self.run_tick(elapsed_ms, sink);
        let next = self.running.then(|| self.schedule());
        FrameReport { events, next }
    }

    /// Run one tick with an explicit elapsed time (headless and fixed-step hosts)
    pub fn step(&mut self, elapsed_ms: f32, sink: &mut impl RenderSink) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }
        self.run_tick(elapsed_ms, sink)
    }

    /// Drive ticks of `dt_ms` until the run ends or `max_ticks` pass
    ///
    /// `input` is polled before each tick. Returns the number of ticks run.
    pub fn run_fixed(
        &mut self,
        dt_ms: f32,
        max_ticks: u64,
        mut input: impl FnMut(&GameState) -> Option<Direction>,
        sink: &mut impl RenderSink,
    ) -> u64 {
        let mut ticks = 0;
        while self.running && ticks < max_ticks {
            if let Some(direction) = input(&self.state) {
                self.state.player.request_direction(direction);
            }
            self.run_tick(dt_ms, sink);
            ticks += 1;
        }
        ticks
    }

    fn run_tick(&mut self, elapsed_ms: f32, sink: &mut impl RenderSink) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &TickInput::elapsed(elapsed_ms));
        sink.draw(&RenderFrame::from_state(&self.state));
        if self.state.phase != GamePhase::Running {
            self.running = false;
            self.pending = None;
        }
        events
    }

    fn schedule(&mut self) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending = Some(token);
        token
    }
}
