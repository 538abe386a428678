//! Game state and core simulation types
//!
//! `GameState` owns both agents, the speed ramp and the respawn RNG. Nothing
//! else mutates it; the tick function receives it explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bot;
use super::direction::Direction;
use super::speed::SpeedRamp;
use super::trail::Trail;
use crate::Point;
use crate::settings::Settings;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started, or abandoned by navigating away
    #[default]
    Idle,
    /// Ticks are being applied
    Running,
    /// Player crashed; waiting for a name and a restart
    Ended,
}

/// Why the player's run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    OutOfBounds,
    OwnTrail,
    BotTrail,
}

/// Why the bot was respawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnCause {
    OutOfBounds,
    PlayerTrail,
}

/// Things that happened during a tick (for HUD, audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SpeedIncreased { speed: f32 },
    PlayerCrashed { cause: CrashCause },
    BotRespawned { cause: RespawnCause, bonus: u64 },
    /// Bot hit its own trail and turned around in place
    BotReversed,
    RunEnded { score: u64 },
}

/// Player or bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub head: Point,
    pub trail: Trail,
    /// Direction applied by the current tick
    pub direction: Direction,
    /// Direction the next tick will apply
    pub pending_direction: Direction,
    pub score: u64,
}

impl Agent {
    pub fn new(spawn: Point, max_trail: usize) -> Self {
        Self {
            head: spawn,
            trail: Trail::new(spawn, max_trail),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
        }
    }

    /// Move to `spawn` with a one-point trail, facing right, score zero
    pub fn respawn(&mut self, spawn: Point) {
        self.head = spawn;
        self.trail.reset(spawn);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    pub player: Agent,
    pub bot: Agent,
    pub speed: SpeedRamp,
    /// Simulated run time in milliseconds
    pub elapsed_ms: f64,
    /// Ticks applied in this run
    pub time_ticks: u64,
    /// Seed the respawn RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle game with both agents placed
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let spawn = settings.player_spawn();
        let mut state = Self {
            phase: GamePhase::Idle,
            player: Agent::new(spawn, settings.player_trail_length),
            bot: Agent::new(spawn, settings.bot_trail_length),
            speed: SpeedRamp::new(
                settings.base_speed,
                settings.speed_step,
                settings.speed_interval_ms,
            ),
            elapsed_ms: 0.0,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        };
        state.reset();
        state
    }

    /// Fresh spawns, score 0, base speed. Phase is left to the caller.
    pub fn reset(&mut self) {
        self.speed.reset();
        self.elapsed_ms = 0.0;
        self.time_ticks = 0;
        let spawn = self.settings.player_spawn();
        self.player.respawn(spawn);
        bot::respawn_bot(self);
    }

    /// Reset and begin a run
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        log::info!(
            "Run started: player at ({:.0}, {:.0}), bot at ({:.0}, {:.0})",
            self.player.head.x,
            self.player.head.y,
            self.bot.head.x,
            self.bot.head.y
        );
    }

    /// Leave a running game without ending it (navigation away)
    pub fn abandon(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Idle;
            log::info!("Run abandoned at score {}", self.player.score);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Player's final score, once the run has ended
    pub fn final_score(&self) -> Option<u64> {
        (self.phase == GamePhase::Ended).then_some(self.player.score)
    }

    /// Current speed in units per second
    pub fn speed(&self) -> f32 {
        self.speed.speed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;

    fn seeded(seed: u64) -> GameState {
        GameState::new(Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    #[test]
    fn test_new_state_is_idle_and_spawned() {
        let state = seeded(1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.head, glam::Vec2::new(400.0, 300.0));
        assert_eq!(state.player.trail.len(), 1);
        assert_eq!(state.player.direction, Direction::Right);
        assert_eq!(state.bot.trail.len(), 1);
        assert!(distance(state.bot.head, state.player.head) >= 150.0);
        assert_eq!(state.speed(), 200.0);
    }

    #[test]
    fn test_start_resets_run() {
        let mut state = seeded(2);
        state.player.score = 55;
        state.phase = GamePhase::Ended;
        state.speed.advance(12_000.0);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.speed(), 200.0);
        assert_eq!(state.final_score(), None);
    }

    #[test]
    fn test_abandon_only_from_running() {
        let mut state = seeded(3);
        state.start();
        state.abandon();
        assert_eq!(state.phase, GamePhase::Idle);

        state.phase = GamePhase::Ended;
        state.abandon();
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_same_seed_same_bot_spawn() {
        let a = seeded(99);
        let b = seeded(99);
        assert_eq!(a.bot.head, b.bot.head);
    }
}
