//! Simulation tick
//!
//! One tick advances both agents by the host-supplied elapsed time. Order is
//! a contract: speed ramp, then the player, then the bot. The bot steers
//! toward the player head committed earlier in the same tick, and does not
//! move at all on a tick where the player crashed.

use super::bot::{BotOutcome, step_bot};
use super::direction::Direction;
use super::player::step_player;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Time since the previous tick in milliseconds
    pub elapsed_ms: f32,
    /// Direction request to queue before the player moves
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn elapsed(elapsed_ms: f32) -> Self {
        Self {
            elapsed_ms,
            direction: None,
        }
    }
}

/// Advance the game by one tick; no-op unless the run is in progress
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    let elapsed_ms = if input.elapsed_ms.is_finite() {
        input.elapsed_ms.max(0.0)
    } else {
        log::warn!("Ignoring non-finite frame time {}", input.elapsed_ms);
        0.0
    };
    state.time_ticks += 1;
    state.elapsed_ms += elapsed_ms as f64;

    if state.speed.advance(elapsed_ms) > 0 {
        let speed = state.speed.speed();
        log::info!("Speed increased to {}", speed);
        events.push(GameEvent::SpeedIncreased { speed });
    }

    if let Some(direction) = input.direction {
        state.player.request_direction(direction);
    }

    if let Some(cause) = step_player(state, elapsed_ms) {
        state.phase = GamePhase::Ended;
        let score = state.player.score;
        log::info!("Run ended ({:?}) with score {}", cause, score);
        events.push(GameEvent::PlayerCrashed { cause });
        events.push(GameEvent::RunEnded { score });
        return events;
    }

    match step_bot(state, elapsed_ms) {
        BotOutcome::Moved => {}
        BotOutcome::Reversed => events.push(GameEvent::BotReversed),
        BotOutcome::Respawned { cause, bonus } => {
            events.push(GameEvent::BotRespawned { cause, bonus })
        }
    }

    events
}
