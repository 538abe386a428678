//! Player controller and per-tick player update

use super::collision::{collides_with_other, collides_with_self};
use super::direction::Direction;
use super::motion::{advance, is_out_of_bounds};
use super::state::{Agent, CrashCause, GameState};
use super::trail::TrailAppend;

impl Agent {
    /// Queue a direction for the next tick
    ///
    /// A request that reverses the current direction is dropped. Later
    /// requests replace earlier unconsumed ones. Returns whether it was queued.
    pub fn request_direction(&mut self, input: Direction) -> bool {
        if input.is_reverse_of(self.direction) {
            return false;
        }
        if self.pending_direction != input {
            log::debug!("Direction queued: {:?}", input);
        }
        self.pending_direction = input;
        true
    }

    /// Apply the queued direction; returns the direction for this tick
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }
}

/// Advance the player one tick
///
/// Returns the crash cause if the run is over; in that case the player's
/// head, trail and score are left as they were before the tick.
pub fn step_player(state: &mut GameState, elapsed_ms: f32) -> Option<CrashCause> {
    let settings = &state.settings;
    let threshold = settings.collision_threshold();
    let speed = state.speed.speed();

    let direction = state.player.commit_direction();
    let candidate = advance(state.player.head, direction, elapsed_ms, speed);

    if is_out_of_bounds(candidate, settings.arena_width, settings.arena_height) {
        return Some(CrashCause::OutOfBounds);
    }

    if collides_with_self(
        candidate,
        state.player.trail.collision_points(),
        settings.self_collision_ignore,
        threshold,
    ) {
        return Some(CrashCause::OwnTrail);
    }

    if collides_with_other(candidate, state.bot.trail.collision_points(), threshold) {
        return Some(CrashCause::BotTrail);
    }

    state.player.head = candidate;
    if state.player.trail.append(candidate, settings.min_trail_dist) == TrailAppend::Pushed {
        state.player.score = state.player.score.saturating_add(1);
    }
    None
}
