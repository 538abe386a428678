//! Bot controller: greedy chase, escape on self-hit, respawn
//!
//! The bot re-decides every tick with no plan. It steers along whichever axis
//! has the larger gap to the player head and commits the turn immediately
//! (no pending-direction delay like the player has).

use glam::Vec2;
use rand::Rng;

use super::collision::{collides_with_other, collides_with_self};
use super::direction::Direction;
use super::motion::{advance, is_out_of_bounds};
use super::state::{GameState, RespawnCause};
use super::trail::TrailAppend;
use crate::{Point, distance};

/// Result of one bot update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotOutcome {
    /// Head committed and trail extended
    Moved,
    /// Hit its own trail: turned around without moving
    Reversed,
    /// Respawned; the player earned `bonus`
    Respawned { cause: RespawnCause, bonus: u64 },
}

/// Pick the cardinal direction toward `target`, refusing a reversal
pub fn chase_direction(head: Point, current: Direction, target: Point) -> Direction {
    let dx = target.x - head.x;
    let dy = target.y - head.y;

    let proposal = if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };

    if proposal.is_reverse_of(current) {
        current
    } else {
        proposal
    }
}

/// A spawn point is valid when it keeps `min_dist` from the player head
#[inline]
pub fn is_valid_spawn(candidate: Point, player_head: Point, min_dist: f32) -> bool {
    distance(candidate, player_head) >= min_dist
}

/// Rejection-sample a spawn point from `draw`, giving up after `max_attempts`
pub fn find_spawn(
    mut draw: impl FnMut() -> Point,
    player_head: Point,
    min_dist: f32,
    max_attempts: u32,
) -> Option<Point> {
    (0..max_attempts)
        .map(|_| draw())
        .find(|candidate| is_valid_spawn(*candidate, player_head, min_dist))
}

/// Corner of the spawn region farthest from the player head
pub fn fallback_spawn(player_head: Point, width: f32, height: f32, margin: f32) -> Point {
    let corners = [
        Vec2::new(margin, margin),
        Vec2::new(width - margin, margin),
        Vec2::new(margin, height - margin),
        Vec2::new(width - margin, height - margin),
    ];
    corners
        .into_iter()
        .max_by(|a, b| {
            distance(*a, player_head)
                .partial_cmp(&distance(*b, player_head))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(corners[0])
}

/// Place the bot at a fresh random point away from the player
///
/// Resets the bot trail to one point, direction to rightward and its own
/// score to zero. The player's state is untouched.
pub fn respawn_bot(state: &mut GameState) {
    let settings = &state.settings;
    let margin = settings.bot_spawn_margin;
    let (max_x, max_y) = (
        settings.arena_width - margin,
        settings.arena_height - margin,
    );
    let player_head = state.player.head;
    let rng = &mut state.rng;

    // Sampling needs a finite, non-empty region
    let sampled = if margin <= max_x
        && margin <= max_y
        && (max_x - margin).is_finite()
        && (max_y - margin).is_finite()
    {
        find_spawn(
            || Vec2::new(rng.random_range(margin..=max_x), rng.random_range(margin..=max_y)),
            player_head,
            settings.bot_min_spawn_dist,
            settings.respawn_max_attempts,
        )
    } else {
        None
    };

    let spawn = sampled.unwrap_or_else(|| {
        let corner = fallback_spawn(
            player_head,
            settings.arena_width,
            settings.arena_height,
            margin,
        );
        log::warn!(
            "No bot spawn found in {} attempts, using corner ({:.0}, {:.0})",
            settings.respawn_max_attempts,
            corner.x,
            corner.y
        );
        corner
    });

    state.bot.respawn(spawn);
}

/// Advance the bot one tick, reacting to the player's already-updated head
pub fn step_bot(state: &mut GameState, elapsed_ms: f32) -> BotOutcome {
    let threshold = state.settings.collision_threshold();
    let speed = state.speed.speed();

    let direction = chase_direction(state.bot.head, state.bot.direction, state.player.head);
    state.bot.direction = direction;
    state.bot.pending_direction = direction;

    let candidate = advance(state.bot.head, direction, elapsed_ms, speed);

    if is_out_of_bounds(
        candidate,
        state.settings.arena_width,
        state.settings.arena_height,
    ) {
        return respawn_with_bonus(state, RespawnCause::OutOfBounds);
    }

    if collides_with_self(
        candidate,
        state.bot.trail.collision_points(),
        state.settings.self_collision_ignore,
        threshold,
    ) {
        let reversed = state.bot.direction.opposite();
        state.bot.direction = reversed;
        state.bot.pending_direction = reversed;
        log::debug!("Bot hit own trail, reversing to {:?}", reversed);
        return BotOutcome::Reversed;
    }

    if collides_with_other(candidate, state.player.trail.collision_points(), threshold) {
        return respawn_with_bonus(state, RespawnCause::PlayerTrail);
    }

    state.bot.head = candidate;
    if state.bot.trail.append(candidate, state.settings.min_trail_dist) == TrailAppend::Pushed {
        state.bot.score = state.bot.score.saturating_add(1);
    }
    BotOutcome::Moved
}

fn respawn_with_bonus(state: &mut GameState, cause: RespawnCause) -> BotOutcome {
    let bonus = match cause {
        RespawnCause::OutOfBounds => state.settings.bot_out_of_bounds_bonus,
        RespawnCause::PlayerTrail => state.settings.bot_trail_hit_bonus,
    };
    respawn_bot(state);
    state.player.score = state.player.score.saturating_add(bonus);
    log::info!(
        "Bot respawned ({:?}), player +{} -> {}",
        cause,
        bonus,
        state.player.score
    );
    BotOutcome::Respawned { cause, bonus }
}
