//! Lightcycle - a two-agent trail arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (motion, trails, collisions, bot policy, game state)
//! - `game_loop`: Host-driven scheduler around the simulation tick
//! - `render`: Render sink boundary (trail geometry + stroke hints)
//! - `highscores`: Run results and the score sink boundary
//! - `settings`: Data-driven game tuning

pub mod game_loop;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameToken, GameLoop};
pub use highscores::{RunResult, ScoreSink, SubmissionGate};
pub use settings::Settings;

use glam::Vec2;

/// Arena coordinates, origin top-left, y pointing down
pub type Point = Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Stroke width of a trail; also sizes the collision radius
    pub const LINE_WIDTH: f32 = 8.0;
    /// Collision threshold = LINE_WIDTH * COLLISION_FACTOR
    pub const COLLISION_FACTOR: f32 = 0.8;
    /// Movement below this distance overwrites the last trail point
    pub const MIN_TRAIL_DIST: f32 = 2.0;
    /// Trail capacity per agent
    pub const MAX_TRAIL_LENGTH: usize = 50;
    /// Most recent points skipped in self-collision tests
    pub const SELF_COLLISION_IGNORE: usize = 10;

    /// Speed in units per second at run start
    pub const BASE_SPEED: f32 = 200.0;
    pub const SPEED_STEP: f32 = 30.0;
    pub const SPEED_INTERVAL_MS: f32 = 5000.0;

    /// Bot spawns inside [margin, size - margin] on both axes
    pub const BOT_SPAWN_MARGIN: f32 = 50.0;
    pub const BOT_MIN_SPAWN_DIST: f32 = 150.0;
    pub const RESPAWN_MAX_ATTEMPTS: u32 = 1000;

    /// Player bonus when the bot leaves the arena
    pub const BOT_OUT_OF_BOUNDS_BONUS: u64 = 10;
    /// Player bonus when the bot runs into the player's trail
    pub const BOT_TRAIL_HIT_BONUS: u64 = 1000;

    /// Longest accepted player name (after trimming)
    pub const MAX_NAME_CHARS: usize = 20;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_basic() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(7.5, -2.0), Vec2::new(7.5, -2.0)), 0.0);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(distance(a, b), distance(b, a));
            prop_assert_eq!(distance(a, a), 0.0);
        }
    }
}
