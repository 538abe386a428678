//! Simulation module
//!
//! All gameplay logic lives here:
//! - Elapsed-time motion integration (host supplies the frame delta)
//! - Seeded RNG only (bot respawns)
//! - Player always updates before the bot within a tick
//! - No rendering or platform dependencies

pub mod bot;
pub mod collision;
pub mod direction;
pub mod motion;
pub mod player;
pub mod speed;
pub mod state;
pub mod tick;
pub mod trail;

pub use bot::{BotOutcome, chase_direction, find_spawn, respawn_bot, step_bot};
pub use collision::{collides_with_other, collides_with_self, collision_threshold};
pub use direction::Direction;
pub use motion::{advance, is_out_of_bounds};
pub use player::step_player;
pub use speed::SpeedRamp;
pub use state::{Agent, CrashCause, GameEvent, GamePhase, GameState, RespawnCause};
pub use tick::{TickInput, tick};
pub use trail::{Trail, TrailAppend};
