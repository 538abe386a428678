//! Render sink boundary
//!
//! The simulation does not draw. Once per tick the host hands a [`RenderFrame`]
//! to whatever draws it: both trails as ordered point lists plus a stroke style
//! per agent.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::sim::GameState;

/// Colors for game elements (RGBA, 0-1)
pub mod colors {
    /// Player trail, #0ff
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// Bot trail, #f80
    pub const BOT: [f32; 4] = [1.0, 0.533, 0.0, 1.0];
}

/// Glow radius drawn behind each trail
pub const SHADOW_BLUR: f32 = 10.0;

/// Which agent a stroke belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeId {
    Player,
    Bot,
}

/// How to draw one trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub id: StrokeId,
    pub color: [f32; 4],
    /// Shadow uses the stroke color
    pub shadow_blur: f32,
    pub line_width: f32,
    /// Round joins and caps
    pub round: bool,
}

impl StrokeStyle {
    pub fn player(line_width: f32) -> Self {
        Self {
            id: StrokeId::Player,
            color: colors::PLAYER,
            shadow_blur: SHADOW_BLUR,
            line_width,
            round: true,
        }
    }

    pub fn bot(line_width: f32) -> Self {
        Self {
            id: StrokeId::Bot,
            color: colors::BOT,
            shadow_blur: SHADOW_BLUR,
            line_width,
            round: true,
        }
    }
}

/// One polyline to draw
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    pub style: StrokeStyle,
    /// Oldest point first
    pub points: &'a [Point],
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub arena_width: f32,
    pub arena_height: f32,
    pub player: Stroke<'a>,
    pub bot: Stroke<'a>,
    pub score: u64,
}

impl<'a> RenderFrame<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        let line_width = state.settings.line_width;
        Self {
            arena_width: state.settings.arena_width,
            arena_height: state.settings.arena_height,
            player: Stroke {
                style: StrokeStyle::player(line_width),
                points: state.player.trail.points(),
            },
            bot: Stroke {
                style: StrokeStyle::bot(line_width),
                points: state.bot.trail.points(),
            },
            score: state.player.score,
        }
    }

    /// Player first, then bot (draw order)
    pub fn strokes(&self) -> [Stroke<'a>; 2] {
        [self.player, self.bot]
    }
}

/// Consumer of per-tick frames
pub trait RenderSink {
    fn draw(&mut self, frame: &RenderFrame<'_>);
}

/// Sink for headless runs
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _frame: &RenderFrame<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_frame_mirrors_trails() {
        let state = GameState::new(Settings {
            seed: Some(3),
            ..Settings::default()
        });
        let frame = RenderFrame::from_state(&state);
        assert_eq!(frame.player.points, state.player.trail.points());
        assert_eq!(frame.bot.points, state.bot.trail.points());
        assert_eq!(frame.player.style.id, StrokeId::Player);
        assert_eq!(frame.bot.style.color, colors::BOT);
        assert_eq!(frame.player.style.line_width, 8.0);

        let strokes = frame.strokes();
        assert_eq!(strokes[0].style.id, StrokeId::Player);
        assert_eq!(strokes[1].style.id, StrokeId::Bot);
    }
}
