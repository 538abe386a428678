//! Trail collision tests
//!
//! A candidate head collides with a trail when it comes within `threshold`
//! of any recorded collision point. Self tests skip the newest points: right
//! after a turn they sit next to the head by construction.

use crate::{Point, distance};

/// Collision radius for a trail drawn at `line_width`
#[inline]
pub fn collision_threshold(line_width: f32, factor: f32) -> f32 {
    line_width * factor
}

/// Test against an agent's own history, ignoring the newest `ignore_last` points
///
/// A history of `ignore_last` points or fewer can never self-collide.
pub fn collides_with_self(
    candidate: Point,
    history: &[Point],
    ignore_last: usize,
    threshold: f32,
) -> bool {
    if history.len() <= ignore_last {
        return false;
    }
    let old = &history[..history.len() - ignore_last];
    collides_with_other(candidate, old, threshold)
}

/// Test against an opponent's full history (no exclusion window)
pub fn collides_with_other(candidate: Point, other_history: &[Point], threshold: f32) -> bool {
    other_history
        .iter()
        .any(|p| distance(candidate, *p) < threshold)
}
