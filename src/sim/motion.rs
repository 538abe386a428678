//! Continuous motion integration and arena bounds

use super::direction::Direction;
use crate::Point;

/// Move `head` along `direction` for `elapsed_ms` at `speed` units per second
#[inline]
pub fn advance(head: Point, direction: Direction, elapsed_ms: f32, speed: f32) -> Point {
    let move_dist = speed * (elapsed_ms / 1000.0);
    head + direction.vector() * move_dist
}

/// True if the point lies outside `[0, width] x [0, height]`
#[inline]
pub fn is_out_of_bounds(point: Point, width: f32, height: f32) -> bool {
    point.x < 0.0 || point.x > width || point.y < 0.0 || point.y > height
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_advance_scales_with_elapsed_time() {
        let head = Vec2::new(400.0, 300.0);
        assert_eq!(advance(head, Direction::Right, 1000.0, 200.0), Vec2::new(600.0, 300.0));
        assert_eq!(advance(head, Direction::Up, 500.0, 200.0), Vec2::new(400.0, 200.0));
        assert_eq!(advance(head, Direction::Left, 0.0, 200.0), head);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(!is_out_of_bounds(Vec2::new(0.0, 0.0), 800.0, 600.0));
        assert!(!is_out_of_bounds(Vec2::new(800.0, 600.0), 800.0, 600.0));
        assert!(is_out_of_bounds(Vec2::new(810.0, 300.0), 800.0, 600.0));
        assert!(is_out_of_bounds(Vec2::new(400.0, -0.5), 800.0, 600.0));
        assert!(is_out_of_bounds(Vec2::new(-1.0, 300.0), 800.0, 600.0));
        assert!(is_out_of_bounds(Vec2::new(400.0, 600.1), 800.0, 600.0));
    }
}
