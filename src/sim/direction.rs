//! Cardinal travel directions

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four axis-aligned unit directions (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    #[inline]
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// The exact negation of this direction
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.vector() + dir.opposite().vector(), Vec2::ZERO);
            assert!(dir.is_reverse_of(dir.opposite()));
            assert!(!dir.is_reverse_of(dir));
            assert_eq!(dir.vector().length(), 1.0);
        }
    }

    #[test]
    fn test_default_is_rightward() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
