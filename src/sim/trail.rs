//! Bounded trail history for one agent
//!
//! A trail keeps two point sequences, oldest first: the render trail and the
//! collision history. They are always the same length and are pushed,
//! overwritten and evicted together.

use serde::{Deserialize, Serialize};

use crate::{Point, distance};

/// What an [`Trail::append`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailAppend {
    /// A new point was pushed (possibly evicting the oldest)
    Pushed,
    /// Movement was below the decimation distance; the last point moved instead
    Overwritten,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<Point>,
    collision_points: Vec<Point>,
    max_len: usize,
}

impl Trail {
    /// Start a trail with a single point
    pub fn new(start: Point, max_len: usize) -> Self {
        let max_len = max_len.max(1);
        let mut points = Vec::with_capacity(max_len + 1);
        let mut collision_points = Vec::with_capacity(max_len + 1);
        points.push(start);
        collision_points.push(start);
        Self {
            points,
            collision_points,
            max_len,
        }
    }

    /// Drop all history and restart at `start`
    pub fn reset(&mut self, start: Point) {
        self.points.clear();
        self.collision_points.clear();
        self.points.push(start);
        self.collision_points.push(start);
    }

    /// Record a new head position
    ///
    /// Pushes when the head moved more than `min_dist` from the last point,
    /// otherwise overwrites the last point in place.
    pub fn append(&mut self, point: Point, min_dist: f32) -> TrailAppend {
        let moved_far = self
            .points
            .last()
            .map(|last| distance(*last, point) > min_dist)
            .unwrap_or(true);

        if moved_far {
            self.points.push(point);
            self.collision_points.push(point);
            if self.points.len() > self.max_len {
                self.points.remove(0);
                self.collision_points.remove(0);
            }
            TrailAppend::Pushed
        } else {
            if let Some(last) = self.points.last_mut() {
                *last = point;
            }
            if let Some(last) = self.collision_points.last_mut() {
                *last = point;
            }
            TrailAppend::Overwritten
        }
    }

    /// Render points, oldest first
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Collision history, oldest first
    pub fn collision_points(&self) -> &[Point] {
        &self.collision_points
    }

    /// Never zero; a trail always holds its start point
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
