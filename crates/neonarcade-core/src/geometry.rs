use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Host display surface size in pixels, sampled at (re)start time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Integer cell coordinate on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }

    /// Row-major index into a `width`-wide grid. Caller must check bounds.
    pub fn index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }
}

/// Which wall (if any) a circle touched in [`reflect_between`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    Min,
    Max,
}

/// Reflect a circle moving along one axis off the walls at `lo` and `hi`.
///
/// When the circle's edge reaches either wall the velocity is inverted and the
/// center is clamped so the edge sits exactly on the wall. Returns the new
/// `(center, velocity, contact)`.
pub fn reflect_between(
    center: f32,
    velocity: f32,
    radius: f32,
    lo: f32,
    hi: f32,
) -> (f32, f32, WallContact) {
    if center - radius <= lo {
        (lo + radius, -velocity, WallContact::Min)
    } else if center + radius >= hi {
        (hi - radius, -velocity, WallContact::Max)
    } else {
        (center, velocity, WallContact::None)
    }
}

/// Clamp the start of a span of length `len` so that the whole span stays
/// within `[lo, hi]`. A span longer than the range is pinned to `lo`.
pub fn clamp_span(start: f32, len: f32, lo: f32, hi: f32) -> f32 {
    start.min(hi - len).max(lo)
}

/// Closed-interval overlap test.
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min <= b_max && a_max >= b_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let p = GridPos::new(5, 10);
        assert_eq!(p.step(Direction::Right), GridPos::new(6, 10));
        assert_eq!(p.step(Direction::Up), GridPos::new(5, 9));
    }

    #[test]
    fn bounds_exclude_edges() {
        assert!(GridPos::new(0, 0).in_bounds(20, 20));
        assert!(GridPos::new(19, 19).in_bounds(20, 20));
        assert!(!GridPos::new(20, 0).in_bounds(20, 20));
        assert!(!GridPos::new(-1, 3).in_bounds(20, 20));
        assert!(!GridPos::new(3, -1).in_bounds(20, 20));
    }

    #[test]
    fn reflect_off_max_wall_clamps() {
        let (c, v, hit) = reflect_between(598.0, 3.0, 8.0, 0.0, 600.0);
        assert_eq!(hit, WallContact::Max);
        assert!((c - 592.0).abs() < f32::EPSILON);
        assert!((v + 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn reflect_off_min_wall_clamps() {
        let (c, v, hit) = reflect_between(-4.0, -2.0, 8.0, 0.0, 600.0);
        assert_eq!(hit, WallContact::Min);
        assert!((c - 8.0).abs() < f32::EPSILON);
        assert!((v - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn reflect_inside_is_untouched() {
        let (c, v, hit) = reflect_between(300.0, 3.0, 8.0, 0.0, 600.0);
        assert_eq!(hit, WallContact::None);
        assert!((c - 300.0).abs() < f32::EPSILON);
        assert!((v - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clamp_span_keeps_span_inside() {
        assert!((clamp_span(-10.0, 80.0, 0.0, 600.0) - 0.0).abs() < f32::EPSILON);
        assert!((clamp_span(590.0, 80.0, 0.0, 600.0) - 520.0).abs() < f32::EPSILON);
        assert!((clamp_span(100.0, 80.0, 0.0, 600.0) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn oversized_span_pins_to_low_edge() {
        assert_eq!(clamp_span(10.0, 80.0, 0.0, 50.0), 0.0);
        assert_eq!(clamp_span(-10.0, 80.0, 0.0, 50.0), 0.0);
    }

    #[test]
    fn overlap_is_inclusive() {
        assert!(spans_overlap(0.0, 10.0, 10.0, 20.0));
        assert!(!spans_overlap(0.0, 9.9, 10.0, 20.0));
    }
}
