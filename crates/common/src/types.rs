use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with `min` as the lower corner and `max` as the
/// upper corner.
///
/// Constructors normalize the corners component-wise, so an inverted box
/// (`min > max` on an axis) cannot be built through this API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Build a box from two opposite corners, in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build a box from axis extents: `x0..x1` horizontally, `y0..y1`
    /// vertically.
    pub fn from_extents(x0: f32, x1: f32, y0: f32, y1: f32) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Build a box around a center point with the given half-extent.
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Extent along both axes: `max - min`. Non-negative by construction.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grow the box outward by `half` on every side (Minkowski sum with a
    /// box of that half-extent).
    pub fn expand(&self, half: Vec2) -> Self {
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }

    /// Whether a point lies inside or on the boundary of the box.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A static obstacle: an immovable box placed in the world.
///
/// Solids are populated once at world construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    aabb: Aabb,
}

impl Solid {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }

    /// Convenience constructor matching level data layout: `x0, x1, y0, y1`.
    pub fn from_extents(x0: f32, x1: f32, y0: f32, y1: f32) -> Self {
        Self::new(Aabb::from_extents(x0, x1, y0, y1))
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_normalizes_corners() {
        let b = Aabb::new(Vec2::new(10.0, 5.0), Vec2::new(0.0, 20.0));
        assert_eq!(b.min(), Vec2::new(0.0, 5.0));
        assert_eq!(b.max(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn size_is_non_negative() {
        let b = Aabb::new(Vec2::new(8.0, 8.0), Vec2::new(2.0, 2.0));
        assert_eq!(b.size(), Vec2::new(6.0, 6.0));
    }

    #[test]
    fn center_and_half_size() {
        let b = Aabb::from_extents(100.0, 900.0, 200.0, 250.0);
        assert_eq!(b.center(), Vec2::new(500.0, 225.0));
        assert_eq!(b.half_size(), Vec2::new(400.0, 25.0));
    }

    #[test]
    fn from_center_half_round_trips() {
        let b = Aabb::from_center_half(Vec2::new(150.0, 300.0), Vec2::new(50.0, 50.0));
        assert_eq!(b.min(), Vec2::new(100.0, 250.0));
        assert_eq!(b.max(), Vec2::new(200.0, 350.0));
    }

    #[test]
    fn expand_grows_every_side() {
        let b = Aabb::from_extents(0.0, 10.0, 0.0, 10.0).expand(Vec2::new(50.0, 50.0));
        assert_eq!(b.min(), Vec2::new(-50.0, -50.0));
        assert_eq!(b.max(), Vec2::new(60.0, 60.0));
        assert_eq!(b.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn contains_includes_boundary() {
        let b = Aabb::from_extents(0.0, 10.0, 0.0, 10.0);
        assert!(b.contains(Vec2::new(0.0, 10.0)));
        assert!(b.contains(Vec2::new(5.0, 5.0)));
        assert!(!b.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn solid_wraps_box() {
        let s = Solid::from_extents(100.0, 900.0, 200.0, 250.0);
        assert_eq!(s.aabb().min(), Vec2::new(100.0, 200.0));
        assert_eq!(s.aabb().max(), Vec2::new(900.0, 250.0));
    }
}
