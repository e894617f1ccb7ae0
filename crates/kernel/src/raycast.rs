use boxhop_common::Aabb;
use glam::Vec2;

/// First contact of a ray segment with a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parametric entry time: `0.0` at the origin, `1.0` at `origin + dir`.
    pub t_near: f32,
    /// Point of first contact, `origin + t_near * dir`.
    pub contact: Vec2,
    /// Axis-aligned surface normal at the contact, pointing back against the
    /// direction of travel along the entry axis.
    pub normal: Vec2,
}

/// Sweep the segment `[origin, origin + dir]` against `target` and return the
/// entry contact, if any.
///
/// 2D slab method. `dir` is a displacement, not a unit vector: its magnitude
/// is the distance traveled this step, so callers treat `t_near <= 1.0` as a
/// hit within the step. Axis-parallel rays divide by zero into ±Inf and fall
/// through the comparisons without special cases; a 0/0 NaN compares false
/// everywhere and reads as a miss.
///
/// Rays starting inside (or past) the box on an axis are rejected
/// (`t_near < 0`): already-touching geometry is not re-resolved.
pub fn ray_vs_aabb(target: &Aabb, origin: Vec2, dir: Vec2) -> Option<RayHit> {
    let near = (target.min() - origin) / dir;
    let far = (target.max() - origin) / dir;

    let (t_near_x, t_far_x) = if near.x > far.x {
        (far.x, near.x)
    } else {
        (near.x, far.x)
    };
    let (t_near_y, t_far_y) = if near.y > far.y {
        (far.y, near.y)
    } else {
        (near.y, far.y)
    };

    // Slab overlap: entry on one axis must precede exit on the other.
    if !(t_near_x < t_far_y && t_near_y < t_far_x) {
        return None;
    }

    let t_near = t_near_x.max(t_near_y);
    let t_far = t_far_x.min(t_far_y);

    // Box entirely behind the ray, or origin already inside/past on an axis.
    if t_far < 0.0 || t_near < 0.0 {
        return None;
    }

    let normal = if t_near_x >= t_near_y {
        if dir.x < 0.0 { Vec2::X } else { -Vec2::X }
    } else if dir.y < 0.0 {
        Vec2::Y
    } else {
        -Vec2::Y
    };

    Some(RayHit {
        t_near,
        contact: origin + t_near * dir,
        normal,
    })
}
