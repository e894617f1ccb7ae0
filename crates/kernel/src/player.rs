use boxhop_common::Aabb;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The single dynamic actor: a box of fixed extent under player control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set when a downward sweep lands on top of a solid; suppresses gravity
    /// and vertical integration until the next jump.
    pub on_ground: bool,
}

impl Player {
    /// Half-extent of the player's collision box, in world units.
    pub const HALF_SIZE: Vec2 = Vec2::new(50.0, 50.0);

    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    /// Collision box derived from the current position. Recomputed on every
    /// call rather than cached, so it can never drift from `pos`.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, Self::HALF_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_rest() {
        let p = Player::new(Vec2::new(150.0, 300.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(!p.on_ground);
    }

    #[test]
    fn aabb_tracks_position() {
        let mut p = Player::new(Vec2::ZERO);
        assert_eq!(p.aabb().min(), Vec2::new(-50.0, -50.0));
        assert_eq!(p.aabb().max(), Vec2::new(50.0, 50.0));

        p.pos = Vec2::new(150.0, 300.0);
        assert_eq!(p.aabb().center(), p.pos);
        assert_eq!(p.aabb().half_size(), Player::HALF_SIZE);
    }
}
