use boxhop_kernel::{Player, World};
use glam::Vec2;

/// What a quad in the scene snapshot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadKind {
    Solid,
    Player,
}

/// One axis-aligned quad to draw: center and half-extent in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadInstance {
    pub center: Vec2,
    pub half_size: Vec2,
    pub kind: QuadKind,
}

/// Read-only snapshot of the world as draw data: solids first, player last,
/// so a painter-order backend draws the player on top.
pub fn scene_quads(world: &World) -> Vec<QuadInstance> {
    let mut quads = Vec::with_capacity(world.solids().len() + 1);
    for solid in world.solids() {
        quads.push(QuadInstance {
            center: solid.aabb().center(),
            half_size: solid.aabb().half_size(),
            kind: QuadKind::Solid,
        });
    }
    // The player's position is its center; use it directly rather than
    // recovering it from the corner representation, which rounds.
    quads.push(QuadInstance {
        center: world.player().pos,
        half_size: Player::HALF_SIZE,
        kind: QuadKind::Player,
    });
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxhop_common::Solid;
    use boxhop_kernel::SimConfig;

    #[test]
    fn snapshot_lists_solids_then_player() {
        let world = World::new(
            Vec2::new(150.0, 300.0),
            vec![
                Solid::from_extents(100.0, 900.0, 200.0, 250.0),
                Solid::from_extents(0.0, 50.0, 0.0, 600.0),
            ],
            SimConfig::default(),
        );
        let quads = scene_quads(&world);
        assert_eq!(quads.len(), 3);
        assert_eq!(quads[0].kind, QuadKind::Solid);
        assert_eq!(quads[0].center, Vec2::new(500.0, 225.0));
        assert_eq!(quads[0].half_size, Vec2::new(400.0, 25.0));
        assert_eq!(quads[2].kind, QuadKind::Player);
        assert_eq!(quads[2].center, Vec2::new(150.0, 300.0));
        assert_eq!(quads[2].half_size, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn snapshot_tracks_player_motion() {
        let mut world = World::new(Vec2::ZERO, Vec::new(), SimConfig::default());
        world.tick(0.24);
        let quads = scene_quads(&world);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].center, world.player().pos);
    }
}
