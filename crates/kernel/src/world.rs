use boxhop_common::Solid;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::player::Player;
use crate::raycast::ray_vs_aabb;

/// The authoritative simulation state: one player and the static solids.
///
/// The world owns the truth; renderers and tools only read from it. All
/// mutation happens through [`World::tick`] and the control primitives, so a
/// frame driver is the sole writer.
///
/// Solids keep their construction order. Order does not affect whether a
/// contact is found, but when two solids are struck in the same substep the
/// later one's velocity scaling wins (plain iteration, not a priority rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    player: Player,
    solids: Vec<Solid>,
    config: SimConfig,
    tick: u64,
    /// Accumulated simulated time in ms.
    sim_time: f32,
    /// Player position after each tick, recorded when `config.trace` is set.
    trace: Vec<Vec2>,
}

impl World {
    pub fn new(spawn: Vec2, solids: Vec<Solid>, config: SimConfig) -> Self {
        Self {
            player: Player::new(spawn),
            solids,
            config,
            tick: 0,
            sim_time: 0.0,
            trace: Vec::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    pub fn trace(&self) -> &[Vec2] {
        &self.trace
    }

    /// Advance the simulation by one bounded substep of `delta` ms.
    ///
    /// Callers guarantee `delta` is finite, non-negative, and no larger than
    /// the configured substep cap; [`crate::Session::advance`] enforces the
    /// cap by splitting frame deltas.
    pub fn tick(&mut self, delta: f32) {
        self.tick += 1;
        self.sim_time += delta;

        // A grounded player keeps the flag only while a solid still holds it
        // up; walking past the supporting edge puts it back in free fall.
        if self.player.on_ground && !self.has_support() {
            self.player.on_ground = false;
        }
        if !self.player.on_ground {
            self.add_velocity_y(-self.config.gravity * delta);
        }

        // Nothing moves, nothing to sweep.
        if self.player.vel != Vec2::ZERO {
            self.resolve_and_integrate(delta);
        }

        if self.config.trace {
            self.trace.push(self.player.pos);
        }
    }

    /// Whether some solid still supports a grounded player: the player's
    /// bottom edge rests at (or, after a landing that stopped short of the
    /// face, slightly above) the solid's top edge, with horizontal overlap.
    ///
    /// The vertical slack is one substep of travel at the fall-speed cap,
    /// the largest gap a landing contact can leave.
    fn has_support(&self) -> bool {
        let player_box = self.player.aabb();
        let bottom = player_box.min().y;
        let slack = self.config.max_fall_speed * self.config.max_substep;
        self.solids.iter().any(|solid| {
            let top = solid.aabb().max().y;
            bottom >= top
                && bottom <= top + slack
                && player_box.max().x >= solid.aabb().min().x
                && player_box.min().x <= solid.aabb().max().x
        })
    }

    fn resolve_and_integrate(&mut self, delta: f32) {
        // Provisional velocity for this substep's integration; contact
        // resolution scales its blocked component without touching the other.
        let mut vel = self.player.vel;

        for solid in &self.solids {
            let player_box = self.player.aabb();
            let origin = player_box.center();
            let dir = self.player.vel * delta;

            // Minkowski trick: grow the solid by the player half-extent and
            // sweep the player's center as a point.
            let expanded = solid.aabb().expand(player_box.half_size());

            let Some(hit) = ray_vs_aabb(&expanded, origin, dir) else {
                continue;
            };
            if hit.t_near > 1.0 {
                continue;
            }

            if hit.normal.x != 0.0 {
                vel.x *= hit.t_near;
            } else {
                // Only a top-face contact counts as landing; side and
                // bottom contacts never set the ground flag.
                if hit.normal.y == 1.0 {
                    self.player.on_ground = true;
                    self.player.vel.y = 0.0;
                }
                vel.y *= hit.t_near;
            }
        }

        self.player.pos.x += vel.x * delta;
        if !self.player.on_ground {
            self.player.pos.y += vel.y * delta;
        }
    }

    /// Accelerate horizontally, clamping the result to `[-max, max]`.
    pub fn add_velocity_x(&mut self, val: f32, max: f32) {
        self.player.vel.x = (self.player.vel.x + val).clamp(-max, max);
    }

    /// Decelerate horizontal velocity toward zero by `val`, never crossing
    /// the sign boundary.
    pub fn slow_down(&mut self, val: f32) {
        let vx = self.player.vel.x;
        self.player.vel.x = if vx < 0.0 {
            (vx + val).min(0.0)
        } else {
            (vx - val).max(0.0)
        };
    }

    /// Add vertical velocity, clamped to the configured fall-speed cap.
    pub fn add_velocity_y(&mut self, val: f32) {
        let cap = self.config.max_fall_speed;
        self.player.vel.y = (self.player.vel.y + val).clamp(-cap, cap);
    }

    /// Launch the player: set vertical velocity to the jump speed and leave
    /// the ground.
    pub fn jump(&mut self) {
        self.player.vel.y = self.config.jump_speed;
        self.player.on_ground = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The bundled level: one platform, player resting on its top edge.
    fn playground(config: SimConfig) -> World {
        World::new(
            Vec2::new(150.0, 300.0),
            vec![Solid::from_extents(100.0, 900.0, 200.0, 250.0)],
            config,
        )
    }

    fn open_air(config: SimConfig) -> World {
        World::new(Vec2::new(0.0, 0.0), Vec::new(), config)
    }

    #[test]
    fn gravity_decreases_vertical_velocity_monotonically() {
        let mut w = open_air(SimConfig::default());
        let mut prev = w.player().vel.y;
        for _ in 0..50 {
            w.tick(0.24);
            let vy = w.player().vel.y;
            assert!(vy < prev);
            prev = vy;
        }
    }

    #[test]
    fn fall_speed_clamps_at_cap() {
        let mut w = open_air(SimConfig::default());
        for _ in 0..10_000 {
            w.tick(0.24);
        }
        assert_eq!(w.player().vel.y, -5.0);
    }

    #[test]
    fn grounded_player_feels_no_gravity() {
        let mut w = playground(SimConfig::default());
        w.tick(0.24); // resting contact sets the flag
        assert!(w.player().on_ground);
        let vy = w.player().vel.y;
        w.tick(0.24);
        assert_eq!(w.player().vel.y, vy);
    }

    #[test]
    fn settles_on_platform_top_edge() {
        let mut w = playground(SimConfig::default());
        for _ in 0..200 {
            w.tick(0.24);
        }
        assert!(w.player().on_ground);
        // Bottom edge of the player sits on the platform top.
        assert_eq!(w.player().aabb().min().y, 250.0);
        assert_eq!(w.player().vel.y, 0.0);
    }

    #[test]
    fn landing_is_idempotent() {
        let mut w = playground(SimConfig::default());
        for _ in 0..10 {
            w.tick(0.24);
        }
        let settled = w.player().pos;
        for _ in 0..100 {
            w.tick(0.24);
        }
        assert_eq!(w.player().pos, settled);
    }

    #[test]
    fn side_contact_does_not_set_ground_flag() {
        // Player level with the platform, moving right into its left face.
        // Gravity off so the approach stays purely horizontal.
        let mut w = World::new(
            Vec2::new(20.0, 225.0),
            vec![Solid::from_extents(100.0, 900.0, 200.0, 250.0)],
            SimConfig {
                gravity: 0.0,
                ..SimConfig::default()
            },
        );
        w.player.vel.x = 5.0;
        for _ in 0..50 {
            w.tick(0.24);
        }
        // Stopped at the wall: boxes touch but do not overlap.
        assert!(w.player().aabb().max().x <= 100.0 + 1.0e-3);
        assert!(!w.player().on_ground);
    }

    #[test]
    fn wall_contact_scales_horizontal_velocity_only() {
        let mut w = World::new(
            Vec2::new(40.0, 225.0),
            vec![Solid::from_extents(100.0, 900.0, 200.0, 250.0)],
            SimConfig {
                gravity: 0.0,
                ..SimConfig::default()
            },
        );
        w.player.vel = Vec2::new(100.0, 0.0);
        let y_before = w.player().pos.y;
        w.tick(0.24);
        // x motion truncated at the face, y untouched.
        assert!(w.player().pos.x < 40.0 + 100.0 * 0.24);
        assert_eq!(w.player().pos.y, y_before);
        assert!(!w.player().aabb().max().x.is_nan());
    }

    #[test]
    fn walking_off_the_ledge_restores_gravity() {
        let mut w = playground(SimConfig::default());
        w.tick(0.24);
        assert!(w.player().on_ground);

        // Run right until the player's box clears the platform's extent.
        let mut ticks = 0;
        while w.player().aabb().min().x <= 900.0 {
            w.add_velocity_x(0.011 * 0.24, 0.8);
            w.tick(0.24);
            ticks += 1;
            assert!(ticks < 50_000, "never reached the ledge");
        }

        for _ in 0..100 {
            w.tick(0.24);
        }
        assert!(!w.player().on_ground);
        assert!(w.player().vel.y < 0.0);
        assert!(w.player().pos.y < 300.0);
    }

    #[test]
    fn friction_converges_to_exact_zero() {
        let mut w = open_air(SimConfig::default());
        w.player.vel.x = 0.8;
        let mut steps = 0;
        while w.player().vel.x != 0.0 {
            w.slow_down(0.005 * 0.24);
            steps += 1;
            assert!(steps < 10_000, "friction never converged");
            assert!(w.player().vel.x >= 0.0, "friction overshot past zero");
        }
    }

    #[test]
    fn friction_clamps_from_negative_side() {
        let mut w = open_air(SimConfig::default());
        w.player.vel.x = -0.3;
        for _ in 0..10_000 {
            w.slow_down(0.005 * 0.24);
            assert!(w.player().vel.x <= 0.0);
        }
        assert_eq!(w.player().vel.x, 0.0);
    }

    #[test]
    fn add_velocity_x_clamps_to_run_cap() {
        let mut w = open_air(SimConfig::default());
        for _ in 0..1_000 {
            w.add_velocity_x(0.011 * 0.24, 0.8);
        }
        assert_eq!(w.player().vel.x, 0.8);
        for _ in 0..2_000 {
            w.add_velocity_x(-0.011 * 0.24, 0.8);
        }
        assert_eq!(w.player().vel.x, -0.8);
    }

    #[test]
    fn jump_clears_ground_flag() {
        let mut w = playground(SimConfig::default());
        w.tick(0.24);
        assert!(w.player().on_ground);
        w.jump();
        assert!(!w.player().on_ground);
        assert_eq!(w.player().vel.y, 2.5);
    }

    #[test]
    fn jump_arc_returns_to_platform() {
        let mut w = playground(SimConfig::default());
        w.tick(0.24);
        w.jump();
        let mut peak = w.player().pos.y;
        let mut landed = false;
        for _ in 0..20_000 {
            w.tick(0.24);
            peak = peak.max(w.player().pos.y);
            if w.player().on_ground {
                landed = true;
                break;
            }
        }
        assert!(landed, "jump never landed");
        assert!(peak > 300.0);
        // Back on (or just above) the platform top after the arc.
        assert!(w.player().aabb().min().y >= 250.0 - 1.0e-3);
        assert!(w.player().aabb().min().y <= 252.0);
    }

    #[test]
    fn zero_velocity_skips_collision_pass() {
        let mut w = playground(SimConfig::default());
        w.player.on_ground = true; // gravity off, velocity zero
        w.tick(0.24);
        assert_eq!(w.player().pos, Vec2::new(150.0, 300.0));
    }

    #[test]
    fn trace_records_positions_when_enabled() {
        let mut w = playground(SimConfig {
            trace: true,
            ..SimConfig::default()
        });
        for _ in 0..5 {
            w.tick(0.24);
        }
        assert_eq!(w.trace().len(), 5);
        assert_eq!(*w.trace().last().unwrap(), w.player().pos);

        let mut quiet = playground(SimConfig::default());
        quiet.tick(0.24);
        assert!(quiet.trace().is_empty());
    }

    #[test]
    fn tick_counter_and_sim_time_accumulate() {
        let mut w = open_air(SimConfig::default());
        w.tick(0.24);
        w.tick(0.1);
        assert_eq!(w.tick_count(), 2);
        assert!((w.sim_time() - 0.34).abs() < 1.0e-6);
    }
}
