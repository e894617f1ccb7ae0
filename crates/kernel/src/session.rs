use boxhop_common::Solid;
use glam::Vec2;

use crate::config::SimConfig;
use crate::world::World;

/// Per-frame input flags, owned by the caller.
///
/// Move flags are level-triggered (key held); `jump` is an edge the caller
/// queues once per frame. The session consumes the jump before substep
/// splitting, so a single press never re-fires on every substep of a long
/// frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Frame driver: feeds wall-clock deltas into the world as bounded substeps.
///
/// A frame delta larger than [`SimConfig::max_substep`] is split into whole
/// substeps of exactly the cap plus one remainder, so a stall cannot make a
/// single swept ray travel further than the cap allows. The split is
/// exhaustive: the substep deltas sum to the frame delta to float precision.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self { world }
    }

    /// The bundled level: one platform `x:[100,900] y:[200,250]`, player
    /// spawned resting on its top edge at `(150, 300)`.
    pub fn playground(config: SimConfig) -> Self {
        Self::new(World::new(
            Vec2::new(150.0, 300.0),
            vec![Solid::from_extents(100.0, 900.0, 200.0, 250.0)],
            config,
        ))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Advance by a raw frame delta of `delta` ms under the given input.
    ///
    /// The jump edge is applied once, before splitting; move flags feed the
    /// control update of every substep with that substep's own delta.
    pub fn advance(&mut self, delta: f32, input: FrameInput) {
        if input.jump {
            self.world.jump();
        }

        let cap = self.world.config().max_substep;
        if delta <= cap {
            self.substep(delta, input);
            return;
        }

        let substeps = delta / cap;
        let whole = substeps.trunc();
        let rest = substeps - whole;

        tracing::trace!(delta, whole, "splitting oversized frame delta");
        for _ in 0..whole as u32 {
            self.substep(cap, input);
        }
        self.substep(rest * cap, input);
    }

    /// One control update followed by one world tick.
    fn substep(&mut self, delta: f32, input: FrameInput) {
        let config = *self.world.config();
        if input.move_left && !input.move_right {
            self.world
                .add_velocity_x(-config.run_accel * delta, config.max_run_speed);
        } else if input.move_right && !input.move_left {
            self.world
                .add_velocity_x(config.run_accel * delta, config.max_run_speed);
        } else if self.world.player().on_ground {
            self.world.slow_down(config.friction * delta);
        }

        self.world.tick(delta);
    }
}
