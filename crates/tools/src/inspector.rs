use boxhop_kernel::World;

/// World inspector for developer tooling.
///
/// Read-only queries against the simulation state for debugging and
/// development UI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let p = world.player();
        WorldSummary {
            tick: world.tick_count(),
            sim_time_ms: world.sim_time(),
            player_pos: [p.pos.x, p.pos.y],
            player_vel: [p.vel.x, p.vel.y],
            on_ground: p.on_ground,
            solid_count: world.solids().len(),
            trace_len: world.trace().len(),
        }
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSummary {
    pub tick: u64,
    pub sim_time_ms: f32,
    pub player_pos: [f32; 2],
    pub player_vel: [f32; 2],
    pub on_ground: bool,
    pub solid_count: usize,
    pub trace_len: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: tick={} t={:.2}ms pos=({:.2}, {:.2}) vel=({:.4}, {:.4}) ground={} solids={}",
            self.tick,
            self.sim_time_ms,
            self.player_pos[0],
            self.player_pos[1],
            self.player_vel[0],
            self.player_vel[1],
            self.on_ground,
            self.solid_count,
        )
    }
}
