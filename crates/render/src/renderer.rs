use boxhop_kernel::World;
use glam::Vec2;

/// 2D camera configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// World-space point at the center of the viewport.
    pub center: Vec2,
    /// Height of the visible world slice, in world units; width follows the
    /// viewport aspect ratio.
    pub view_height: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        // The bundled level spans roughly 0..1000 on each axis.
        Self {
            center: Vec2::new(500.0, 375.0),
            view_height: 750.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads world state and a view, then produces output. It never
/// mutates the world — world truth is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless use: CLI output, logging, and testing the
/// render seam without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &RenderView) -> String {
        let p = world.player();
        let mut out = String::new();
        out.push_str(&format!(
            "=== World (tick={}, t={:.2}ms) ===\n",
            world.tick_count(),
            world.sim_time()
        ));
        out.push_str(&format!(
            "Player: pos=({:.2}, {:.2}) vel=({:.4}, {:.4}) ground={}\n",
            p.pos.x, p.pos.y, p.vel.x, p.vel.y, p.on_ground
        ));
        out.push_str(&format!(
            "View: center=({:.1}, {:.1}) height={:.0}\n",
            view.center.x, view.center.y, view.view_height
        ));
        out.push_str(&format!("Solids: {}\n", world.solids().len()));
        for solid in world.solids() {
            let b = solid.aabb();
            out.push_str(&format!(
                "  x:[{:.0}, {:.0}] y:[{:.0}, {:.0}]\n",
                b.min().x,
                b.max().x,
                b.min().y,
                b.max().y
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxhop_common::Solid;
    use boxhop_kernel::SimConfig;

    fn playground() -> World {
        World::new(
            Vec2::new(150.0, 300.0),
            vec![Solid::from_extents(100.0, 900.0, 200.0, 250.0)],
            SimConfig::default(),
        )
    }

    #[test]
    fn debug_renderer_reports_player_and_solids() {
        let output = DebugTextRenderer::new().render(&playground(), &RenderView::default());
        assert!(output.contains("tick=0"));
        assert!(output.contains("pos=(150.00, 300.00)"));
        assert!(output.contains("ground=false"));
        assert!(output.contains("Solids: 1"));
        assert!(output.contains("x:[100, 900]"));
    }

    #[test]
    fn debug_renderer_reflects_ticks() {
        let mut world = playground();
        world.tick(0.24);
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert!(output.contains("tick=1"));
        assert!(output.contains("ground=true"));
    }
}
