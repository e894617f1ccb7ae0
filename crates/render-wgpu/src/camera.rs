use boxhop_render::RenderView;
use glam::{Mat4, Vec2};

/// Orthographic 2D camera: a world-space center and a visible height.
///
/// Width follows the viewport aspect ratio so world squares stay square.
#[derive(Debug, Clone, Copy)]
pub struct OrthoCamera {
    pub center: Vec2,
    pub view_height: f32,
    pub aspect: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        let view = RenderView::default();
        Self {
            center: view.center,
            view_height: view.view_height,
            aspect: 4.0 / 3.0,
        }
    }
}

impl OrthoCamera {
    pub fn from_view(view: &RenderView, aspect: f32) -> Self {
        Self {
            center: view.center,
            view_height: view.view_height,
            aspect,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        let half_h = self.view_height * 0.5;
        let half_w = half_h * self.aspect;
        Mat4::orthographic_rh(
            self.center.x - half_w,
            self.center.x + half_w,
            self.center.y - half_h,
            self.center.y + half_h,
            -1.0,
            1.0,
        )
    }
}
