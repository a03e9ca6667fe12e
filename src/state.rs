use winit::dpi::{LogicalSize, PhysicalSize};

/// Values the resize path writes and the per-frame uniform upload reads.
/// Owned by the event loop; there is a single writer on a single thread.
///
/// Aspect tracks the LOGICAL window size while `framebuffer_size` (and the
/// viewport) track the PHYSICAL framebuffer. The two diverge on high-density
/// displays; see DESIGN.md for why the split is kept as-is.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub aspect: f32,
    pub framebuffer_size: [f32; 2],
    pub scale: f32,
}

impl RenderState {
    pub fn new(logical: LogicalSize<f64>, physical: PhysicalSize<u32>, scale: f32) -> Self {
        let mut state = Self {
            aspect: 1.0,
            framebuffer_size: [0.0, 0.0],
            scale,
        };
        state.handle_resize(logical, physical);
        state
    }

    pub fn handle_resize(&mut self, logical: LogicalSize<f64>, physical: PhysicalSize<u32>) {
        if logical.height > 0.0 {
            self.aspect = (logical.width / logical.height) as f32;
        }
        self.framebuffer_size = [physical.width as f32, physical.height as f32];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        let state = RenderState::new(
            LogicalSize::new(600.0, 480.0),
            PhysicalSize::new(600, 480),
            100.0,
        );
        assert_eq!(state.aspect, 1.25);
        assert_eq!(state.framebuffer_size, [600.0, 480.0]);
        assert_eq!(state.scale, 100.0);
    }

    #[test]
    fn framebuffer_size_tracks_physical_pixels() {
        let mut state = RenderState::new(
            LogicalSize::new(600.0, 480.0),
            PhysicalSize::new(600, 480),
            100.0,
        );
        // 2x display: logical size unchanged, framebuffer doubled
        state.handle_resize(LogicalSize::new(600.0, 480.0), PhysicalSize::new(1200, 960));
        assert_eq!(state.aspect, 1.25);
        assert_eq!(state.framebuffer_size, [1200.0, 960.0]);
    }

    #[test]
    fn resize_recomputes_aspect() {
        let mut state = RenderState::new(
            LogicalSize::new(600.0, 480.0),
            PhysicalSize::new(600, 480),
            100.0,
        );
        state.handle_resize(LogicalSize::new(800.0, 400.0), PhysicalSize::new(800, 400));
        assert_eq!(state.aspect, 2.0);
    }

    #[test]
    fn zero_height_keeps_previous_aspect() {
        let mut state = RenderState::new(
            LogicalSize::new(600.0, 480.0),
            PhysicalSize::new(600, 480),
            100.0,
        );
        // minimized window
        state.handle_resize(LogicalSize::new(300.0, 0.0), PhysicalSize::new(300, 0));
        assert_eq!(state.aspect, 1.25);
        assert_eq!(state.framebuffer_size, [300.0, 0.0]);
    }
}
