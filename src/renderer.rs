use crate::config::{names, RenderConfig};
use crate::mesh::QuadOutline;
use crate::shader::ShaderProgram;
use crate::state::RenderState;

/// Per-frame renderer: uniform upload, clear, one line-loop draw.
pub struct FrameRenderer {
    program: ShaderProgram,
    quad: QuadOutline,
}

impl FrameRenderer {
    pub fn new(program: ShaderProgram, quad: QuadOutline, config: &RenderConfig) -> Self {
        let [r, g, b, a] = config.clear_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
        }

        let mut renderer = Self { program, quad };
        // Resolve uniform locations up front; a missing one logs a warning
        // and its upload becomes a no-op.
        renderer.program.get_uniform_location(names::ASPECT_UNIFORM);
        renderer.program.get_uniform_location(names::SIZE_UNIFORM);
        renderer.program.get_uniform_location(names::SCALE_UNIFORM);
        renderer
    }

    pub fn render(&mut self, state: &RenderState) {
        self.program
            .set_uniform_1f(names::ASPECT_UNIFORM, state.aspect);
        let [width, height] = state.framebuffer_size;
        self.program.set_uniform_2f(names::SIZE_UNIFORM, width, height);
        self.program.set_uniform_1f(names::SCALE_UNIFORM, state.scale);

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.program.set_used();
        self.quad.draw();
    }
}
