use gl::types::*;

/// Corner points of the unit quad outline, x/y interleaved.
pub const QUAD_POINTS: [f32; 8] = [
    -0.5, -0.5, //
    0.5, -0.5, //
    0.5, 0.5, //
    -0.5, 0.5, //
];

/// A VBO/VAO pair over a fixed array of 2D points, drawn as a line loop.
/// Immutable after upload.
pub struct QuadOutline {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl QuadOutline {
    /// Uploads a flat array of 2D coordinates to attribute index 0.
    pub fn upload(points: &[f32]) -> Self {
        debug_assert_eq!(points.len() % 2, 0, "points are x/y pairs");

        let mut vbo = 0;
        let mut vao = 0;
        unsafe {
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (points.len() * std::mem::size_of::<f32>()) as GLsizeiptr,
                points.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::EnableVertexAttribArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, 0, std::ptr::null());
        }

        Self {
            vao,
            vbo,
            vertex_count: vertex_count_for(points),
        }
    }

    /// One draw call, vertex count matching the uploaded points.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::LINE_LOOP, 0, self.vertex_count);
        }
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }
}

impl Drop for QuadOutline {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}

pub(crate) fn vertex_count_for(points: &[f32]) -> GLsizei {
    (points.len() / 2) as GLsizei
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_outline_has_four_corners() {
        assert_eq!(QUAD_POINTS.len(), 8);
        assert_eq!(vertex_count_for(&QUAD_POINTS), 4);
    }

    #[test]
    fn vertex_count_matches_uploaded_points() {
        assert_eq!(vertex_count_for(&[]), 0);
        assert_eq!(vertex_count_for(&[0.0, 1.0]), 1);
        assert_eq!(vertex_count_for(&[0.0; 12]), 6);
    }
}
