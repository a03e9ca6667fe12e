#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 480,
            title: "Hello".to_string(),
            vsync: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
            scale: 100.0,
        }
    }
}

/// GLSL identifiers the program builder and the uniform upload agree on.
/// The bundled shaders must declare these exact names.
pub mod names {
    pub const POSITION_ATTRIBUTE: &str = "position";
    pub const FRAGMENT_OUTPUT: &str = "fragment";
    pub const ASPECT_UNIFORM: &str = "aspect";
    pub const SIZE_UNIFORM: &str = "size";
    pub const SCALE_UNIFORM: &str = "scale";
}
