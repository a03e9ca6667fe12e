pub mod config;
pub mod context;
pub mod error;
pub mod mesh;
pub mod renderer;
pub mod shader;
pub mod state;

// Re-export commonly used types
pub use config::{RenderConfig, WindowConfig};
pub use context::GlContext;
pub use error::{InitError, ShaderError};
pub use mesh::{QuadOutline, QUAD_POINTS};
pub use renderer::FrameRenderer;
pub use shader::{ShaderProgram, ShaderSource, ShaderStage};
pub use state::RenderState;
