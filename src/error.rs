use std::ffi::NulError;
use std::path::PathBuf;
use thiserror::Error;

use crate::shader::ShaderStage;

/// Windowing or context bring-up failure. Always fatal.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Event loop creation failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Display creation failed: {0}")]
    Display(String),

    #[error("Display produced no window")]
    MissingWindow,

    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::error::Error),
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("Failed to link program: {log}")]
    Link { log: String },

    #[error("Failed to read shader source {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Null byte error: {0}")]
    Nul(#[from] NulError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_errors_carry_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): error: syntax error".into(),
        };
        let message = err.to_string();
        assert!(message.contains("fragment"));
        assert!(message.contains("syntax error"));
    }

    #[test]
    fn link_errors_carry_the_log() {
        let err = ShaderError::Link {
            log: "error: unresolved varying".into(),
        };
        assert!(err.to_string().contains("unresolved varying"));
    }

    #[test]
    fn file_read_errors_name_the_path() {
        let err = ShaderError::FileRead {
            path: PathBuf::from("shaders/point.vert"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("shaders/point.vert"));
    }
}
