use gl::types::*;
use log::warn;
use std::collections::HashMap;
use std::ffi::CString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::ptr;

use crate::config::names;
use crate::error::ShaderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Shader source text tagged with its stage. Line endings are normalized to
/// `\n` and the text carries exactly one trailing NUL byte.
#[derive(Debug)]
pub struct ShaderSource {
    text: String,
    stage: ShaderStage,
}

impl ShaderSource {
    pub fn load(path: impl AsRef<Path>, stage: ShaderStage) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ShaderError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&raw, stage))
    }

    pub fn from_text(raw: &str, stage: ShaderStage) -> Self {
        let mut text = String::with_capacity(raw.len() + 1);
        for line in raw.lines() {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\0');
        Self { text, stage }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    fn to_c_string(&self) -> Result<CString, ShaderError> {
        let body = self.text.strip_suffix('\0').unwrap_or(&self.text);
        Ok(CString::new(body)?)
    }
}

pub struct ShaderProgram {
    id: GLuint,
    uniforms: HashMap<String, GLint>,
}

impl ShaderProgram {
    /// Compiles both stages and links them, binding attribute 0 to
    /// `position` and fragment output 0 to `fragment`. The returned program
    /// has already passed the link status check.
    pub fn build(vertex: &ShaderSource, fragment: &ShaderSource) -> Result<Self, ShaderError> {
        let vertex_shader = Self::compile_stage(vertex)?;
        let fragment_shader = Self::compile_stage(fragment)?;

        let position = CString::new(names::POSITION_ATTRIBUTE)?;
        let fragment_out = CString::new(names::FRAGMENT_OUTPUT)?;

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::BindAttribLocation(program, 0, position.as_ptr());
            gl::BindFragDataLocation(program, 0, fragment_out.as_ptr());
            gl::LinkProgram(program);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let mut len = 0;
            unsafe {
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            }

            let log = create_whitespace_cstring_with_len(len as usize);

            unsafe {
                gl::GetProgramInfoLog(program, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
            }

            return Err(ShaderError::Link {
                log: log.to_string_lossy().into_owned(),
            });
        }

        // The program owns the compiled stages from here on.
        unsafe {
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
        }

        Ok(ShaderProgram {
            id: program,
            uniforms: HashMap::new(),
        })
    }

    fn compile_stage(source: &ShaderSource) -> Result<GLuint, ShaderError> {
        let c_source = source.to_c_string()?;
        let shader = unsafe { gl::CreateShader(source.stage().gl_kind()) };

        unsafe {
            gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut len = 0;
            unsafe {
                gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            }

            let log = create_whitespace_cstring_with_len(len as usize);

            unsafe {
                gl::GetShaderInfoLog(shader, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
            }

            return Err(ShaderError::Compile {
                stage: source.stage(),
                log: log.to_string_lossy().into_owned(),
            });
        }

        Ok(shader)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    pub fn get_uniform_location(&mut self, name: &str) -> GLint {
        if let Some(location) = self.uniforms.get(name) {
            return *location;
        }

        let cname = CString::new(name).unwrap();
        let location = unsafe { gl::GetUniformLocation(self.id, cname.as_ptr()) };

        if location == -1 {
            warn!("Uniform '{}' not found in shader", name);
        }

        self.uniforms.insert(name.to_string(), location);
        location
    }

    pub fn set_uniform_1f(&mut self, name: &str, value: f32) {
        self.set_used();
        let location = self.get_uniform_location(name);
        unsafe {
            gl::Uniform1f(location, value);
        }
    }

    pub fn set_uniform_2f(&mut self, name: &str, x: f32, y: f32) {
        self.set_used();
        let location = self.get_uniform_location(name);
        unsafe {
            gl::Uniform2f(location, x, y);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn create_whitespace_cstring_with_len(len: usize) -> CString {
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    buffer.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_appends_single_trailing_nul() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#version 410\nvoid main() {{}}\n").unwrap();
        let source = ShaderSource::load(file.path(), ShaderStage::Vertex).unwrap();
        assert!(source.text().ends_with('\0'));
        assert_eq!(source.text().matches('\0').count(), 1);
    }

    #[test]
    fn load_is_stable_across_reads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "void main() {{}}").unwrap();
        let first = ShaderSource::load(file.path(), ShaderStage::Fragment).unwrap();
        let second = ShaderSource::load(file.path(), ShaderStage::Fragment).unwrap();
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn line_endings_normalize_to_newlines() {
        let unix = ShaderSource::from_text("a\nb\n", ShaderStage::Vertex);
        let windows = ShaderSource::from_text("a\r\nb\r\n", ShaderStage::Vertex);
        assert_eq!(unix.text(), windows.text());
        assert_eq!(unix.text(), "a\nb\n\0");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ShaderSource::load("no/such/shader.vert", ShaderStage::Vertex).unwrap_err();
        match err {
            ShaderError::FileRead { path, .. } => {
                assert_eq!(path, Path::new("no/such/shader.vert"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn c_string_drops_the_terminator() {
        let source = ShaderSource::from_text("void main() {}", ShaderStage::Vertex);
        let c = source.to_c_string().unwrap();
        assert_eq!(c.to_bytes(), b"void main() {}\n");
    }

    #[test]
    fn stage_names_match_gl_kinds() {
        assert_eq!(ShaderStage::Vertex.gl_kind(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_kind(), gl::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
