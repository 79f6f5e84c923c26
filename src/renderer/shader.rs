//! GLSL shader program
//!
//! Expects a vertex shader with a `position` attribute and `modelMatrix`,
//! `viewMatrix`, `projectionMatrix` uniforms, and a fragment shader with a
//! `color` uniform.

use std::ffi::{CStr, CString};
use std::path::Path;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use glam::Mat4;

use crate::error::{PongError, Result};

/// A linked program and its uniform/attribute locations
#[derive(Debug)]
pub struct ShaderProgram {
    program_id: GLuint,
    model_uniform: GLint,
    view_uniform: GLint,
    projection_uniform: GLint,
    colour_uniform: GLint,
    position_attribute: GLuint,
}

fn read_source(path: &Path, stage: &'static str) -> Result<CString> {
    let source = std::fs::read_to_string(path).map_err(|e| PongError::Shader {
        stage,
        message: format!("{}: {e}", path.display()),
    })?;
    CString::new(source).map_err(|_| PongError::Shader {
        stage,
        message: format!("{} contains a NUL byte", path.display()),
    })
}

fn info_log(id: GLuint, is_program: bool) -> String {
    let mut len: GLint = 0;
    unsafe {
        if is_program {
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
        } else {
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }
    }
    let mut buf = vec![0u8; len.max(1) as usize];
    unsafe {
        let ptr = buf.as_mut_ptr() as *mut GLchar;
        if is_program {
            gl::GetProgramInfoLog(id, len, std::ptr::null_mut(), ptr);
        } else {
            gl::GetShaderInfoLog(id, len, std::ptr::null_mut(), ptr);
        }
    }
    String::from_utf8_lossy(&buf)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

fn compile(kind: GLenum, source: &CStr, stage: &'static str) -> Result<GLuint> {
    unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &source.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status != gl::TRUE as GLint {
            let message = info_log(shader, false);
            gl::DeleteShader(shader);
            return Err(PongError::Shader { stage, message });
        }
        Ok(shader)
    }
}

fn link(vertex: GLuint, fragment: GLuint) -> Result<GLuint> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vertex);
        gl::AttachShader(program, fragment);
        gl::LinkProgram(program);

        // Shaders are no longer needed once linked (or failed)
        gl::DetachShader(program, vertex);
        gl::DetachShader(program, fragment);
        gl::DeleteShader(vertex);
        gl::DeleteShader(fragment);

        let mut status = gl::FALSE as GLint;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status != gl::TRUE as GLint {
            let message = info_log(program, true);
            gl::DeleteProgram(program);
            return Err(PongError::Shader {
                stage: "link",
                message,
            });
        }
        Ok(program)
    }
}

fn uniform(program: GLuint, name: &CStr) -> GLint {
    let location = unsafe { gl::GetUniformLocation(program, name.as_ptr()) };
    if location < 0 {
        // Optimized out or misnamed; writes to -1 are silently ignored
        log::warn!("Uniform {:?} not found in shader program", name);
    }
    location
}

impl ShaderProgram {
    /// Compile and link the two shader files, then make the program current
    pub fn load(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        let vertex_source = read_source(vertex_path, "vertex")?;
        let fragment_source = read_source(fragment_path, "fragment")?;

        let vertex = compile(gl::VERTEX_SHADER, &vertex_source, "vertex")?;
        let fragment = match compile(gl::FRAGMENT_SHADER, &fragment_source, "fragment") {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(e);
            }
        };
        let program_id = link(vertex, fragment)?;

        let position = unsafe { gl::GetAttribLocation(program_id, c"position".as_ptr()) };
        if position < 0 {
            unsafe { gl::DeleteProgram(program_id) };
            return Err(PongError::Shader {
                stage: "link",
                message: "vertex shader has no `position` attribute".to_string(),
            });
        }

        let program = Self {
            program_id,
            model_uniform: uniform(program_id, c"modelMatrix"),
            view_uniform: uniform(program_id, c"viewMatrix"),
            projection_uniform: uniform(program_id, c"projectionMatrix"),
            colour_uniform: uniform(program_id, c"color"),
            position_attribute: position as GLuint,
        };
        program.use_program();

        log::info!(
            "Loaded shader program {} ({}, {})",
            program_id,
            vertex_path.display(),
            fragment_path.display()
        );
        Ok(program)
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
    }

    pub fn program_id(&self) -> GLuint {
        self.program_id
    }

    pub fn position_attribute(&self) -> GLuint {
        self.position_attribute
    }

    fn set_matrix(location: GLint, matrix: &Mat4) {
        let columns = matrix.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr()) };
    }

    pub fn set_model_matrix(&self, matrix: &Mat4) {
        Self::set_matrix(self.model_uniform, matrix);
    }

    pub fn set_view_matrix(&self, matrix: &Mat4) {
        Self::set_matrix(self.view_uniform, matrix);
    }

    pub fn set_projection_matrix(&self, matrix: &Mat4) {
        Self::set_matrix(self.projection_uniform, matrix);
    }

    pub fn set_colour(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { gl::Uniform4f(self.colour_uniform, red, green, blue, alpha) };
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_shader_error() {
        let path = std::env::temp_dir().join("sdl_pong_missing_shader.glsl");
        let err = read_source(&path, "vertex").unwrap_err();
        assert!(matches!(err, PongError::Shader { stage: "vertex", .. }));
    }

    #[test]
    fn test_bundled_shaders_readable() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        let vertex = read_source(&dir.join("vertex.glsl"), "vertex").unwrap();
        let fragment = read_source(&dir.join("fragment.glsl"), "fragment").unwrap();
        let vertex = vertex.to_str().unwrap();
        assert!(vertex.contains("modelMatrix"));
        assert!(vertex.contains("position"));
        assert!(fragment.to_str().unwrap().contains("color"));
    }
}
