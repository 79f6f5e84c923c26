//! OpenGL render pipeline setup

use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};
use glam::Mat4;

use super::shader::ShaderProgram;
use super::texture::TextureId;
use super::vertex::{QUAD, Vertex, colors};
use super::{Renderer, court_projection};
use crate::error::Result;
use crate::settings::Settings;

/// Main render state. Needs a current GL context for its whole life.
pub struct GlRenderer {
    program: ShaderProgram,
    vao: GLuint,
    vbo: GLuint,
}

impl GlRenderer {
    pub fn new(settings: &Settings) -> Result<Self> {
        unsafe {
            gl::Viewport(
                0,
                0,
                settings.window_width as GLsizei,
                settings.window_height as GLsizei,
            );
        }

        let program = ShaderProgram::load(&settings.vertex_shader, &settings.fragment_shader)?;
        let (vao, vbo) = upload_quad(program.position_attribute());

        let mut renderer = Self { program, vao, vbo };
        renderer.set_view_matrix(&Mat4::IDENTITY);
        renderer.set_projection_matrix(&court_projection());
        let [r, g, b, a] = colors::FOREGROUND;
        renderer.set_colour(r, g, b, a);

        let [r, g, b, a] = colors::BACKGROUND;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        Ok(renderer)
    }
}

/// Upload the unit quad once and bind it to the position attribute
fn upload_quad(position_attribute: GLuint) -> (GLuint, GLuint) {
    let bytes: &[u8] = bytemuck::cast_slice(&QUAD);
    let (mut vao, mut vbo) = (0, 0);
    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            bytes.len() as GLsizeiptr,
            bytes.as_ptr().cast(),
            gl::STATIC_DRAW,
        );

        gl::VertexAttribPointer(
            position_attribute,
            Vertex::COMPONENTS,
            gl::FLOAT,
            gl::FALSE,
            Vertex::STRIDE as GLint,
            std::ptr::null(),
        );
        gl::EnableVertexAttribArray(position_attribute);
    }
    (vao, vbo)
}

impl Renderer for GlRenderer {
    fn set_model_matrix(&mut self, matrix: &Mat4) {
        self.program.set_model_matrix(matrix);
    }

    fn set_view_matrix(&mut self, matrix: &Mat4) {
        self.program.set_view_matrix(matrix);
    }

    fn set_projection_matrix(&mut self, matrix: &Mat4) {
        self.program.set_projection_matrix(matrix);
    }

    fn set_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.program.set_colour(red, green, blue, alpha);
    }

    fn program_id(&self) -> u32 {
        self.program.program_id()
    }

    fn position_attribute(&self) -> u32 {
        self.program.position_attribute()
    }

    fn clear(&mut self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn draw_quad(&mut self, model: &Mat4, texture: Option<TextureId>) {
        self.program.set_model_matrix(model);
        unsafe {
            if let Some(TextureId(id)) = texture {
                gl::BindTexture(gl::TEXTURE_2D, id);
            }
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, QUAD.len() as GLsizei);
        }
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
