//! OpenGL rendering module
//!
//! Every object is the same unit quad drawn with its own model matrix.
//! `Renderer` is the seam between the frame driver and OpenGL, so the
//! driver can be exercised without a GL context.

pub mod pipeline;
pub mod shader;
pub mod texture;
pub mod vertex;

pub use pipeline::GlRenderer;
pub use shader::ShaderProgram;
pub use texture::{TextureId, load_texture};

use glam::Mat4;

use crate::consts::{ORTHO_HEIGHT, ORTHO_WIDTH};
use crate::sim::GameState;

/// Shader program plus quad drawing
pub trait Renderer {
    fn set_model_matrix(&mut self, matrix: &Mat4);
    fn set_view_matrix(&mut self, matrix: &Mat4);
    fn set_projection_matrix(&mut self, matrix: &Mat4);
    fn set_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32);

    fn program_id(&self) -> u32;
    /// Attribute slot the quad's vertex positions are bound to
    fn position_attribute(&self) -> u32;

    /// Clear the color buffer
    fn clear(&mut self);

    /// Draw the unit quad with `model`, optionally textured
    fn draw_quad(&mut self, model: &Mat4, texture: Option<TextureId>);
}

/// Orthographic projection covering the whole court
pub fn court_projection() -> Mat4 {
    Mat4::orthographic_rh_gl(
        -ORTHO_WIDTH / 2.0,
        ORTHO_WIDTH / 2.0,
        -ORTHO_HEIGHT / 2.0,
        ORTHO_HEIGHT / 2.0,
        -1.0,
        1.0,
    )
}

/// Draw one frame. Presenting it is up to the caller.
pub fn render<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.clear();
    for model in state.models() {
        renderer.draw_quad(&model, None);
    }
}
