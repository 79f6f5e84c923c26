//! Vertex data for the shared unit quad

use bytemuck::{Pod, Zeroable};

/// 2D vertex, position only
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Floats per vertex, as handed to `glVertexAttribPointer`
    pub const COMPONENTS: i32 = 2;

    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Unit square centered on the origin, two triangles. Every object is this
/// quad scaled by its model matrix.
pub const QUAD: [Vertex; 6] = [
    // triangle 1
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, -0.5),
    Vertex::new(0.5, 0.5),
    // triangle 2
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, 0.5),
    Vertex::new(-0.5, 0.5),
];

/// Colors for game elements
pub mod colors {
    pub const FOREGROUND: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
