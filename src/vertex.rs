use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    pub const POSITION_OFFSET: usize = std::mem::offset_of!(Vertex, position);
    pub const COLOR_OFFSET: usize = std::mem::offset_of!(Vertex, color);

    pub const fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

// Triangle strip winding depends on this order.
#[rustfmt::skip]
pub const QUAD: [Vertex; 4] = [
    Vertex::new([-1.0,  1.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([ 1.0,  1.0], [1.0, 1.0, 0.0, 1.0]),
    Vertex::new([-1.0, -1.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([ 1.0, -1.0], [0.0, 0.0, 1.0, 1.0]),
];

/// Full screen quad in NDC: green top-left, yellow top-right, red bottom-left and
/// blue bottom-right.
pub fn rainbow_quad() -> [Vertex; 4] {
    QUAD
}
