//! GLSL 1.10 sources compiled at startup.

pub const QUAD_VERTEX: &str = include_str!("gl_shaders/quad.vert.glsl");
pub const QUAD_FRAGMENT: &str = include_str!("gl_shaders/quad.frag.glsl");

/// Names of the vertex inputs declared by [`QUAD_VERTEX`].
pub const POSITION_ATTRIBUTE: &str = "position";
pub const COLOR_ATTRIBUTE: &str = "color";
