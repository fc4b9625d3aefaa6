pub mod attribute;
pub mod buffer;
pub mod framebuffer;
pub mod program;
pub mod renderer;
pub mod texture;
