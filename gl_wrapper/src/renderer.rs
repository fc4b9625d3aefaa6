use gl::types::{GLenum, GLint, GLsizei};
use std::ffi::{c_char, c_void, CStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    TriangleStrip,
}

impl Primitive {
    fn gl_enum(self) -> GLenum {
        match self {
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

/// Issues draw calls against whatever program and attributes are currently bound.
pub struct GlRenderer;

impl GlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, primitive: Primitive, vertices: usize) {
        unsafe {
            gl::DrawArrays(primitive.gl_enum(), 0, vertices as GLsizei);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Reads back RGBA8 pixels of the bound framebuffer, rows bottom to top.
    pub fn read_pixels(&self, width: u32, height: u32) -> Vec<u8> {
        let mut pixels = vec![0_u8; width as usize * height as usize * 4];

        unsafe {
            gl::Finish();
            gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
            gl::ReadPixels(
                0,
                0,
                width as GLint,
                height as GLint,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_mut_ptr() as *mut c_void,
            );
        }

        pixels
    }

    /// `GL_VERSION` of the current context.
    pub fn version(&self) -> String {
        unsafe {
            let ptr = gl::GetString(gl::VERSION);
            if ptr.is_null() {
                return String::from("unknown");
            }

            CStr::from_ptr(ptr as *const c_char)
                .to_string_lossy()
                .into_owned()
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
