use gl::types::{GLenum, GLsizeiptr, GLuint};
use std::ffi::c_void;

use bytemuck::Pod;

/// GPU side copy of a vertex array, bound to `ARRAY_BUFFER`.
pub struct VertexBuffer {
    id: GLuint,
    len: usize,
}

impl VertexBuffer {
    /// Allocates a buffer sized to the exact byte length of `data` and uploads it.
    ///
    /// The buffer stays bound to `ARRAY_BUFFER` afterwards.
    pub fn new<T: Pod>(data: &[T], usage: BufferUsage) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                usage.gl_enum(),
            );
        }

        log::debug!("uploaded {} bytes into buffer {id} ({usage:?})", bytes.len());

        Self {
            id,
            len: bytes.len(),
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Size of the uploaded data in bytes.
    pub fn byte_len(&self) -> usize {
        self.len
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BufferUsage {
    Static,
    #[default]
    Dynamic,
}

impl BufferUsage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            BufferUsage::Static => gl::STATIC_DRAW,
            BufferUsage::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}
