use gl::types::{GLint, GLsizei, GLuint};
use std::ffi::c_void;
use thiserror::Error;

use crate::buffer::VertexBuffer;
use crate::program::Program;

/// Shape of one float vertex input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexAttribute {
    Vec2,
    Vec4,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec4 => 4,
        }
    }

    pub fn byte_size(&self) -> usize {
        self.size() * std::mem::size_of::<f32>()
    }
}

/// How one named program input reads its components out of an interleaved buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeBinding {
    location: GLuint,
    attribute: VertexAttribute,
    stride: usize,
    offset: usize,
}

impl AttributeBinding {
    pub fn resolve(
        program: &Program,
        name: &str,
        attribute: VertexAttribute,
        stride: usize,
        offset: usize,
    ) -> Result<Self, AttributeError> {
        if offset + attribute.byte_size() > stride {
            return Err(AttributeError::OutOfStride {
                name: name.to_owned(),
                offset,
                stride,
            });
        }

        let location = program
            .attrib_location(name)
            .ok_or_else(|| AttributeError::NotFound(name.to_owned()))?;

        log::debug!("attribute {name:?} resolved to location {location}");

        Ok(Self {
            location,
            attribute,
            stride,
            offset,
        })
    }

    /// Enables the input slot and points it at `buffer`.
    ///
    /// The buffer is bound first since the pointer captures whatever buffer is bound
    /// to `ARRAY_BUFFER` at call time.
    pub fn bind(&self, buffer: &VertexBuffer) {
        unsafe {
            gl::EnableVertexAttribArray(self.location);
            buffer.bind();
            gl::VertexAttribPointer(
                self.location,
                self.attribute.size() as GLint,
                gl::FLOAT,
                gl::FALSE,
                self.stride as GLsizei,
                self.offset as *const c_void,
            );
        }
    }

    pub fn location(&self) -> GLuint {
        self.location
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("program has no active attribute named {0:?}")]
    NotFound(String),
    #[error("attribute {name:?} at offset {offset} does not fit in a stride of {stride} bytes")]
    OutOfStride {
        name: String,
        offset: usize,
        stride: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_counts() {
        assert_eq!(VertexAttribute::Vec2.size(), 2);
        assert_eq!(VertexAttribute::Vec4.size(), 4);
    }

    #[test]
    fn byte_sizes_are_f32_based() {
        assert_eq!(VertexAttribute::Vec2.byte_size(), 8);
        assert_eq!(VertexAttribute::Vec4.byte_size(), 16);
    }
}
