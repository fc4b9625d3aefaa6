use thiserror::Error;

use gl_wrapper::attribute::{AttributeBinding, AttributeError, VertexAttribute};
use gl_wrapper::buffer::{BufferUsage, VertexBuffer};
use gl_wrapper::program::{Program, ProgramBuilder, ProgramError};
use gl_wrapper::renderer::{GlRenderer, Primitive};

use crate::shaders::{COLOR_ATTRIBUTE, POSITION_ATTRIBUTE, QUAD_FRAGMENT, QUAD_VERTEX};
use crate::vertex::{rainbow_quad, Vertex};

/// GPU state for the rainbow quad: an active program fed from one interleaved buffer.
pub struct Scene {
    program: Program,
    buffer: VertexBuffer,
    position: AttributeBinding,
    color: AttributeBinding,
    vertices: usize,
}

impl Scene {
    /// Runs the whole setup against the current context.
    ///
    /// The order matters: the program must be linked before attribute locations can be
    /// looked up, and the buffer must exist before the attribute pointers capture it.
    pub fn build(usage: BufferUsage) -> Result<Self, SetupError> {
        let program = ProgramBuilder::new(QUAD_VERTEX, QUAD_FRAGMENT).build()?;
        program.activate();

        let data = rainbow_quad();
        let buffer = VertexBuffer::new(&data, usage);

        let position = AttributeBinding::resolve(
            &program,
            POSITION_ATTRIBUTE,
            VertexAttribute::Vec2,
            Vertex::STRIDE,
            Vertex::POSITION_OFFSET,
        )?;
        position.bind(&buffer);

        let color = AttributeBinding::resolve(
            &program,
            COLOR_ATTRIBUTE,
            VertexAttribute::Vec4,
            Vertex::STRIDE,
            Vertex::COLOR_OFFSET,
        )?;
        color.bind(&buffer);

        log::info!(
            "scene ready: program {}, buffer {} ({} bytes)",
            program.get_id(),
            buffer.id(),
            buffer.byte_len()
        );

        Ok(Self {
            program,
            buffer,
            position,
            color,
            vertices: data.len(),
        })
    }

    /// Clears to black and draws the quad with the already bound state.
    pub fn draw(&self, renderer: &GlRenderer) {
        renderer.clear_color(0.0, 0.0, 0.0);
        renderer.draw(Primitive::TriangleStrip, self.vertices);
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn buffer(&self) -> &VertexBuffer {
        &self.buffer
    }

    pub fn position(&self) -> &AttributeBinding {
        &self.position
    }

    pub fn color(&self) -> &AttributeBinding {
        &self.color
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}
