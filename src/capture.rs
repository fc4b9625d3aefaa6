use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use gl_wrapper::framebuffer::{FrameBuffer, TargetError};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::Texture2D;

use crate::scene::Scene;

pub type Rgba8 = [u8; 4];

/// Renders one frame of `scene` into an offscreen RGBA8 target and reads it back.
///
/// Leaves the default framebuffer bound and the viewport at `width`×`height`.
pub fn render_offscreen(
    scene: &Scene,
    renderer: &GlRenderer,
    width: u32,
    height: u32,
) -> Result<Capture, CaptureError> {
    if width == 0 || height == 0 {
        return Err(CaptureError::ZeroSize);
    }

    let target = FrameBuffer::from_texture(Texture2D::empty(width, height))?;

    target.bind();
    renderer.resize(width, height);
    scene.draw(renderer);
    let pixels = renderer.read_pixels(width, height);
    FrameBuffer::bind_default();

    Ok(Capture::from_bottom_up(width, height, pixels))
}

/// RGBA8 image with rows stored top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Capture {
    /// Takes rows in GL readback order (bottom row first).
    pub fn from_bottom_up(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let row = width as usize * 4;
        let flipped = if row == 0 {
            Vec::new()
        } else {
            pixels.chunks_exact(row).rev().flatten().copied().collect()
        };

        Self {
            width,
            height,
            pixels: flipped,
        }
    }

    /// Pixel at column `x`, row `y` counted from the top.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels.get(i..i + 4)?.try_into().ok()
    }

    pub fn corners(&self) -> Option<Corners> {
        let (right, bottom) = (self.width.checked_sub(1)?, self.height.checked_sub(1)?);

        Some(Corners {
            top_left: self.pixel(0, 0)?,
            top_right: self.pixel(right, 0)?,
            bottom_left: self.pixel(0, bottom)?,
            bottom_right: self.pixel(right, bottom)?,
        })
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), CaptureError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Corners {
    pub top_left: Rgba8,
    pub top_right: Rgba8,
    pub bottom_left: Rgba8,
    pub bottom_right: Rgba8,
}

impl Corners {
    /// Vertex colors of the rainbow quad.
    pub const EXPECTED: Corners = Corners {
        top_left: [0, 255, 0, 255],
        top_right: [255, 255, 0, 255],
        bottom_left: [255, 0, 0, 255],
        bottom_right: [0, 0, 255, 255],
    };

    /// True when every channel of every corner is within `tolerance` of `expected`.
    pub fn matches(&self, expected: &Corners, tolerance: u8) -> bool {
        let close = |a: &Rgba8, b: &Rgba8| {
            a.iter()
                .zip(b)
                .all(|(a, b)| a.abs_diff(*b) <= tolerance)
        };

        close(&self.top_left, &expected.top_left)
            && close(&self.top_right, &expected.top_right)
            && close(&self.bottom_left, &expected.bottom_left)
            && close(&self.bottom_right, &expected.bottom_right)
    }
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("cannot capture a zero sized frame")]
    ZeroSize,
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error("could not write capture: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode capture: {0}")]
    Encoding(#[from] png::EncodingError),
}
