use gl::types::{GLenum, GLuint};
use thiserror::Error;

use crate::texture::Texture2D;

/// Offscreen framebuffer with a single color attachment.
pub struct FrameBuffer {
    id: GLuint,
    // Kept alive as long as it is attached.
    _color: Texture2D,
}

impl FrameBuffer {
    pub fn from_texture(color: Texture2D) -> Result<Self, TargetError> {
        let mut id = 0;

        let status = unsafe {
            gl::GenFramebuffers(1, &mut id);
            gl::BindFramebuffer(gl::FRAMEBUFFER, id);

            gl::FramebufferTexture2D(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0,
                gl::TEXTURE_2D,
                color.id,
                0,
            );

            let status = gl::CheckFramebufferStatus(gl::FRAMEBUFFER);
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
            status
        };

        let fb = Self { id, _color: color };

        if status != gl::FRAMEBUFFER_COMPLETE {
            return Err(TargetError::Incomplete(status));
        }

        Ok(fb)
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.id);
        }
    }

    pub fn bind_default() {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        }
    }

}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.id);
        }
    }
}

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("framebuffer incomplete (status {0:#x})")]
    Incomplete(GLenum),
}
