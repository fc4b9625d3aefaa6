use gl::types::{GLenum, GLint, GLuint};
use std::ffi::{c_char, CString};
use std::fmt;
use thiserror::Error;

const NO_DIAGNOSTIC: &str = "driver reported no diagnostic";

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    /// Compiles both stages and links them.
    ///
    /// On success the intermediate shader objects are detached and deleted, only the
    /// linked program survives. On failure every object created so far is deleted and
    /// the currently active program is left untouched.
    pub fn build(self) -> Result<Program, ProgramError> {
        let vert = Shader::compile(ShaderStage::Vertex, self.vert)?;
        let frag = Shader::compile(ShaderStage::Fragment, self.frag)?;

        let program = Program {
            id: unsafe { gl::CreateProgram() },
        };
        log::debug!("created program {}", program.id);

        unsafe {
            gl::AttachShader(program.id, vert.id);
            gl::AttachShader(program.id, frag.id);
            gl::LinkProgram(program.id);
        }

        let mut success: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.id, gl::LINK_STATUS, &mut success);
        }

        if success != gl::TRUE as GLint {
            let log = unsafe { program_info_log(program.id) };
            return Err(ProgramError::ShaderLink(log));
        }

        unsafe {
            gl::DetachShader(program.id, vert.id);
            gl::DetachShader(program.id, frag.id);
        }

        Ok(program)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("linking error: {0}")]
    ShaderLink(String),
    #[error("{0} shader source contains a NUL byte")]
    NulInSource(ShaderStage),
}

/// Shader object owned only for the duration of a build.
struct Shader {
    id: GLuint,
}

impl Shader {
    fn compile(stage: ShaderStage, src: &str) -> Result<Self, ProgramError> {
        let src = CString::new(src).map_err(|_| ProgramError::NulInSource(stage))?;

        let shader = Self {
            id: unsafe { gl::CreateShader(stage.gl_enum()) },
        };

        let mut success: GLint = 0;

        unsafe {
            gl::ShaderSource(
                shader.id,
                1,
                (&src.as_ptr()) as *const *const c_char,
                std::ptr::null(),
            );
            gl::CompileShader(shader.id);
            gl::GetShaderiv(shader.id, gl::COMPILE_STATUS, &mut success);
        }

        if success != gl::TRUE as GLint {
            let log = unsafe { shader_info_log(shader.id) };
            return Err(ProgramError::ShaderCompile { stage, log });
        }

        log::debug!("compiled {stage} shader {}", shader.id);

        Ok(shader)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Makes this the program used by subsequent draw calls.
    pub fn activate(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    /// Location of a named vertex input, `None` if the linked program has no such
    /// active attribute.
    pub fn attrib_location(&self, name: &str) -> Option<GLuint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };

        GLuint::try_from(location).ok()
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);

    let mut buf = vec![0_u8; len.max(0) as usize];
    if !buf.is_empty() {
        gl::GetShaderInfoLog(
            shader,
            len,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );
    }

    decode_log(&buf)
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);

    let mut buf = vec![0_u8; len.max(0) as usize];
    if !buf.is_empty() {
        gl::GetProgramInfoLog(
            program,
            len,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );
    }

    decode_log(&buf)
}

/// Turns a NUL terminated info log into a trimmed, never empty string.
fn decode_log(buf: &[u8]) -> String {
    let data = buf.split(|b| *b == 0).next().unwrap_or(buf);
    let log = String::from_utf8_lossy(data);
    let log = log.trim();

    if log.is_empty() {
        NO_DIAGNOSTIC.to_owned()
    } else {
        log.to_owned()
    }
}
