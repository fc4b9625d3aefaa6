use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gl_wrapper::buffer::BufferUsage;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,
    /// Initial window height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,
    /// Usage hint for the vertex buffer
    #[arg(long, value_enum, default_value_t = UsageArg::Dynamic)]
    pub usage: UsageArg,
    /// Render a single frame offscreen, save it as PNG and exit
    #[arg(long)]
    pub capture: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum UsageArg {
    Static,
    Dynamic,
}

impl From<UsageArg> for BufferUsage {
    fn from(u: UsageArg) -> Self {
        match u {
            UsageArg::Static => Self::Static,
            UsageArg::Dynamic => Self::Dynamic,
        }
    }
}
