use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use thiserror::Error;
use winit::dpi::{PhysicalSize, Size};
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{Window, WindowBuilder};

use gl_wrapper::renderer::GlRenderer;

use crate::config::WindowSettings;

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, ContextError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(ContextError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(ContextError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }

    /// Resizes the surface, zero sized requests (minimized windows) are ignored.
    pub fn resize(&self, context: &PossiblyCurrentContext, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(context, w, h);
        }
    }
}

/// Opens a double buffered RGBA window and makes a GL 2.1 context current on it.
///
/// GL function pointers are loaded before returning, so any `gl_wrapper` call is
/// valid afterwards.
///
/// # Panics
///
/// Panics if the display reports a config list with no entries at all. The
/// config picker of `glutin_winit::DisplayBuilder` must return a `Config`, so
/// this cannot be surfaced as a `ContextError`. Errors from the lookup itself
/// are returned as `ContextError::Display`.
pub fn create_gl_window<T>(
    target: &EventLoopWindowTarget<T>,
    settings: &WindowSettings,
) -> Result<(GlWindow, PossiblyCurrentContext), ContextError> {
    let window_builder = WindowBuilder::new()
        .with_inner_size(Size::Physical(PhysicalSize::new(
            settings.width,
            settings.height,
        )))
        .with_title(&settings.title)
        .with_visible(settings.visible);
    let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
    let template = ConfigTemplateBuilder::new().with_alpha_size(8);

    let (window, gl_config) = display_builder
        .build(target, template, |configs| {
            configs
                .reduce(|best, config| {
                    if config.num_samples() < best.num_samples() {
                        config
                    } else {
                        best
                    }
                })
                .expect("display returned an empty config list")
        })
        .map_err(|e| ContextError::Display(e.to_string()))?;

    let window = window.ok_or(ContextError::NoWindow)?;
    let handle = Some(window.raw_window_handle());
    let gl_display = gl_config.display();

    let context_attr = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(2, 1))))
        .build(handle);

    let gl_window = GlWindow::new(window, &gl_config)?;

    let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
        .make_current(&gl_window.surface)?;

    gl::load_with(|s| match CString::new(s) {
        Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
        Err(_) => std::ptr::null(),
    });

    log::info!(
        "created {}x{} window with OpenGL {}",
        settings.width,
        settings.height,
        GlRenderer::new().version()
    );

    Ok((gl_window, gl_context))
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("could not open display: {0}")]
    Display(String),
    #[error("display builder did not create a window")]
    NoWindow,
    #[error("window has a zero sized surface")]
    ZeroSize,
    #[error(transparent)]
    Gl(#[from] glutin::error::Error),
}
