use std::path::Path;

use glutin::context::PossiblyCurrentContext;
use glutin::prelude::*;
use thiserror::Error;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use gl_wrapper::renderer::GlRenderer;

use rainbow_quad::capture::{self, CaptureError, Corners};
use rainbow_quad::config::WindowSettings;
use rainbow_quad::input::{self, KeyAction};
use rainbow_quad::scene::{Scene, SetupError};
use rainbow_quad::window::{self, ContextError, GlWindow};

use crate::args::Args;

/// Per channel slack allowed when checking captured corners.
const CORNER_TOLERANCE: u8 = 8;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    gl_renderer: GlRenderer,
    scene: Scene,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let settings = WindowSettings {
            width: args.width,
            height: args.height,
            visible: args.capture.is_none(),
            ..Default::default()
        };

        let event_loop = EventLoop::new();
        let (gl_window, gl_context) = window::create_gl_window(&event_loop, &settings)?;

        let gl_renderer = GlRenderer::new();
        let scene = Scene::build(args.usage.into())?;

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            gl_renderer,
            scene,
        })
    }

    /// Renders one frame offscreen and writes it to `path`.
    ///
    /// Returns whether the corner pixels carry the expected vertex colors.
    pub fn capture(&self, path: &Path) -> Result<bool, AppError> {
        let (width, height): (u32, u32) = self.gl_window.window.inner_size().into();

        let frame = capture::render_offscreen(&self.scene, &self.gl_renderer, width, height)?;
        frame.write_png(path)?;
        log::info!("wrote {width}x{height} frame to {}", path.display());

        let Some(corners) = frame.corners() else {
            return Ok(false);
        };
        log::info!("corners: {corners:?}");

        let matches = corners.matches(&Corners::EXPECTED, CORNER_TOLERANCE);
        if !matches {
            log::error!("corner colors differ from {:?}", Corners::EXPECTED);
        }

        Ok(matches)
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            gl_renderer,
            scene,
        } = self;

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        gl_window.resize(&gl_context, size.width, size.height);
                        gl_renderer.resize(size.width, size.height);
                        gl_window.window.request_redraw();
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input::action_for_key(input.state, input.virtual_keycode)
                            == KeyAction::Quit
                        {
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::ReceivedCharacter(c) => {
                        if input::action_for_char(c) == KeyAction::Quit {
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                Event::RedrawRequested(_) => {
                    scene.draw(&gl_renderer);
                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        log::error!("could not present frame: {e}");
                        control_flow.set_exit_with_code(1);
                    }
                }
                Event::LoopDestroyed => {
                    log::info!("exiting");
                }
                _ => (),
            }
        })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
}
