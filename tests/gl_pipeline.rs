//! Checks that need a live GL context.
//!
//! Runs without the libtest harness so the event loop is created on the main thread,
//! and only once per process. Skips when no display is reachable, unless
//! `RAINBOW_QUAD_REQUIRE_GL` is set, in which case a missing context fails the run.

use std::panic::{self, AssertUnwindSafe};

use gl::types::GLint;
use winit::event_loop::EventLoop;

use gl_wrapper::attribute::{AttributeBinding, AttributeError, VertexAttribute};
use gl_wrapper::buffer::BufferUsage;
use gl_wrapper::program::{ProgramBuilder, ProgramError, ShaderStage};
use gl_wrapper::renderer::GlRenderer;

use rainbow_quad::capture::{self, Corners};
use rainbow_quad::config::WindowSettings;
use rainbow_quad::scene::Scene;
use rainbow_quad::shaders::{QUAD_FRAGMENT, QUAD_VERTEX};
use rainbow_quad::vertex::Vertex;
use rainbow_quad::window;

const BROKEN_VERTEX: &str = "
attribute vec2 position;
void main()
{
    gl_Position = vec4(position, 0.0, 1.0)
}
";

const BROKEN_FRAGMENT: &str = "
void main()
{
    gl_FragColor = ;
}
";

// Reads a varying the vertex stage never writes.
const UNMATCHED_FRAGMENT: &str = "
varying vec4 v_missing;

void main()
{
    gl_FragColor = v_missing;
}
";

fn main() {
    run("require_gl_flag", require_gl_flag);

    if !display_available() {
        return skip("no display available");
    }

    let event_loop = match panic::catch_unwind(EventLoop::new) {
        Ok(event_loop) => event_loop,
        Err(_) => return skip("could not create an event loop"),
    };

    let settings = WindowSettings {
        width: 64,
        height: 64,
        visible: false,
        ..Default::default()
    };

    let context = panic::catch_unwind(AssertUnwindSafe(|| {
        window::create_gl_window(&event_loop, &settings)
    }));
    let (_gl_window, _gl_context) = match context {
        Ok(Ok(context)) => context,
        Ok(Err(e)) => return skip(&format!("no GL context ({e})")),
        Err(_) => return skip("no GL context"),
    };

    run("vertex_compile_error", vertex_compile_error);
    run("fragment_compile_error", fragment_compile_error);
    run("failed_link_keeps_active_program", failed_link_keeps_active_program);
    run("valid_program_links", valid_program_links);
    run("unknown_attribute_is_not_found", unknown_attribute_is_not_found);
    run("attribute_past_stride_is_rejected", attribute_past_stride_is_rejected);
    run("scene_binds_both_attributes", scene_binds_both_attributes);
    run("rendered_corners", rendered_corners);
}

fn run(name: &str, test: fn()) {
    test();
    println!("test {name} ... ok");
}

fn skip(reason: &str) {
    if gl_required(std::env::var_os("RAINBOW_QUAD_REQUIRE_GL").as_deref()) {
        panic!("gl_pipeline: {reason}, but RAINBOW_QUAD_REQUIRE_GL is set");
    }

    println!("gl_pipeline: {reason}, skipping");
}

/// Any value other than empty or `0` makes a missing context fatal.
fn gl_required(var: Option<&std::ffi::OsStr>) -> bool {
    matches!(var, Some(v) if !v.is_empty() && v != "0")
}

fn require_gl_flag() {
    use std::ffi::OsStr;

    assert!(!gl_required(None));
    assert!(!gl_required(Some(OsStr::new(""))));
    assert!(!gl_required(Some(OsStr::new("0"))));
    assert!(gl_required(Some(OsStr::new("1"))));
    assert!(gl_required(Some(OsStr::new("yes"))));
}

fn display_available() -> bool {
    if cfg!(all(unix, not(target_os = "macos"))) {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

fn current_program() -> GLint {
    let mut id = 0;
    unsafe { gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut id) };
    id
}

fn attrib_enabled(location: u32) -> bool {
    let mut enabled = 0;
    unsafe { gl::GetVertexAttribiv(location, gl::VERTEX_ATTRIB_ARRAY_ENABLED, &mut enabled) };
    enabled != 0
}

fn vertex_compile_error() {
    match ProgramBuilder::new(BROKEN_VERTEX, QUAD_FRAGMENT).build() {
        Err(ProgramError::ShaderCompile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Vertex);
            assert!(!log.is_empty());
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("broken vertex shader compiled"),
    }
}

fn fragment_compile_error() {
    match ProgramBuilder::new(QUAD_VERTEX, BROKEN_FRAGMENT).build() {
        Err(ProgramError::ShaderCompile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(!log.is_empty());
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("broken fragment shader compiled"),
    }
}

fn failed_link_keeps_active_program() {
    let active = ProgramBuilder::new(QUAD_VERTEX, QUAD_FRAGMENT)
        .build()
        .unwrap();
    active.activate();
    assert_eq!(current_program(), active.get_id() as GLint);

    match ProgramBuilder::new(QUAD_VERTEX, UNMATCHED_FRAGMENT).build() {
        Err(ProgramError::ShaderLink(log)) => assert!(!log.is_empty()),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("unmatched varying linked"),
    }

    assert_eq!(current_program(), active.get_id() as GLint);

    unsafe { gl::UseProgram(0) };
}

fn valid_program_links() {
    let program = ProgramBuilder::new(QUAD_VERTEX, QUAD_FRAGMENT)
        .build()
        .unwrap();

    assert!(program.attrib_location("position").is_some());
    assert!(program.attrib_location("color").is_some());
    assert!(program.attrib_location("normal").is_none());

    program.activate();
    assert_eq!(current_program(), program.get_id() as GLint);

    unsafe { gl::UseProgram(0) };
}

fn unknown_attribute_is_not_found() {
    let program = ProgramBuilder::new(QUAD_VERTEX, QUAD_FRAGMENT)
        .build()
        .unwrap();

    let res = AttributeBinding::resolve(
        &program,
        "normal",
        VertexAttribute::Vec2,
        Vertex::STRIDE,
        0,
    );

    match res {
        Err(AttributeError::NotFound(name)) => assert_eq!(name, "normal"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

fn attribute_past_stride_is_rejected() {
    let program = ProgramBuilder::new(QUAD_VERTEX, QUAD_FRAGMENT)
        .build()
        .unwrap();

    // 16 + 4 floats ends 8 bytes past a 24 byte vertex.
    let res = AttributeBinding::resolve(&program, "color", VertexAttribute::Vec4, 24, 16);

    match res {
        Err(AttributeError::OutOfStride { name, offset, stride }) => {
            assert_eq!(name, "color");
            assert_eq!((offset, stride), (16, 24));
        }
        other => panic!("expected OutOfStride, got {other:?}"),
    }
}

fn scene_binds_both_attributes() {
    let scene = Scene::build(BufferUsage::Static).unwrap();

    assert_eq!(current_program(), scene.program().get_id() as GLint);
    assert_eq!(scene.buffer().byte_len(), 4 * Vertex::STRIDE);

    let position = scene.position();
    let color = scene.color();
    assert_ne!(position.location(), color.location());
    assert_eq!((position.stride(), position.offset()), (24, 0));
    assert_eq!((color.stride(), color.offset()), (24, 8));
    assert!(attrib_enabled(position.location()));
    assert!(attrib_enabled(color.location()));
}

fn rendered_corners() {
    let renderer = GlRenderer::new();
    let scene = Scene::build(BufferUsage::Dynamic).unwrap();

    let frame = capture::render_offscreen(&scene, &renderer, 64, 64).unwrap();
    let corners = frame.corners().unwrap();

    assert!(
        corners.matches(&Corners::EXPECTED, 8),
        "corners were {corners:?}"
    );
}
