//! Shader Compilation Tests
//!
//! Compile, link and program ownership against the recording context.
//! Run with: cargo test -p shader-lab-core --test shader_tests

mod common;

use common::{capture_logs, logged, Call, RecordingGl};
use shader_lab_core::config::{QUAD_COMPONENTS, QUAD_VERTEX_COUNT, QUAD_VERTICES};
use shader_lab_core::gl::ShaderStage;
use shader_lab_core::shader::{
    compile_shader, create_program, create_shader, link_program, ShaderError, ShaderProgram,
    DEFAULT_VERTEX_SHADER,
};

const SOLID_FRAGMENT: &str = "precision mediump float;\nvarying vec2 v_uv;\nuniform float u_time;\nvoid main() { gl_FragColor = vec4(v_uv, u_time, 1.0); }";
const BROKEN_FRAGMENT: &str = "precision mediump float;\nvoid mian() {}";

// =============================================================================
// compile_shader / link_program
// =============================================================================

#[test]
fn test_compile_valid_source() {
    let gl = RecordingGl::new();
    let shader = compile_shader(&gl, ShaderStage::Vertex, DEFAULT_VERTEX_SHADER);
    assert!(shader.is_ok());
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteShader(_))), 0);
}

#[test]
fn test_compile_failure_carries_log_and_deletes_shader() {
    let gl = RecordingGl::new();
    let err = compile_shader(&gl, ShaderStage::Fragment, BROKEN_FRAGMENT).unwrap_err();

    match &err {
        ShaderError::Compile { stage, log } => {
            assert_eq!(*stage, ShaderStage::Fragment);
            assert!(log.contains("main"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("fragment shader compile error"));
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteShader(_))), 1);
}

#[test]
fn test_compile_allocation_failure() {
    let gl = RecordingGl::new();
    gl.refuse_allocation();
    assert_eq!(
        compile_shader(&gl, ShaderStage::Vertex, DEFAULT_VERTEX_SHADER),
        Err(ShaderError::ShaderAllocation(ShaderStage::Vertex))
    );
}

#[test]
fn test_link_failure_deletes_program() {
    let gl = RecordingGl::new();
    let vs = compile_shader(&gl, ShaderStage::Vertex, DEFAULT_VERTEX_SHADER).unwrap();
    let fs = compile_shader(&gl, ShaderStage::Fragment, SOLID_FRAGMENT).unwrap();
    gl.fail_link();

    let err = link_program(&gl, &vs, &fs).unwrap_err();
    assert!(matches!(err, ShaderError::Link(ref log) if log.contains("v_uv")));
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteProgram(_))), 1);
}

#[test]
fn test_link_attaches_both_stages() {
    let gl = RecordingGl::new();
    let vs = compile_shader(&gl, ShaderStage::Vertex, DEFAULT_VERTEX_SHADER).unwrap();
    let fs = compile_shader(&gl, ShaderStage::Fragment, SOLID_FRAGMENT).unwrap();
    let program = link_program(&gl, &vs, &fs).unwrap();

    let calls = gl.calls();
    assert!(calls.contains(&Call::AttachShader(program, vs)));
    assert!(calls.contains(&Call::AttachShader(program, fs)));
    assert!(calls.contains(&Call::LinkProgram(program)));
}

// =============================================================================
// Fail-soft wrappers
// =============================================================================

#[test]
fn test_create_shader_logs_and_returns_none() {
    capture_logs();
    let gl = RecordingGl::new();
    assert!(create_shader(&gl, ShaderStage::Fragment, BROKEN_FRAGMENT).is_none());
    assert!(!logged("Shader compile error: fragment shader compile error").is_empty());
}

#[test]
fn test_create_program_logs_and_returns_none() {
    capture_logs();
    let gl = RecordingGl::new();
    let vs = create_shader(&gl, ShaderStage::Vertex, DEFAULT_VERTEX_SHADER).unwrap();
    let fs = create_shader(&gl, ShaderStage::Fragment, SOLID_FRAGMENT).unwrap();
    gl.fail_link();
    assert!(create_program(&gl, &vs, &fs).is_none());
    assert!(!logged("Program link error: program link error").is_empty());
}

// =============================================================================
// ShaderProgram
// =============================================================================

#[test]
fn test_program_sets_up_quad_and_uses_program() {
    let gl = RecordingGl::new();
    let program = ShaderProgram::new(gl.clone(), DEFAULT_VERTEX_SHADER, SOLID_FRAGMENT).unwrap();

    let calls = gl.calls();
    assert_eq!(gl.count(|c| matches!(c, Call::CreateProgram(_))), 1);
    assert_eq!(gl.count(|c| matches!(c, Call::CreateBuffer(_))), 1);
    assert!(calls
        .iter()
        .any(|c| matches!(c, Call::UploadArrayBuffer(_, data) if data[..] == QUAD_VERTICES[..])));
    assert!(calls.contains(&Call::EnableVertexAttrib(0, QUAD_COMPONENTS)));
    assert_eq!(calls.last(), Some(&Call::UseProgram(Some(*program.program()))));
}

#[test]
fn test_program_draws_triangle_strip() {
    let gl = RecordingGl::new();
    let program = ShaderProgram::new(gl.clone(), DEFAULT_VERTEX_SHADER, SOLID_FRAGMENT).unwrap();
    gl.clear_calls();

    program.begin_frame(640, 256);
    program.draw();

    let calls = gl.calls();
    assert_eq!(calls[0], Call::Viewport(640, 256));
    assert!(matches!(calls[1], Call::Clear(_)));
    assert_eq!(calls.last(), Some(&Call::DrawTriangleStrip(QUAD_VERTEX_COUNT)));
}

#[test]
fn test_program_drop_releases_each_object_once() {
    let gl = RecordingGl::new();
    let program = ShaderProgram::new(gl.clone(), DEFAULT_VERTEX_SHADER, SOLID_FRAGMENT).unwrap();
    drop(program);

    assert_eq!(gl.count(|c| matches!(c, Call::DeleteProgram(_))), 1);
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteBuffer(_))), 1);
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteShader(_))), 2);
}

#[test]
fn test_fragment_failure_releases_vertex_shader() {
    let gl = RecordingGl::new();
    assert!(ShaderProgram::new(gl.clone(), DEFAULT_VERTEX_SHADER, BROKEN_FRAGMENT).is_none());

    // Broken fragment deleted by compile_shader, vertex by the constructor.
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteShader(_))), 2);
    assert_eq!(gl.count(|c| matches!(c, Call::CreateProgram(_))), 0);
    assert_eq!(gl.count(|c| matches!(c, Call::CreateBuffer(_))), 0);
}

#[test]
fn test_link_failure_releases_everything() {
    let gl = RecordingGl::new();
    gl.fail_link();
    assert!(ShaderProgram::new(gl.clone(), DEFAULT_VERTEX_SHADER, SOLID_FRAGMENT).is_none());

    assert_eq!(gl.count(|c| matches!(c, Call::DeleteShader(_))), 2);
    assert_eq!(gl.count(|c| matches!(c, Call::DeleteProgram(_))), 1);
    assert_eq!(gl.count(|c| matches!(c, Call::DrawTriangleStrip(_))), 0);
}

#[test]
fn test_missing_position_attribute_still_yields_program() {
    capture_logs();
    let gl = RecordingGl::new();
    let vertex = "void main() { gl_Position = vec4(0.0); }";
    assert!(ShaderProgram::new(gl.clone(), vertex, SOLID_FRAGMENT).is_some());
    assert_eq!(gl.count(|c| matches!(c, Call::EnableVertexAttrib(..))), 0);
    assert!(!logged("a_position").is_empty());
}
