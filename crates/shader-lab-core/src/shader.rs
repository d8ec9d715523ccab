//! Shader compilation and program ownership.
//!
//! `compile_shader` and `link_program` report failures as [`ShaderError`].
//! The `create_*` wrappers are fail-soft: they log the driver message and
//! hand back `None`, and callers bail out of setup when they see it.

use thiserror::Error;

use crate::config::{QUAD_VERTEX_COUNT, CLEAR_COLOR};
use crate::gl::{GlContext, ShaderStage};
use crate::quad::setup_fullscreen_quad;

/// Vertex shader shared by every demo: passes the quad through and derives
/// `v_uv` in `[0, 1]` from the clip-space position.
pub const DEFAULT_VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
varying vec2 v_uv;

void main() {
    v_uv = a_position * 0.5 + 0.5;
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

/// Shader setup failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The context refused to allocate a shader object.
    #[error("failed to create {0} shader")]
    ShaderAllocation(ShaderStage),
    /// The driver rejected the source.
    #[error("{stage} shader compile error: {log}")]
    Compile {
        /// Stage that failed
        stage: ShaderStage,
        /// Driver info log
        log: String,
    },
    /// The context refused to allocate a program object.
    #[error("failed to create program")]
    ProgramAllocation,
    /// The compiled stages could not be linked.
    #[error("program link error: {0}")]
    Link(String),
}

/// Compile `source` for `stage`. The shader object is deleted on failure.
pub fn compile_shader<G: GlContext>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(ShaderError::ShaderAllocation(stage))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compiled(&shader) {
        Ok(shader)
    } else {
        let log = gl
            .shader_info_log(&shader)
            .unwrap_or_else(|| "Unknown shader error".to_string());
        gl.delete_shader(&shader);
        Err(ShaderError::Compile { stage, log })
    }
}

/// Link a vertex and fragment shader. The program object is deleted on failure.
pub fn link_program<G: GlContext>(
    gl: &G,
    vertex: &G::Shader,
    fragment: &G::Shader,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().ok_or(ShaderError::ProgramAllocation)?;

    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl.program_linked(&program) {
        Ok(program)
    } else {
        let log = gl
            .program_info_log(&program)
            .unwrap_or_else(|| "Unknown linker error".to_string());
        gl.delete_program(&program);
        Err(ShaderError::Link(log))
    }
}

/// Fail-soft [`compile_shader`]: logs the error and yields `None`.
pub fn create_shader<G: GlContext>(gl: &G, stage: ShaderStage, source: &str) -> Option<G::Shader> {
    compile_shader(gl, stage, source)
        .map_err(|e| log::error!("Shader compile error: {e}"))
        .ok()
}

/// Fail-soft [`link_program`]: logs the error and yields `None`.
pub fn create_program<G: GlContext>(
    gl: &G,
    vertex: &G::Shader,
    fragment: &G::Shader,
) -> Option<G::Program> {
    link_program(gl, vertex, fragment)
        .map_err(|e| log::error!("Program link error: {e}"))
        .ok()
}

/// A linked program together with its shader stages and quad buffer.
///
/// Dropping it deletes every GPU object it owns, each exactly once.
pub struct ShaderProgram<G: GlContext> {
    gl: G,
    vertex: G::Shader,
    fragment: G::Shader,
    program: G::Program,
    quad: Option<G::Buffer>,
}

impl<G: GlContext> ShaderProgram<G> {
    /// Compile both stages, link them and set up the full-screen quad.
    ///
    /// Returns `None` (after logging) when any step fails; objects created
    /// before the failing step are released.
    pub fn new(gl: G, vertex_source: &str, fragment_source: &str) -> Option<Self> {
        let vertex = create_shader(&gl, ShaderStage::Vertex, vertex_source)?;
        let Some(fragment) = create_shader(&gl, ShaderStage::Fragment, fragment_source) else {
            gl.delete_shader(&vertex);
            return None;
        };
        let Some(program) = create_program(&gl, &vertex, &fragment) else {
            gl.delete_shader(&vertex);
            gl.delete_shader(&fragment);
            return None;
        };

        let quad = setup_fullscreen_quad(&gl, &program);
        gl.use_program(Some(&program));

        Some(Self {
            gl,
            vertex,
            fragment,
            program,
            quad,
        })
    }

    /// The context this program lives in.
    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// The linked program handle.
    pub fn program(&self) -> &G::Program {
        &self.program
    }

    /// Clear to the default colour and make this program current.
    pub fn begin_frame(&self, width: i32, height: i32) {
        self.gl.viewport(width, height);
        self.gl.clear(CLEAR_COLOR);
        self.gl.use_program(Some(&self.program));
    }

    /// Draw the full-screen quad with the current uniforms.
    pub fn draw(&self) {
        self.gl.draw_triangle_strip(QUAD_VERTEX_COUNT);
    }
}

impl<G: GlContext> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(&self.vertex);
        self.gl.delete_shader(&self.fragment);
        self.gl.delete_program(&self.program);
        if let Some(buffer) = self.quad.take() {
            self.gl.delete_buffer(&buffer);
        }
    }
}
