//! GPU call seam.
//!
//! The harness never calls WebGL directly. It talks to a [`GlContext`],
//! which the browser crate implements over `WebGlRenderingContext` and the
//! tests implement with a recording mock.

use core::fmt;

/// Programmable pipeline stage a shader object belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex stage
    Vertex,
    /// Per-pixel stage
    Fragment,
}

impl ShaderStage {
    /// Lower-case stage name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of WebGL 1 the shader harness uses.
///
/// Handles are opaque; a context only ever receives handles it created.
/// Calls mirror the WebGL API closely so implementations stay thin.
pub trait GlContext {
    /// Compiled shader object
    type Shader;
    /// Linked program object
    type Program;
    /// Vertex buffer object
    type Buffer;
    /// Resolved uniform location within one program
    type UniformLocation;
    /// 2D texture object
    type Texture;

    /// Allocate a shader object for `stage`.
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    /// Replace the source text of `shader`.
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    /// Compile `shader` from its current source.
    fn compile_shader(&self, shader: &Self::Shader);
    /// Query `COMPILE_STATUS`.
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    /// Driver-reported compile log.
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    /// Release a shader object.
    fn delete_shader(&self, shader: &Self::Shader);

    /// Allocate a program object.
    fn create_program(&self) -> Option<Self::Program>;
    /// Attach a compiled shader to `program`.
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    /// Link the attached shaders.
    fn link_program(&self, program: &Self::Program);
    /// Query `LINK_STATUS`.
    fn program_linked(&self, program: &Self::Program) -> bool;
    /// Driver-reported link log.
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    /// Make `program` current (or none).
    fn use_program(&self, program: Option<&Self::Program>);
    /// Release a program object.
    fn delete_program(&self, program: &Self::Program);

    /// Allocate a buffer object.
    fn create_buffer(&self) -> Option<Self::Buffer>;
    /// Bind `buffer` to `ARRAY_BUFFER` and fill it with `data` (`STATIC_DRAW`).
    fn upload_array_buffer(&self, buffer: &Self::Buffer, data: &[f32]);
    /// Release a buffer object.
    fn delete_buffer(&self, buffer: &Self::Buffer);

    /// Location of a vertex attribute, `None` when the program has no such input.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    /// Enable `location` and point it at the bound buffer as tightly packed floats.
    fn enable_vertex_attrib(&self, location: u32, components: i32);

    /// Location of a uniform, `None` when absent or optimized out.
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    /// `uniform1f`
    fn uniform1f(&self, location: &Self::UniformLocation, value: f32);
    /// `uniform2fv`
    fn uniform2fv(&self, location: &Self::UniformLocation, value: &[f32; 2]);
    /// `uniform3fv`
    fn uniform3fv(&self, location: &Self::UniformLocation, value: &[f32; 3]);
    /// `uniform4fv`
    fn uniform4fv(&self, location: &Self::UniformLocation, value: &[f32; 4]);
    /// `uniform1i`
    fn uniform1i(&self, location: &Self::UniformLocation, value: i32);

    /// Set the viewport to `width` x `height` at the origin.
    fn viewport(&self, width: i32, height: i32);
    /// Clear the colour buffer to `rgba`.
    fn clear(&self, rgba: [f32; 4]);
    /// Draw `count` vertices from the bound buffer as a triangle strip.
    fn draw_triangle_strip(&self, count: i32);

    /// Allocate a texture object.
    fn create_texture(&self) -> Option<Self::Texture>;
    /// Upload tightly packed RGBA8 pixels with clamp-to-edge, linear filtering.
    fn upload_texture_rgba(&self, texture: &Self::Texture, width: i32, height: i32, pixels: &[u8]);
    /// Bind `texture` to `TEXTURE_2D` on texture unit `unit`.
    fn bind_texture(&self, unit: u32, texture: Option<&Self::Texture>);
    /// Release a texture object.
    fn delete_texture(&self, texture: &Self::Texture);
}
