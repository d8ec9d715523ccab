//! WebGL 1 backend for the core `GlContext` seam.
//!
//! The demos' shaders are GLSL ES 1.00, so this wraps a plain `webgl`
//! context rather than `webgl2`.

use shader_lab_core::config::ContextOptions;
use shader_lab_core::gl::{GlContext, ShaderStage};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL,
    WebGlShader, WebGlTexture, WebGlUniformLocation,
};

/// A WebGL rendering context.
///
/// Cloning is cheap; clones refer to the same context.
#[derive(Clone, Debug)]
pub struct WebGlBackend {
    gl: GL,
}

impl WebGlBackend {
    /// Acquire a `webgl` context from `canvas` with the given attributes.
    pub fn from_canvas(canvas: &HtmlCanvasElement, options: &ContextOptions) -> Result<Self, JsValue> {
        let attrs = js_sys::Object::new();
        js_sys::Reflect::set(&attrs, &"antialias".into(), &options.antialias.into())?;
        js_sys::Reflect::set(&attrs, &"alpha".into(), &options.alpha.into())?;
        js_sys::Reflect::set(
            &attrs,
            &"preserveDrawingBuffer".into(),
            &options.preserve_drawing_buffer.into(),
        )?;

        let gl = canvas
            .get_context_with_context_options("webgl", &attrs)?
            .ok_or("Failed to get WebGL context")?
            .dyn_into::<GL>()?;

        Ok(Self { gl })
    }

    /// The underlying context.
    pub fn context(&self) -> &GL {
        &self.gl
    }

    /// Replace the contents of `texture` with a decoded image.
    pub fn upload_image(&self, texture: &WebGlTexture, image: &HtmlImageElement) -> Result<(), JsValue> {
        self.gl.bind_texture(GL::TEXTURE_2D, Some(texture));
        self.gl.tex_image_2d_with_u32_and_u32_and_image(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            image,
        )
    }

    fn set_texture_params(&self) {
        self.gl
            .tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        self.gl
            .tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        self.gl
            .tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        self.gl
            .tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    }
}

impl GlContext for WebGlBackend {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;
    type Texture = WebGlTexture;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        self.gl.create_shader(kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.gl.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.gl.get_program_info_log(program)
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        self.gl.use_program(program);
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn upload_array_buffer(&self, buffer: &WebGlBuffer, data: &[f32]) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        let array = js_sys::Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        self.gl.delete_buffer(Some(buffer));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        // -1 means not found
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn enable_vertex_attrib(&self, location: u32, components: i32) {
        self.gl.enable_vertex_attrib_array(location);
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn uniform1f(&self, location: &WebGlUniformLocation, value: f32) {
        self.gl.uniform1f(Some(location), value);
    }

    fn uniform2fv(&self, location: &WebGlUniformLocation, value: &[f32; 2]) {
        self.gl.uniform2fv_with_f32_array(Some(location), value);
    }

    fn uniform3fv(&self, location: &WebGlUniformLocation, value: &[f32; 3]) {
        self.gl.uniform3fv_with_f32_array(Some(location), value);
    }

    fn uniform4fv(&self, location: &WebGlUniformLocation, value: &[f32; 4]) {
        self.gl.uniform4fv_with_f32_array(Some(location), value);
    }

    fn uniform1i(&self, location: &WebGlUniformLocation, value: i32) {
        self.gl.uniform1i(Some(location), value);
    }

    fn viewport(&self, width: i32, height: i32) {
        self.gl.viewport(0, 0, width, height);
    }

    fn clear(&self, [r, g, b, a]: [f32; 4]) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_triangle_strip(&self, count: i32) {
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, count);
    }

    fn create_texture(&self) -> Option<WebGlTexture> {
        self.gl.create_texture()
    }

    fn upload_texture_rgba(&self, texture: &WebGlTexture, width: i32, height: i32, pixels: &[u8]) {
        self.gl.bind_texture(GL::TEXTURE_2D, Some(texture));
        self.set_texture_params();
        if let Err(e) = self
            .gl
            .tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
                GL::TEXTURE_2D,
                0,
                GL::RGBA as i32,
                width,
                height,
                0,
                GL::RGBA,
                GL::UNSIGNED_BYTE,
                Some(pixels),
            )
        {
            log::error!("Texture upload failed: {e:?}");
        }
    }

    fn bind_texture(&self, unit: u32, texture: Option<&WebGlTexture>) {
        self.gl.active_texture(GL::TEXTURE0 + unit);
        self.gl.bind_texture(GL::TEXTURE_2D, texture);
    }

    fn delete_texture(&self, texture: &WebGlTexture) {
        self.gl.delete_texture(Some(texture));
    }
}
