//! Test doubles shared by the integration tests.
//!
//! `RecordingGl` records every GPU call. Uniform and attribute locations are
//! derived from the `uniform` / `attribute` declarations in the attached
//! shader sources, so a name missing from the GLSL behaves like an
//! optimized-out or misspelled uniform.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Mutex, Once};

use shader_lab_core::gl::{GlContext, ShaderStage};
use shader_lab_core::render_loop::FrameScheduler;

/// One recorded GPU call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    UploadArrayBuffer(u32, Vec<f32>),
    DeleteBuffer(u32),
    EnableVertexAttrib(u32, i32),
    Uniform1f(String, f32),
    Uniform2fv(String, [f32; 2]),
    Uniform3fv(String, [f32; 3]),
    Uniform4fv(String, [f32; 4]),
    Uniform1i(String, i32),
    Viewport(i32, i32),
    Clear([f32; 4]),
    DrawTriangleStrip(i32),
    CreateTexture(u32),
    UploadTexture(u32, i32, i32, Vec<u8>),
    BindTexture(u32, Option<u32>),
    DeleteTexture(u32),
}

impl Call {
    pub fn is_uniform_upload(&self) -> bool {
        matches!(
            self,
            Call::Uniform1f(..)
                | Call::Uniform2fv(..)
                | Call::Uniform3fv(..)
                | Call::Uniform4fv(..)
                | Call::Uniform1i(..)
        )
    }

    pub fn uniform_name(&self) -> Option<&str> {
        match self {
            Call::Uniform1f(n, _)
            | Call::Uniform2fv(n, _)
            | Call::Uniform3fv(n, _)
            | Call::Uniform4fv(n, _)
            | Call::Uniform1i(n, _) => Some(n),
            _ => None,
        }
    }
}

#[derive(Default)]
struct State {
    next_id: u32,
    calls: Vec<Call>,
    sources: HashMap<u32, String>,
    attached: HashMap<u32, Vec<u32>>,
    linked: HashMap<u32, bool>,
    fail_link: bool,
    refuse_allocation: bool,
    location_lookups: usize,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn program_source(&self, program: u32) -> String {
        self.attached
            .get(&program)
            .into_iter()
            .flatten()
            .filter_map(|shader| self.sources.get(shader))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn declares(source: &str, qualifier: &str, name: &str) -> bool {
    source.lines().any(|line| {
        let mut words = line.split_whitespace();
        words.next() == Some(qualifier)
            && words
                .nth(1)
                .map(|n| n.trim_end_matches(';') == name)
                .unwrap_or(false)
    })
}

/// Recording mock of a WebGL context.
#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following link fail.
    pub fn fail_link(&self) {
        self.state.borrow_mut().fail_link = true;
    }

    /// Make every following `create_*` return `None`.
    pub fn refuse_allocation(&self) {
        self.state.borrow_mut().refuse_allocation = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn uniform_uploads(&self) -> Vec<Call> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.is_uniform_upload())
            .cloned()
            .collect()
    }

    pub fn location_lookups(&self) -> usize {
        self.state.borrow().location_lookups
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn alloc(&self) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        if state.refuse_allocation {
            None
        } else {
            Some(state.alloc())
        }
    }
}

impl GlContext for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;
    type Texture = u32;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let id = self.alloc()?;
        self.record(Call::CreateShader(stage, id));
        Some(id)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.state
            .borrow_mut()
            .sources
            .insert(*shader, source.to_string());
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compiled(&self, shader: &u32) -> bool {
        self.state
            .borrow()
            .sources
            .get(shader)
            .map(|s| s.contains("void main(") && !s.contains("#error"))
            .unwrap_or(false)
    }

    fn shader_info_log(&self, _shader: &u32) -> Option<String> {
        Some("ERROR: 0:1: 'main' : function not defined".to_string())
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.record(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.state
            .borrow_mut()
            .attached
            .entry(*program)
            .or_default()
            .push(*shader);
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) {
        let ok = !self.state.borrow().fail_link;
        self.state.borrow_mut().linked.insert(*program, ok);
        self.record(Call::LinkProgram(*program));
    }

    fn program_linked(&self, program: &u32) -> bool {
        self.state
            .borrow()
            .linked
            .get(program)
            .copied()
            .unwrap_or(false)
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some("varying v_uv not written by vertex shader".to_string())
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(Call::UseProgram(program.copied()));
    }

    fn delete_program(&self, program: &u32) {
        self.record(Call::DeleteProgram(*program));
    }

    fn create_buffer(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.record(Call::CreateBuffer(id));
        Some(id)
    }

    fn upload_array_buffer(&self, buffer: &u32, data: &[f32]) {
        self.record(Call::UploadArrayBuffer(*buffer, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: &u32) {
        self.record(Call::DeleteBuffer(*buffer));
    }

    fn attrib_location(&self, program: &u32, name: &str) -> Option<u32> {
        let source = self.state.borrow().program_source(*program);
        declares(&source, "attribute", name).then_some(0)
    }

    fn enable_vertex_attrib(&self, location: u32, components: i32) {
        self.record(Call::EnableVertexAttrib(location, components));
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<String> {
        let mut state = self.state.borrow_mut();
        state.location_lookups += 1;
        let source = state.program_source(*program);
        declares(&source, "uniform", name).then(|| name.to_string())
    }

    fn uniform1f(&self, location: &String, value: f32) {
        self.record(Call::Uniform1f(location.clone(), value));
    }

    fn uniform2fv(&self, location: &String, value: &[f32; 2]) {
        self.record(Call::Uniform2fv(location.clone(), *value));
    }

    fn uniform3fv(&self, location: &String, value: &[f32; 3]) {
        self.record(Call::Uniform3fv(location.clone(), *value));
    }

    fn uniform4fv(&self, location: &String, value: &[f32; 4]) {
        self.record(Call::Uniform4fv(location.clone(), *value));
    }

    fn uniform1i(&self, location: &String, value: i32) {
        self.record(Call::Uniform1i(location.clone(), value));
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear(&self, rgba: [f32; 4]) {
        self.record(Call::Clear(rgba));
    }

    fn draw_triangle_strip(&self, count: i32) {
        self.record(Call::DrawTriangleStrip(count));
    }

    fn create_texture(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.record(Call::CreateTexture(id));
        Some(id)
    }

    fn upload_texture_rgba(&self, texture: &u32, width: i32, height: i32, pixels: &[u8]) {
        self.record(Call::UploadTexture(*texture, width, height, pixels.to_vec()));
    }

    fn bind_texture(&self, unit: u32, texture: Option<&u32>) {
        self.record(Call::BindTexture(unit, texture.copied()));
    }

    fn delete_texture(&self, texture: &u32) {
        self.record(Call::DeleteTexture(*texture));
    }
}

/// Frame scheduler driven by hand from the test.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u32,
    pub requested: u32,
    pub cancelled: u32,
    pub outstanding: Option<u32>,
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> u32 {
        self.next += 1;
        self.requested += 1;
        self.outstanding = Some(self.next);
        self.next
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled += 1;
        if self.outstanding == Some(handle) {
            self.outstanding = None;
        }
    }
}

static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut lines) = LOG.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Route `log` records into an in-memory buffer.
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&CaptureLogger);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Captured lines containing `needle`.
pub fn logged(needle: &str) -> Vec<String> {
    LOG.lock()
        .map(|lines| lines.iter().filter(|l| l.contains(needle)).cloned().collect())
        .unwrap_or_default()
}
