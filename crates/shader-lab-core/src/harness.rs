//! Demo renderer and controller.
//!
//! [`DemoRenderer`] owns the GPU side of one demo: program, quad, uniform
//! binder and optional texture. [`ShaderDemoController`] adds the frame loop
//! and the shared control cell, and is the single lifecycle every demo goes
//! through: support check, acquire, compile, bind quad, loop, teardown.

use crate::config::IMAGE_TEXTURE_UNIT;
use crate::control::ControlCell;
use crate::demo::{FrameInput, ShaderDemo};
use crate::gl::GlContext;
use crate::render_loop::{FrameScheduler, FrameTime, LoopState, RenderLoop};
use crate::shader::ShaderProgram;
use crate::uniform::{UniformBinder, UniformSet};
use crate::viewport::Viewport;

/// GPU resources and per-frame draw path for one demo.
pub struct DemoRenderer<G: GlContext> {
    program: ShaderProgram<G>,
    binder: UniformBinder<G>,
    uniforms: UniformSet,
    texture: Option<G::Texture>,
}

impl<G: GlContext> DemoRenderer<G> {
    /// Compile the demo's shaders and set up its geometry (and texture, if any).
    pub fn new<D: ShaderDemo + ?Sized>(gl: G, demo: &D) -> Option<Self> {
        let program = ShaderProgram::new(gl, demo.vertex_source(), demo.fragment_source())?;
        let texture = demo
            .texture_placeholder()
            .and_then(|texel| create_placeholder_texture(program.gl(), texel));

        Some(Self {
            program,
            binder: UniformBinder::new(),
            uniforms: UniformSet::new(),
            texture,
        })
    }

    /// The context resources live in.
    pub fn gl(&self) -> &G {
        self.program.gl()
    }

    /// Texture bound to unit 0 on every draw, if the demo asked for one.
    pub fn texture(&self) -> Option<&G::Texture> {
        self.texture.as_ref()
    }

    /// Uniforms pushed by the most recent frame.
    pub fn last_uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    /// Draw one frame: recompute uniforms, upload them, then draw.
    pub fn render<D: ShaderDemo + ?Sized>(&mut self, demo: &D, frame: &FrameInput) {
        self.uniforms.clear();
        demo.write_uniforms(frame, &mut self.uniforms);

        let viewport = frame.viewport;
        self.program
            .begin_frame(viewport.width as i32, viewport.height as i32);

        let gl = self.program.gl();
        if let Some(texture) = &self.texture {
            gl.bind_texture(IMAGE_TEXTURE_UNIT, Some(texture));
        }
        self.binder
            .bind_all(gl, self.program.program(), &self.uniforms);
        self.program.draw();
    }
}

impl<G: GlContext> Drop for DemoRenderer<G> {
    fn drop(&mut self) {
        if let Some(texture) = self.texture.take() {
            self.program.gl().delete_texture(&texture);
        }
    }
}

fn create_placeholder_texture<G: GlContext>(gl: &G, texel: [u8; 4]) -> Option<G::Texture> {
    let Some(texture) = gl.create_texture() else {
        log::error!("Failed to create texture");
        return None;
    };
    gl.upload_texture_rgba(&texture, 1, 1, &texel);
    Some(texture)
}

/// Why a demo shows its static fallback instead of the shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// The capability check reported no WebGL.
    Unsupported,
    /// The canvas refused to hand out a context.
    ContextUnavailable,
    /// Compiling, linking or geometry setup failed.
    SetupFailed,
    /// No animation-frame source to drive the loop.
    SchedulerUnavailable,
}

impl FallbackReason {
    /// Short human-readable reason.
    pub fn describe(&self) -> &'static str {
        match self {
            FallbackReason::Unsupported => "WebGL unavailable",
            FallbackReason::ContextUnavailable => "WebGL context unavailable",
            FallbackReason::SetupFailed => "shader failed to compile",
            FallbackReason::SchedulerUnavailable => "animation frames unavailable",
        }
    }
}

/// Result of mounting a demo.
pub enum Mount<C> {
    /// The shader path is live.
    Live(C),
    /// The static fallback must be shown.
    Fallback(FallbackReason),
}

impl<C> Mount<C> {
    /// The live controller, if any.
    pub fn live(self) -> Option<C> {
        match self {
            Mount::Live(c) => Some(c),
            Mount::Fallback(_) => None,
        }
    }

    /// The fallback reason, if any.
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Mount::Live(_) => None,
            Mount::Fallback(reason) => Some(*reason),
        }
    }
}

/// One mounted demo: renderer, frame loop and control cell.
///
/// Dropping it cancels any pending frame and releases every GPU object.
pub struct ShaderDemoController<G: GlContext, D: ShaderDemo, S: FrameScheduler> {
    frame_loop: RenderLoop<S>,
    renderer: DemoRenderer<G>,
    controls: ControlCell<D>,
    viewport: Viewport,
    last_time: FrameTime,
}

impl<G, D, S> ShaderDemoController<G, D, S>
where
    G: GlContext,
    D: ShaderDemo,
    S: FrameScheduler,
{
    /// Mount a demo.
    ///
    /// `supported` runs first and exactly once; when it fails no GPU call is
    /// made. `acquire` obtains the drawing context. Animated, playing demos
    /// start their frame loop; anything else is drawn once immediately.
    pub fn mount(
        supported: impl FnOnce() -> bool,
        acquire: impl FnOnce() -> Option<G>,
        controls: ControlCell<D>,
        scheduler: S,
        viewport: Viewport,
    ) -> Mount<Self> {
        let slug = controls.with(|demo| demo.info().slug);

        if !supported() {
            log::info!("{slug}: WebGL not supported, showing fallback");
            return Mount::Fallback(FallbackReason::Unsupported);
        }
        let Some(gl) = acquire() else {
            log::error!("{slug}: WebGL context unavailable");
            return Mount::Fallback(FallbackReason::ContextUnavailable);
        };
        let Some(renderer) = controls.with(|demo| DemoRenderer::new(gl, demo)) else {
            log::error!("{slug}: shader setup failed, showing fallback");
            return Mount::Fallback(FallbackReason::SetupFailed);
        };

        let mut controller = Self {
            frame_loop: RenderLoop::new(scheduler),
            renderer,
            controls,
            viewport,
            last_time: FrameTime::default(),
        };
        if controller.wants_loop() {
            controller.frame_loop.start();
        } else {
            controller.draw(controller.last_time);
        }
        log::debug!("{slug}: mounted at {}x{}", viewport.width, viewport.height);
        Mount::Live(controller)
    }

    /// Handle a fired frame callback carrying a millisecond timestamp.
    ///
    /// Returns whether a frame was drawn.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.wants_loop() {
            self.frame_loop.pause();
            return false;
        }

        let time = FrameTime::from_millis(timestamp_ms);
        let Self {
            frame_loop,
            renderer,
            controls,
            viewport,
            last_time,
        } = self;

        frame_loop.tick(|| {
            *last_time = time;
            let frame = FrameInput::new(time.seconds(), *viewport);
            controls.with(|demo| renderer.render(demo, &frame));
        })
    }

    /// Pause or resume to match the demo's play flag.
    pub fn sync_playing(&mut self) {
        let playing = self.wants_loop();
        self.frame_loop.set_playing(playing);
    }

    /// Apply a new backing-store size. Idle demos are redrawn immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        if !self.frame_loop.is_running() {
            self.draw(self.last_time);
        }
    }

    /// Draw one frame now at the last frame's time, outside the loop.
    pub fn redraw(&mut self) {
        self.draw(self.last_time);
    }

    /// Draw one frame now at `timestamp_ms`, outside the loop.
    pub fn redraw_at(&mut self, timestamp_ms: f64) {
        let time = FrameTime::from_millis(timestamp_ms);
        self.last_time = time;
        self.draw(time);
    }

    /// Current loop state.
    pub fn loop_state(&self) -> LoopState {
        self.frame_loop.state()
    }

    /// Frames drawn by the loop.
    pub fn frames_drawn(&self) -> u64 {
        self.frame_loop.frames_drawn()
    }

    /// Current backing-store size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The shared control cell.
    pub fn controls(&self) -> &ControlCell<D> {
        &self.controls
    }

    /// The renderer.
    pub fn renderer(&self) -> &DemoRenderer<G> {
        &self.renderer
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        self.frame_loop.scheduler()
    }

    fn wants_loop(&self) -> bool {
        self.controls
            .with(|demo| demo.is_animated() && demo.is_playing())
    }

    fn draw(&mut self, time: FrameTime) {
        let frame = FrameInput::new(time.seconds(), self.viewport);
        let renderer = &mut self.renderer;
        self.controls.with(|demo| renderer.render(demo, &frame));
    }
}
