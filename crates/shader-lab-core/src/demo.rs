//! The `ShaderDemo` trait and demo metadata.
//!
//! A demo is its control state plus two pure functions of it: the shader
//! source and the uniform set for a given frame. Everything else (compile,
//! quad, loop, teardown) is shared.

use crate::config::ContextOptions;
use crate::shader::DEFAULT_VERTEX_SHADER;
use crate::uniform::UniformSet;
use crate::viewport::Viewport;

/// Static description of a demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoInfo {
    /// Registry key, e.g. `shader-gradient`
    pub slug: &'static str,
    /// Card title
    pub title: &'static str,
    /// Card description
    pub description: &'static str,
    /// CSS `background` shown when the shader path is unavailable
    pub fallback_css: &'static str,
    /// Caption shown over the fallback
    pub fallback_caption: &'static str,
}

/// Per-frame inputs supplied by the render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds on the scheduler's monotonic clock
    pub time: f32,
    /// Current backing-store size
    pub viewport: Viewport,
}

impl FrameInput {
    /// Frame at `time` seconds rendered into `viewport`.
    pub fn new(time: f32, viewport: Viewport) -> Self {
        Self { time, viewport }
    }
}

/// A full-screen fragment-shader demo.
pub trait ShaderDemo {
    /// Static metadata.
    fn info(&self) -> &'static DemoInfo;

    /// Fragment shader source.
    fn fragment_source(&self) -> &'static str;

    /// Vertex shader source.
    fn vertex_source(&self) -> &'static str {
        DEFAULT_VERTEX_SHADER
    }

    /// Fill `uniforms` from the current controls and frame.
    ///
    /// Must be a pure function of `self` and `frame`.
    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet);

    /// Whether the frame loop should be running.
    fn is_playing(&self) -> bool {
        true
    }

    /// Whether the demo animates. Static demos redraw only on demand.
    fn is_animated(&self) -> bool {
        true
    }

    /// RGBA texel to fill texture unit 0 with until real image data arrives.
    fn texture_placeholder(&self) -> Option<[u8; 4]> {
        None
    }

    /// Attributes for the drawing context.
    fn context_options(&self) -> ContextOptions {
        ContextOptions::default()
    }
}
