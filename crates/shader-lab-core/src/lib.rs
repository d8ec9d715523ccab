//! Shader Lab Core Library
//!
//! Platform-agnostic harness for full-screen fragment-shader demos.
//! Everything that talks to the GPU goes through the [`gl::GlContext`] seam,
//! so the whole lifecycle can be exercised on the host with a mock context.
//!
//! # Modules
//!
//! - [`gl`] - GPU call seam: `GlContext`, `ShaderStage`
//! - [`shader`] - Shader compilation and program ownership
//! - [`quad`] - Full-screen quad geometry
//! - [`uniform`] - Uniform values, per-frame uniform sets, binder
//! - [`render_loop`] - Frame scheduling state machine
//! - [`viewport`] - Canvas backing-store sizing
//! - [`control`] - Sliders, presets, shared control cells
//! - [`color`] - Hex colour parsing
//! - [`glsl`] - Shared GLSL source fragments
//! - [`demo`] - `ShaderDemo` trait and demo metadata
//! - [`harness`] - Renderer and demo controller
//! - [`demos`] - The demo catalogue

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod control;
pub mod demo;
pub mod demos;
pub mod gl;
pub mod glsl;
pub mod harness;
pub mod quad;
pub mod render_loop;
pub mod shader;
pub mod uniform;
pub mod viewport;

// Re-export commonly used types
pub use color::{hex_to_rgb, Rgb};
pub use config::ContextOptions;
pub use control::{ControlCell, Preset, SliderSpec};
pub use demo::{DemoInfo, FrameInput, ShaderDemo};
pub use demos::DemoKind;
pub use gl::{GlContext, ShaderStage};
pub use harness::{DemoRenderer, FallbackReason, Mount, ShaderDemoController};
pub use render_loop::{FrameScheduler, FrameTime, LoopState, RenderLoop};
pub use shader::{ShaderError, ShaderProgram};
pub use uniform::{Binding, UniformBinder, UniformSet, UniformValue};
pub use viewport::{ResizeTracker, Viewport};
