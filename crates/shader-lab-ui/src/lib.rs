//! Shader Lab web UI - Leptos-based frontend.
//!
//! Mounts the demos from `shader-lab-core` on real canvases:
//! - WebGL backend for the core's `GlContext`
//! - `requestAnimationFrame` scheduling and shared resize handling
//! - Demo cards with preset and slider controls

pub mod app;
pub mod capability;
pub mod components;
pub mod hooks;
pub mod logger;
pub mod resize;
pub mod scheduler;
pub mod webgl;

pub use app::App;
pub use capability::is_webgl_supported;
pub use hooks::{use_shader_demo, DemoStatus, LiveDemo, ShaderHandle};
pub use resize::{fit_canvas, ResizeSubscription, ResizeWatcher};
pub use scheduler::AnimationFrameScheduler;
pub use webgl::WebGlBackend;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() {
    logger::init();
    leptos::mount_to_body(App);
}
