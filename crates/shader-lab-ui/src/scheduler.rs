//! `requestAnimationFrame`-backed frame scheduler.

use shader_lab_core::render_loop::FrameScheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Schedules one call of a fixed callback per request.
///
/// The callback receives the `requestAnimationFrame` timestamp in
/// milliseconds. It is dropped together with the scheduler, after the
/// owning render loop has cancelled any outstanding request.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    /// Wrap `callback`. Fails only outside a browser window.
    pub fn new(callback: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(f64)>);
        Ok(Self { window, callback })
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> i32 {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                log::error!("requestAnimationFrame failed: {e:?}");
                0
            })
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
}
