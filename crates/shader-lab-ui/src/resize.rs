//! Shared window-resize listener and canvas sizing.
//!
//! All mounted demos share a single `resize` listener on the window. The
//! listener is installed with the first subscription and removed with the
//! last one.

use std::cell::RefCell;
use std::rc::Rc;

use shader_lab_core::viewport::{ResizeTracker, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

type Subscriber = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Subscriber)>,
    listener: Option<Closure<dyn FnMut()>>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Window resize fan-out.
pub struct ResizeWatcher;

impl ResizeWatcher {
    /// Call `callback` on every window resize until the returned guard drops.
    pub fn subscribe(callback: impl FnMut() + 'static) -> Result<ResizeSubscription, JsValue> {
        REGISTRY.with(|registry| -> Result<ResizeSubscription, JsValue> {
            let mut registry = registry.borrow_mut();
            if registry.listener.is_none() {
                let listener = Closure::wrap(Box::new(dispatch) as Box<dyn FnMut()>);
                web_sys::window()
                    .ok_or("No window")?
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
                registry.listener = Some(listener);
            }

            registry.next_id += 1;
            let id = registry.next_id;
            let subscriber: Subscriber = Rc::new(RefCell::new(callback));
            registry.subscribers.push((id, subscriber));
            Ok(ResizeSubscription { id })
        })
    }

    /// Number of live subscriptions.
    pub fn subscriber_count() -> usize {
        REGISTRY.with(|registry| registry.borrow().subscribers.len())
    }
}

fn dispatch() {
    // Snapshot so callbacks may subscribe or unsubscribe while running.
    let subscribers: Vec<Subscriber> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect()
    });
    for subscriber in subscribers {
        if let Ok(mut callback) = subscriber.try_borrow_mut() {
            callback();
        }
    }
}

/// Keeps a resize callback registered. Dropping it unsubscribes.
pub struct ResizeSubscription {
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let listener = REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.subscribers.retain(|(id, _)| *id != self.id);
            if registry.subscribers.is_empty() {
                registry.listener.take()
            } else {
                None
            }
        });

        if let (Some(listener), Some(window)) = (listener, web_sys::window()) {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }
}

/// Size `canvas`'s backing store to its CSS box times the clamped
/// device-pixel-ratio.
///
/// Returns the new viewport when it differs from the last one `tracker` saw.
pub fn fit_canvas(canvas: &HtmlCanvasElement, tracker: &mut ResizeTracker) -> Option<Viewport> {
    let rect = canvas.get_bounding_client_rect();
    let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

    let viewport = tracker.observe(rect.width(), rect.height(), ratio)?;
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
    Some(viewport)
}
