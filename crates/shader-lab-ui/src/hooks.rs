//! Component-lifecycle glue for shader demos.
//!
//! [`use_shader_demo`] mounts a demo on a canvas once the canvas is in the
//! document, forwards control changes to the running loop, keeps the
//! backing store sized to the element and tears everything down when the
//! owning component is dropped.

use leptos::*;
use shader_lab_core::control::ControlCell;
use shader_lab_core::harness::{FallbackReason, Mount, ShaderDemoController};
use shader_lab_core::render_loop::LoopState;
use shader_lab_core::viewport::ResizeTracker;
use shader_lab_core::ShaderDemo;
use web_sys::HtmlCanvasElement;

use crate::capability::is_webgl_supported;
use crate::resize::{fit_canvas, ResizeSubscription, ResizeWatcher};
use crate::scheduler::AnimationFrameScheduler;
use crate::webgl::WebGlBackend;

/// A demo mounted in the browser.
pub type LiveDemo<D> = ShaderDemoController<WebGlBackend, D, AnimationFrameScheduler>;

/// What a demo component should currently show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoStatus {
    /// The canvas has not been mounted yet.
    Pending,
    /// The shader is running.
    Live,
    /// The static fallback replaces the canvas.
    Fallback(FallbackReason),
}

impl DemoStatus {
    /// The fallback reason, if the shader path is unavailable.
    pub fn fallback(&self) -> Option<FallbackReason> {
        match self {
            DemoStatus::Fallback(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Handle to a demo mounted by [`use_shader_demo`].
pub struct ShaderHandle<D: ShaderDemo + 'static> {
    live: StoredValue<Option<LiveDemo<D>>>,
    resize: StoredValue<Option<ResizeSubscription>>,
    status: RwSignal<DemoStatus>,
}

impl<D: ShaderDemo + 'static> Clone for ShaderHandle<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ShaderDemo + 'static> Copy for ShaderHandle<D> {}

impl<D: ShaderDemo + 'static> ShaderHandle<D> {
    /// Reactive mount status.
    pub fn status(&self) -> ReadSignal<DemoStatus> {
        self.status.read_only()
    }

    /// Run `f` against the live controller. `None` before mount, after
    /// teardown or when the fallback is showing.
    pub fn with_live<R>(&self, f: impl FnOnce(&mut LiveDemo<D>) -> R) -> Option<R> {
        self.live
            .try_update_value(|slot| slot.as_mut().map(f))
            .flatten()
    }

    /// Draw one frame now, outside the loop.
    pub fn redraw(&self) {
        self.with_live(|live| live.redraw());
    }

    fn mount(&self, canvas: &HtmlCanvasElement, controls: ControlCell<D>) {
        let slug = controls.with(|demo| demo.info().slug);
        let mut tracker = ResizeTracker::new();
        let viewport = fit_canvas(canvas, &mut tracker).unwrap_or_default();

        let live = self.live;
        let scheduler = match AnimationFrameScheduler::new(move |timestamp| {
            live.try_update_value(|slot| {
                if let Some(controller) = slot.as_mut() {
                    controller.on_frame(timestamp);
                }
            });
        }) {
            Ok(scheduler) => scheduler,
            Err(e) => {
                log::error!("{slug}: cannot schedule frames: {e:?}");
                let _ = self
                    .status
                    .try_set(DemoStatus::Fallback(FallbackReason::SchedulerUnavailable));
                return;
            }
        };

        let options = controls.with(|demo| demo.context_options());
        let context_canvas = canvas.clone();
        let acquire = move || {
            WebGlBackend::from_canvas(&context_canvas, &options)
                .map_err(|e| log::error!("{slug}: {e:?}"))
                .ok()
        };

        match LiveDemo::<D>::mount(is_webgl_supported, acquire, controls, scheduler, viewport) {
            Mount::Live(controller) => {
                // Torn down before the deferred mount ran: drop it right away.
                if self.live.try_set_value(Some(controller)).is_some() {
                    return;
                }
                self.watch_resize(canvas.clone(), tracker);
                let _ = self.status.try_set(DemoStatus::Live);
            }
            Mount::Fallback(reason) => {
                let _ = self.status.try_set(DemoStatus::Fallback(reason));
            }
        }
    }

    fn watch_resize(&self, canvas: HtmlCanvasElement, mut tracker: ResizeTracker) {
        let live = self.live;
        let subscription = ResizeWatcher::subscribe(move || {
            if let Some(viewport) = fit_canvas(&canvas, &mut tracker) {
                live.try_update_value(|slot| {
                    if let Some(controller) = slot.as_mut() {
                        controller.resize(viewport);
                    }
                });
            }
        });

        match subscription {
            // A disposed slot hands the guard back, which unsubscribes on drop.
            Ok(subscription) => {
                let _ = self.resize.try_set_value(Some(subscription));
            }
            Err(e) => log::warn!("resize listener unavailable: {e:?}"),
        }
    }

    fn teardown(&self) {
        let _ = self.resize.try_set_value(None);
        if let Some(Some(controller)) = self.live.try_update_value(Option::take) {
            log::debug!(
                "{}: unmounted after {} frames",
                controller.controls().with(|demo| demo.info().slug),
                controller.frames_drawn()
            );
        }
    }
}

/// Mount `demo` on the canvas behind `canvas_ref`.
///
/// `demo` is read reactively: every change is copied into the control cell
/// the frame loop reads, play state is re-synced, and idle demos are
/// redrawn so the change shows without a running loop.
pub fn use_shader_demo<D>(
    canvas_ref: NodeRef<html::Canvas>,
    demo: impl Into<Signal<D>>,
) -> ShaderHandle<D>
where
    D: ShaderDemo + Clone + 'static,
{
    let demo: Signal<D> = demo.into();
    let controls = ControlCell::new(demo.get_untracked());
    let handle = ShaderHandle {
        live: store_value(None),
        resize: store_value(None),
        status: create_rw_signal(DemoStatus::Pending),
    };

    let cell = controls.clone();
    create_effect(move |_| {
        cell.set(demo.get());
        handle.with_live(|live| {
            live.sync_playing();
            if live.loop_state() != LoopState::Running {
                live.redraw();
            }
        });
    });

    // Defer to the next frame so the canvas has been laid out and measures
    // its real CSS size.
    create_effect(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        let canvas: HtmlCanvasElement = (*canvas).clone();
        let controls = controls.clone();
        request_animation_frame(move || handle.mount(&canvas, controls));
        true
    });

    on_cleanup(move || handle.teardown());

    handle
}
