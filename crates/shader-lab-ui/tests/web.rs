#![cfg(target_arch = "wasm32")]

use leptos::*;
use shader_lab_core::config::{ContextOptions, CANVAS_CSS_HEIGHT};
use shader_lab_core::demos::{gradient, GradientDemo};
use shader_lab_core::render_loop::{FrameScheduler, LoopState};
use shader_lab_core::shader::{ShaderProgram, DEFAULT_VERTEX_SHADER};
use shader_lab_core::viewport::{backing_store_size, ResizeTracker, Viewport};
use shader_lab_ui::components::shader_surface;
use shader_lab_ui::{
    fit_canvas, is_webgl_supported, logger, AnimationFrameScheduler, DemoStatus,
    ResizeWatcher, ShaderHandle, WebGlBackend,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn attached_canvas(css_width: u32, css_height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas
        .set_attribute(
            "style",
            &format!("display:block;width:{css_width}px;height:{css_height}px"),
        )
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

/// Resolves on the next animation frame.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn backend() -> Option<WebGlBackend> {
    if !is_webgl_supported() {
        return None;
    }
    let canvas = attached_canvas(64, 64);
    Some(WebGlBackend::from_canvas(&canvas, &ContextOptions::default()).unwrap())
}

// ============================================================================
// WebGL backend
// ============================================================================

#[wasm_bindgen_test]
fn test_demo_shader_links_on_real_context() {
    let Some(gl) = backend() else {
        return;
    };
    let program = ShaderProgram::new(gl, DEFAULT_VERTEX_SHADER, gradient::FRAGMENT_SHADER);
    assert!(program.is_some());
}

#[wasm_bindgen_test]
fn test_broken_shader_fails_soft() {
    let Some(gl) = backend() else {
        return;
    };
    let program = ShaderProgram::new(gl, DEFAULT_VERTEX_SHADER, "void main() { nope; }");
    assert!(program.is_none());
}

// ============================================================================
// Scheduling and sizing
// ============================================================================

#[wasm_bindgen_test]
fn test_scheduler_request_and_cancel() {
    let mut scheduler = AnimationFrameScheduler::new(|_| {}).unwrap();
    let handle = scheduler.request_frame();
    assert!(handle > 0);
    scheduler.cancel_frame(handle);
}

#[wasm_bindgen_test]
fn test_resize_subscriptions_share_one_listener() {
    let baseline = ResizeWatcher::subscriber_count();
    let first = ResizeWatcher::subscribe(|| {}).unwrap();
    let second = ResizeWatcher::subscribe(|| {}).unwrap();
    assert_eq!(ResizeWatcher::subscriber_count(), baseline + 2);

    drop(first);
    assert_eq!(ResizeWatcher::subscriber_count(), baseline + 1);
    drop(second);
    assert_eq!(ResizeWatcher::subscriber_count(), baseline);
}

#[wasm_bindgen_test]
fn test_fit_canvas_sizes_backing_store_once() {
    let canvas = attached_canvas(200, 100);
    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    let expected = backing_store_size(200.0, 100.0, ratio);

    let mut tracker = ResizeTracker::new();
    assert_eq!(fit_canvas(&canvas, &mut tracker), Some(expected));
    assert_eq!(canvas.width(), expected.width);
    assert_eq!(canvas.height(), expected.height);

    // Same box again: nothing to do.
    assert_eq!(fit_canvas(&canvas, &mut tracker), None);
}

// ============================================================================
// Logging
// ============================================================================

#[wasm_bindgen_test]
fn test_logger_init_is_idempotent() {
    logger::init();
    logger::init();
    assert_eq!(log::max_level(), logger::DEFAULT_LEVEL.to_level_filter());
}

// ============================================================================
// Demo hook lifecycle
// ============================================================================

#[component]
fn GradientSurface(
    demo: RwSignal<GradientDemo>,
    handle_out: StoredValue<Option<ShaderHandle<GradientDemo>>>,
) -> impl IntoView {
    let (handle, surface) = shader_surface(demo, "Gradient".to_string());
    handle_out.set_value(Some(handle));
    surface
}

#[wasm_bindgen_test]
async fn test_mounted_demo_keeps_size_follows_controls_and_tears_down() {
    if !is_webgl_supported() {
        return;
    }
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    // No stylesheet and no inline size: the surface must size itself.
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let baseline = ResizeWatcher::subscriber_count();
    let visible = create_rw_signal(true);
    let demo = create_rw_signal(GradientDemo::default());
    let handle_out = store_value(None::<ShaderHandle<GradientDemo>>);
    mount_to(container.clone(), move || {
        view! {
            <Show when=move || visible.get()>
                <GradientSurface demo=demo handle_out=handle_out/>
            </Show>
        }
    });

    let handle = handle_out.get_value().unwrap();
    for _ in 0..10 {
        if handle.status().get_untracked() != DemoStatus::Pending {
            break;
        }
        next_frame().await;
    }
    assert_eq!(handle.status().get_untracked(), DemoStatus::Live);
    assert_eq!(ResizeWatcher::subscriber_count(), baseline + 1);

    // The CSS box is fixed, so resizes never feed the backing store back in.
    let canvas = container
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    assert_eq!(
        canvas.get_bounding_client_rect().height(),
        f64::from(CANVAS_CSS_HEIGHT)
    );
    let size = (canvas.width(), canvas.height());
    for _ in 0..2 {
        window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
        next_frame().await;
    }
    assert_eq!((canvas.width(), canvas.height()), size);
    assert_eq!(
        handle.with_live(|live| live.viewport()),
        Some(Viewport::new(size.0, size.1))
    );

    // Pausing through the control signal stops the loop.
    assert_eq!(handle.with_live(|live| live.loop_state()), Some(LoopState::Running));
    demo.update(|d| d.playing = false);
    next_frame().await;
    assert_eq!(handle.with_live(|live| live.loop_state()), Some(LoopState::Paused));
    let drawn = handle.with_live(|live| live.frames_drawn());
    next_frame().await;
    next_frame().await;
    assert_eq!(handle.with_live(|live| live.frames_drawn()), drawn);

    // Unmounting releases the controller and the resize subscription.
    visible.set(false);
    next_frame().await;
    assert_eq!(ResizeWatcher::subscriber_count(), baseline);
    assert!(handle.with_live(|_| ()).is_none());
    assert!(container.query_selector("canvas").unwrap().is_none());
}
