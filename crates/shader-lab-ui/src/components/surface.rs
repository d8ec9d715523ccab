//! Canvas surface shared by every demo card.

use leptos::*;
use shader_lab_core::config::CANVAS_CSS_HEIGHT;
use shader_lab_core::ShaderDemo;

use super::controls::{ShaderBadge, StaticFallback};
use crate::hooks::{use_shader_demo, ShaderHandle};

/// Badge text most demos show over their canvas.
pub const WEBGL_BADGE: &str = "WebGL Shader";

/// Mount `demo` on a fresh canvas.
///
/// Returns the handle together with a view that shows the canvas and its
/// badge while the shader runs, and the demo's static fallback otherwise.
///
/// The canvas box is pinned in CSS. The backing store is derived from that
/// box, so it must never depend on the canvas's own `width`/`height`.
pub fn shader_surface<D>(
    demo: impl Into<Signal<D>>,
    badge: impl Into<MaybeSignal<String>>,
) -> (ShaderHandle<D>, impl IntoView)
where
    D: ShaderDemo + Clone + 'static,
{
    let demo: Signal<D> = demo.into();
    let badge = badge.into();
    let info = demo.with_untracked(|demo| demo.info());

    let canvas_ref = create_node_ref::<html::Canvas>();
    let handle = use_shader_demo(canvas_ref, demo);
    let status = handle.status();

    let view = view! {
        <Show
            when=move || status.get().fallback().is_none()
            fallback=move || {
                status.get().fallback().map(|reason| view! { <StaticFallback info=info reason=reason/> })
            }
        >
            <div class="shader-surface">
                <canvas
                    node_ref=canvas_ref
                    class="shader-canvas"
                    style:display="block"
                    style:width="100%"
                    style:height=format!("{CANVAS_CSS_HEIGHT}px")
                ></canvas>
                <ShaderBadge text=badge.clone()/>
            </div>
        </Show>
    };

    (handle, view)
}
