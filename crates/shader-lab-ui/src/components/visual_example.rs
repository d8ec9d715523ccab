//! Slug-keyed demo lookup.

use leptos::*;
use shader_lab_core::demos::DemoKind;

use super::{
    ShaderFlowingGradient, ShaderGlow, ShaderGradient, ShaderGrain, ShaderMeshGradient,
    ShaderNoise, ShaderNoiseTypes, ShaderProgressiveBlur, ShaderSpotlight,
};

/// Render the demo card registered under `slug`.
///
/// Unknown slugs render a diagnostic placeholder in debug builds and
/// nothing in release builds.
#[component]
pub fn VisualExample(
    /// Registry key, e.g. `shader-gradient`
    #[prop(into)]
    slug: String,
) -> impl IntoView {
    let Some(kind) = DemoKind::from_slug(&slug) else {
        log::warn!("unknown visual example {slug:?}");
        return unknown_example(&slug);
    };

    match kind {
        DemoKind::Gradient => view! { <ShaderGradient/> }.into_view(),
        DemoKind::Noise => view! { <ShaderNoise/> }.into_view(),
        DemoKind::FlowingGradient => view! { <ShaderFlowingGradient/> }.into_view(),
        DemoKind::Grain => view! { <ShaderGrain/> }.into_view(),
        DemoKind::MeshGradient => view! { <ShaderMeshGradient/> }.into_view(),
        DemoKind::Glow => view! { <ShaderGlow/> }.into_view(),
        DemoKind::Spotlight => view! { <ShaderSpotlight/> }.into_view(),
        DemoKind::NoiseTypes => view! { <ShaderNoiseTypes/> }.into_view(),
        DemoKind::ProgressiveBlur => view! { <ShaderProgressiveBlur/> }.into_view(),
    }
}

fn unknown_example(slug: &str) -> View {
    if !cfg!(debug_assertions) {
        return View::default();
    }
    let message = format!("Unknown visual example: {slug}");
    view! {
        <div class="unknown-example">
            <p class="unknown-example-title">{message}</p>
            <p class="unknown-example-hint">"Available: " {DemoKind::available()}</p>
        </div>
    }
    .into_view()
}
