//! Main application component.

use leptos::*;
use shader_lab_core::demos::DemoKind;

use crate::components::VisualExample;

/// Root application component: every demo, in catalogue order.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="shader-lab">
            <header class="app-header">
                <h1>"Shader Lab"</h1>
                <p class="app-subtitle">"GPU-rendered backgrounds and effects, one fragment shader each."</p>
            </header>
            <div class="gallery">
                {DemoKind::ALL
                    .into_iter()
                    .map(|kind| view! { <VisualExample slug=kind.slug()/> })
                    .collect_view()}
            </div>
        </main>
    }
}
