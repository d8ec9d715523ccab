//! Side-by-side comparison of three noise functions.

use leptos::*;
use shader_lab_core::demos::noise_types::{NoiseKind, NoiseTypeDemo, INFO};

use super::controls::{ExampleWrapper, PlayButton};
use super::surface::shader_surface;

/// One canvas of the comparison.
#[component]
fn NoiseTile(kind: NoiseKind, #[prop(into)] playing: Signal<bool>) -> impl IntoView {
    let demo = Signal::derive(move || NoiseTypeDemo {
        kind,
        playing: playing.get(),
    });
    let (_, surface) = shader_surface(demo, kind.name().to_string());

    view! {
        <figure class="noise-tile">
            {surface}
            <figcaption class="noise-tile-caption">{kind.description()}</figcaption>
        </figure>
    }
}

/// Three noise canvases sharing one play toggle.
#[component]
pub fn ShaderNoiseTypes() -> impl IntoView {
    let playing = create_rw_signal(true);

    let controls = move || {
        view! {
            <div class="control-bar control-bar-end">
                <PlayButton
                    playing=playing
                    on_toggle=Callback::new(move |_| playing.update(|p| *p = !*p))
                />
            </div>
        }
    };

    view! {
        <ExampleWrapper title=INFO.title description=INFO.description controls=controls>
            <div class="noise-grid">
                {NoiseKind::ALL
                    .into_iter()
                    .map(|kind| view! { <NoiseTile kind=kind playing=playing/> })
                    .collect_view()}
            </div>
        </ExampleWrapper>
    }
}
