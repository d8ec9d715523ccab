//! Four-point mesh gradient card.

use leptos::*;
use shader_lab_core::demos::mesh_gradient::{MeshGradientDemo, INFO, PALETTES};

use super::controls::{ControlButton, ControlGroup, ExampleWrapper, PlayButton, Swatch};
use super::surface::{shader_surface, WEBGL_BADGE};

/// Mesh gradient card with palette presets.
#[component]
pub fn ShaderMeshGradient() -> impl IntoView {
    let demo = create_rw_signal(MeshGradientDemo::default());
    let (_, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let playing = Signal::derive(move || demo.with(|d| d.playing));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Palette">
                    {PALETTES
                        .into_iter()
                        .enumerate()
                        .map(|(i, palette)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.palette == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.palette = i))
                                    label=palette.name
                                >
                                    <Swatch from=palette.value[0] to=palette.value[2]/>
                                    <span class="preset-name">{palette.name}</span>
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-actions">
                    <PlayButton
                        playing=playing
                        on_toggle=Callback::new(move |_| demo.update(|d| d.playing = !d.playing))
                    />
                </div>
            </div>
        }
    };

    view! {
        <ExampleWrapper title=INFO.title description=INFO.description controls=controls>
            {surface}
        </ExampleWrapper>
    }
}
