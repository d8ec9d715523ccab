//! Two-colour animated gradient card.

use leptos::*;
use shader_lab_core::demos::gradient::{GradientDemo, INFO, PRESETS};

use super::controls::{
    ControlButton, ControlGroup, ExampleWrapper, PlayButton, ResetButton, Swatch,
};
use super::surface::{shader_surface, WEBGL_BADGE};

/// Gradient card with colour presets and playback controls.
#[component]
pub fn ShaderGradient() -> impl IntoView {
    let demo = create_rw_signal(GradientDemo::default());
    let (_, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let playing = Signal::derive(move || demo.with(|d| d.playing));
    let on_toggle = Callback::new(move |_| demo.update(|d| d.playing = !d.playing));
    let on_reset = Callback::new(move |_| demo.update(|d| d.playing = true));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Colours">
                    {PRESETS
                        .into_iter()
                        .enumerate()
                        .map(|(i, preset)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.preset == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.preset = i))
                                    label=preset.name
                                >
                                    <Swatch from=preset.value.color1 to=preset.value.color2/>
                                    <span class="preset-name">{preset.name}</span>
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-actions">
                    <ResetButton on_reset=on_reset/>
                    <PlayButton playing=playing on_toggle=on_toggle/>
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
