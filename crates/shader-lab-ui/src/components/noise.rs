//! Simplex-noise gradient card.

use leptos::*;
use shader_lab_core::demos::noise::{NoiseDemo, INFO, PRESETS, SCALE, SPEED};

use super::controls::{ControlButton, ControlGroup, ExampleWrapper, PlayButton, SliderControl};
use super::surface::{shader_surface, WEBGL_BADGE};

/// Noise card with presets and scale/speed sliders.
#[component]
pub fn ShaderNoise() -> impl IntoView {
    let demo = create_rw_signal(NoiseDemo::default());
    let (_, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let playing = Signal::derive(move || demo.with(|d| d.playing));
    let scale = Signal::derive(move || demo.with(|d| d.scale));
    let speed = Signal::derive(move || demo.with(|d| d.speed));
    let active = create_memo(move |_| demo.with(NoiseDemo::active_preset));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Presets">
                    {PRESETS
                        .into_iter()
                        .enumerate()
                        .map(|(i, preset)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || active.get() == Some(i))
                                    on_click=Callback::new(move |_| {
                                        demo.update(|d| d.apply(preset.value))
                                    })
                                >
                                    {preset.name}
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-sliders">
                    <SliderControl
                        spec=SCALE
                        value=scale
                        on_change=Callback::new(move |v| demo.update(|d| d.scale = v))
                    />
                    <SliderControl
                        spec=SPEED
                        value=speed
                        on_change=Callback::new(move |v| demo.update(|d| d.speed = v))
                    />
                </div>
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
