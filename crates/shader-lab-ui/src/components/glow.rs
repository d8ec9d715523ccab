//! Ambient glow orbs card.

use leptos::*;
use shader_lab_core::demos::glow::{GlowDemo, INFO, INTENSITY, ORBS, PALETTES};

use super::controls::{
    ControlButton, ControlGroup, ExampleWrapper, PlayButton, SliderControl, Swatch,
};
use super::surface::{shader_surface, WEBGL_BADGE};

/// Glow card with palettes and intensity/orb sliders.
#[component]
pub fn ShaderGlow() -> impl IntoView {
    let demo = create_rw_signal(GlowDemo::default());
    let (_, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let playing = Signal::derive(move || demo.with(|d| d.playing));
    let intensity = Signal::derive(move || demo.with(|d| d.intensity));
    let orbs = Signal::derive(move || demo.with(|d| d.orb_count));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Colours">
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
                                    <Swatch from=palette.value.color1 to=palette.value.color2/>
                                    <span class="preset-name">{palette.name}</span>
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-sliders">
                    <SliderControl
                        spec=INTENSITY
                        value=intensity
                        on_change=Callback::new(move |v| demo.update(|d| d.intensity = v))
                    />
                    <SliderControl
                        spec=ORBS
                        value=orbs
                        on_change=Callback::new(move |v| demo.update(|d| d.orb_count = v))
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
