//! Three-colour flowing gradient card.

use leptos::*;
use shader_lab_core::demos::flowing_gradient::{
    FlowingGradientDemo, DISTORTION, INFO, SCHEMES, SPEED,
};

use super::controls::{
    ControlButton, ControlGroup, ExampleWrapper, PlayButton, SliderControl, Swatch,
};
use super::surface::{shader_surface, WEBGL_BADGE};

/// Flowing gradient card with colour schemes and distortion/speed sliders.
#[component]
pub fn ShaderFlowingGradient() -> impl IntoView {
    let demo = create_rw_signal(FlowingGradientDemo::default());
    let (_, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let playing = Signal::derive(move || demo.with(|d| d.playing));
    let distortion = Signal::derive(move || demo.with(|d| d.distortion));
    let speed = Signal::derive(move || demo.with(|d| d.speed));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Colour scheme">
                    {SCHEMES
                        .into_iter()
                        .enumerate()
                        .map(|(i, scheme)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.scheme == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.scheme = i))
                                    label=scheme.name
                                >
                                    <Swatch from=scheme.value.color1 to=scheme.value.color3/>
                                    <span class="preset-name">{scheme.name}</span>
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-sliders">
                    <SliderControl
                        spec=DISTORTION
                        value=distortion
                        on_change=Callback::new(move |v| demo.update(|d| d.distortion = v))
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
