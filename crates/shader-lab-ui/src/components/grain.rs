//! Film-grain overlay card.

use leptos::*;
use shader_lab_core::demos::grain::{GrainDemo, INFO, INTENSITY, PRESETS};

use super::controls::{ControlButton, ControlGroup, ExampleWrapper, SliderControl};
use super::surface::shader_surface;

/// Grain card with intensity presets and an animated/static toggle.
#[component]
pub fn ShaderGrain() -> impl IntoView {
    let demo = create_rw_signal(GrainDemo::default());
    let badge = Signal::derive(move || {
        if demo.with(|d| d.animated) {
            "Animated grain".to_string()
        } else {
            "Static grain".to_string()
        }
    });
    let (_, surface) = shader_surface(demo, badge);

    let intensity = Signal::derive(move || demo.with(|d| d.intensity));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Intensity">
                    {PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || {
                                        demo.with(|d| (d.intensity - preset.value).abs() < 1e-4)
                                    })
                                    on_click=Callback::new(move |_| {
                                        demo.update(|d| d.intensity = INTENSITY.clamp(preset.value))
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
                        spec=INTENSITY
                        value=intensity
                        on_change=Callback::new(move |v| demo.update(|d| d.intensity = v))
                    />
                </div>
                <ControlGroup label="Mode">
                    <ControlButton
                        active=Signal::derive(move || demo.with(|d| d.animated))
                        on_click=Callback::new(move |_| demo.update(|d| d.animated = true))
                    >
                        "Animated"
                    </ControlButton>
                    <ControlButton
                        active=Signal::derive(move || demo.with(|d| !d.animated))
                        on_click=Callback::new(move |_| demo.update(|d| d.animated = false))
                    >
                        "Static"
                    </ControlButton>
                </ControlGroup>
            </div>
        }
    };

    view! {
        <ExampleWrapper title=INFO.title description=INFO.description controls=controls>
            {surface}
        </ExampleWrapper>
    }
}
