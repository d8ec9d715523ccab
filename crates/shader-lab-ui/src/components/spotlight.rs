//! Pointer-following spotlight card.

use leptos::*;
use shader_lab_core::demos::spotlight::{SpotlightDemo, INFO, LIGHTS, RADIUS, SOFTNESS};

use super::controls::{ControlButton, ControlGroup, ExampleWrapper, SliderControl};
use super::surface::shader_surface;

/// Spotlight card. The light follows the pointer over the canvas.
#[component]
pub fn ShaderSpotlight() -> impl IntoView {
    let demo = create_rw_signal(SpotlightDemo::default());
    let (_, surface) = shader_surface(demo, "Move mouse here".to_string());

    let radius = Signal::derive(move || demo.with(|d| d.radius));
    let softness = Signal::derive(move || demo.with(|d| d.softness));

    let container = create_node_ref::<html::Div>();
    let on_mousemove = move |ev: ev::MouseEvent| {
        let Some(element) = container.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        demo.update(|d| d.track_pointer(x, y, rect.width(), rect.height()));
    };

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Light colour">
                    {LIGHTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, light)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.light == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.light = i))
                                    label=light.name
                                >
                                    <span class="swatch" style:background-color=light.value></span>
                                    <span class="preset-name">{light.name}</span>
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-sliders">
                    <SliderControl
                        spec=RADIUS
                        value=radius
                        on_change=Callback::new(move |v| demo.update(|d| d.radius = v))
                    />
                    <SliderControl
                        spec=SOFTNESS
                        value=softness
                        on_change=Callback::new(move |v| demo.update(|d| d.softness = v))
                    />
                </div>
            </div>
        }
    };

    view! {
        <ExampleWrapper title=INFO.title description=INFO.description controls=controls>
            <div node_ref=container class="spotlight-area" on:mousemove=on_mousemove>
                {surface}
            </div>
        </ExampleWrapper>
    }
}
