//! Progressive image blur card.
//!
//! The photo is fetched after mount and uploaded over the placeholder
//! texture once both the image and the GL context are ready.

use leptos::*;
use shader_lab_core::demos::progressive_blur::{
    ProgressiveBlurDemo, DIRECTIONS, FALLOFF, IMAGE_URL, INFO, STRENGTHS,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::controls::{ControlButton, ControlGroup, ExampleWrapper, SliderControl};
use super::surface::{shader_surface, WEBGL_BADGE};
use crate::hooks::DemoStatus;

async fn load_image(url: &str) -> Result<HtmlImageElement, wasm_bindgen::JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(url);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

/// Blur card with direction and strength presets and a falloff slider.
#[component]
pub fn ShaderProgressiveBlur() -> impl IntoView {
    let demo = create_rw_signal(ProgressiveBlurDemo::default());
    let (handle, surface) = shader_surface(demo, WEBGL_BADGE.to_string());

    let image = create_rw_signal(None::<HtmlImageElement>);
    spawn_local(async move {
        match load_image(IMAGE_URL).await {
            Ok(loaded) => {
                let _ = image.try_set(Some(loaded));
            }
            Err(e) => log::warn!("{}: image failed to load: {e:?}", INFO.slug),
        }
    });

    create_effect(move |_| {
        if handle.status().get() != DemoStatus::Live {
            return;
        }
        image.with(|image| {
            let Some(image) = image else {
                return;
            };
            handle.with_live(|live| {
                if let Some(texture) = live.renderer().texture() {
                    if let Err(e) = live.renderer().gl().upload_image(texture, image) {
                        log::warn!("{}: image upload failed: {e:?}", INFO.slug);
                    }
                }
                live.redraw();
            });
        });
    });

    let falloff = Signal::derive(move || demo.with(|d| d.falloff));

    let controls = move || {
        view! {
            <div class="control-bar">
                <ControlGroup label="Direction">
                    {DIRECTIONS
                        .into_iter()
                        .enumerate()
                        .map(|(i, direction)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.direction == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.direction = i))
                                >
                                    {direction.name}
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <ControlGroup label="Strength">
                    {STRENGTHS
                        .into_iter()
                        .enumerate()
                        .map(|(i, strength)| {
                            view! {
                                <ControlButton
                                    active=Signal::derive(move || demo.with(|d| d.strength == i))
                                    on_click=Callback::new(move |_| demo.update(|d| d.strength = i))
                                >
                                    {strength.name}
                                </ControlButton>
                            }
                        })
                        .collect_view()}
                </ControlGroup>
                <div class="control-sliders">
                    <SliderControl
                        spec=FALLOFF
                        value=falloff
                        on_change=Callback::new(move |v| demo.update(|d| d.falloff = v))
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
