//! Shared demo chrome and control widgets.

use leptos::*;
use shader_lab_core::control::SliderSpec;
use shader_lab_core::demo::DemoInfo;
use shader_lab_core::harness::FallbackReason;

/// Card framing one demo: title, description, body and an optional control bar.
#[component]
pub fn ExampleWrapper(
    /// Card title
    #[prop(into)]
    title: String,
    /// Card description
    #[prop(into)]
    description: String,
    /// Control bar shown under the body
    #[prop(optional, into)]
    controls: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="example-wrapper">
            <header class="example-header">
                <h4 class="example-title">{title}</h4>
                <p class="example-description">{description}</p>
            </header>
            <div class="example-body">{children()}</div>
            {controls.map(|controls| view! { <div class="example-controls">{controls.run()}</div> })}
        </section>
    }
}

/// Labelled row of control buttons.
#[component]
pub fn ControlGroup(
    /// Group label
    #[prop(into)]
    label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="control-group">
            <span class="control-group-label">{label}</span>
            <div class="control-group-items">{children()}</div>
        </div>
    }
}

/// Toggle-style button.
#[component]
pub fn ControlButton(
    /// Whether the button renders as selected
    #[prop(into)]
    active: MaybeSignal<bool>,
    /// Click handler
    on_click: Callback<()>,
    /// Accessible label
    #[prop(optional, into)]
    label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="control-button"
            class:active=move || active.get()
            aria-label=label
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_click.call(())
        >
            {children()}
        </button>
    }
}

/// Play/pause toggle.
#[component]
pub fn PlayButton(
    /// Current play state
    #[prop(into)]
    playing: Signal<bool>,
    /// Called to flip the play state
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <ControlButton active=playing on_click=on_toggle label="Play / pause">
            <span class="icon" class:filled=move || playing.get()>
                {move || if playing.get() { "\u{23F8}" } else { "\u{25B6}" }}
            </span>
        </ControlButton>
    }
}

/// Button that restarts playback.
#[component]
pub fn ResetButton(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <ControlButton active=false on_click=on_reset label="Reset">
            <span class="icon">"\u{21BB}"</span>
        </ControlButton>
    }
}

/// Range input described by a [`SliderSpec`].
#[component]
pub fn SliderControl(
    /// Range, step and label
    spec: SliderSpec,
    /// Current value
    #[prop(into)]
    value: Signal<f32>,
    /// Called with the clamped new value
    on_change: Callback<f32>,
) -> impl IntoView {
    view! {
        <label class="slider-control">
            <span class="slider-label">{spec.label}</span>
            <input
                type="range"
                class="slider-input"
                min=spec.min
                max=spec.max
                step=spec.step
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(raw) = event_target_value(&ev).parse::<f32>() {
                        on_change.call(spec.clamp(raw));
                    }
                }
            />
            <span class="slider-value">{move || spec.format(value.get())}</span>
        </label>
    }
}

/// Label pinned over a canvas.
#[component]
pub fn ShaderBadge(
    /// Badge text
    #[prop(into)]
    text: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div class="shader-badge">
            <span>{move || text.get()}</span>
        </div>
    }
}

/// Static stand-in shown when the shader cannot run.
#[component]
pub fn StaticFallback(
    /// Demo whose fallback to show
    info: &'static DemoInfo,
    /// Why the shader is unavailable
    reason: FallbackReason,
) -> impl IntoView {
    view! {
        <div
            class="static-fallback"
            style:background=info.fallback_css
            title=reason.describe()
        >
            <p class="static-fallback-caption">{info.fallback_caption}</p>
        </div>
    }
}

/// Swatch previewing a colour pair as a diagonal gradient.
#[component]
pub fn Swatch(
    /// Start colour
    from: &'static str,
    /// End colour
    to: &'static str,
) -> impl IntoView {
    let background = shader_lab_core::color::linear_gradient_css(135, from, to);
    view! { <span class="swatch" style:background=background></span> }
}
