//! Layered simplex-noise gradient.

use crate::color::hex_to_rgb;
use crate::control::{Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, simplex_noise};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-noise",
    title: "Noise Gradient",
    description: "Three octaves of simplex noise blended between two colours. Scale zooms into \
                  the noise field; speed moves through it.",
    fallback_css: "linear-gradient(135deg, #1e1b4b, #7c3aed)",
    fallback_caption: "CSS fallback gradient (WebGL unavailable)",
};

/// Fragment shader: three octaves of simplex noise mixed between two colours.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform float u_scale;
uniform float u_speed;
uniform vec3 u_color1;
uniform vec3 u_color2;
"#,
    simplex_noise!(),
    r#"
void main() {
    vec2 st = v_uv * u_scale;
    float t = u_time * u_speed;

    float n = snoise(st + t);
    n += snoise(st * 2.0 - t * 0.5) * 0.5;
    n += snoise(st * 4.0 + t * 0.3) * 0.25;

    n = clamp(n * 0.5 + 0.5, 0.0, 1.0);

    vec3 color = mix(u_color1, u_color2, n);
    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Deep indigo.
pub const COLOR1: &str = "#1e1b4b";
/// Violet.
pub const COLOR2: &str = "#7c3aed";

/// Scale slider.
pub const SCALE: SliderSpec = SliderSpec {
    label: "Scale",
    min: 1.0,
    max: 10.0,
    step: 0.5,
    default: 3.0,
};

/// Speed slider.
pub const SPEED: SliderSpec = SliderSpec {
    label: "Speed",
    min: 0.1,
    max: 1.0,
    step: 0.1,
    default: 0.3,
};

/// Scale and speed of a noise preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseSettings {
    /// Field scale
    pub scale: f32,
    /// Field speed
    pub speed: f32,
}

/// Presets applied to both sliders at once.
pub const PRESETS: [Preset<NoiseSettings>; 4] = [
    Preset { name: "Subtle", value: NoiseSettings { scale: 2.0, speed: 0.2 } },
    Preset { name: "Organic", value: NoiseSettings { scale: 3.0, speed: 0.3 } },
    Preset { name: "Dramatic", value: NoiseSettings { scale: 5.0, speed: 0.5 } },
    Preset { name: "Turbulent", value: NoiseSettings { scale: 8.0, speed: 0.8 } },
];

/// Controls for the noise demo.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseDemo {
    /// Field scale, within [`SCALE`]
    pub scale: f32,
    /// Field speed, within [`SPEED`]
    pub speed: f32,
    /// Play / pause
    pub playing: bool,
}

impl Default for NoiseDemo {
    fn default() -> Self {
        Self {
            scale: SCALE.default,
            speed: SPEED.default,
            playing: true,
        }
    }
}

impl NoiseDemo {
    /// Apply a preset to both sliders.
    pub fn apply(&mut self, settings: NoiseSettings) {
        self.scale = SCALE.clamp(settings.scale);
        self.speed = SPEED.clamp(settings.speed);
    }

    /// Index of the preset matching the current sliders, if any.
    pub fn active_preset(&self) -> Option<usize> {
        PRESETS
            .iter()
            .position(|p| p.value.scale == self.scale && (p.value.speed - self.speed).abs() < 1e-4)
    }
}

impl ShaderDemo for NoiseDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        uniforms.set("u_scale", self.scale);
        uniforms.set("u_speed", self.speed);
        uniforms.set("u_color1", hex_to_rgb(COLOR1));
        uniforms.set("u_color2", hex_to_rgb(COLOR2));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
