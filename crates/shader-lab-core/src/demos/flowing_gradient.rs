//! Three-colour gradient with noise-distorted bands.

use crate::color::hex_to_rgb;
use crate::control::{select_preset, Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, simplex_noise};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-flowing-gradient",
    title: "Flowing Gradient",
    description: "Three colour bands drift across each other while simplex noise bends the \
                  coordinates underneath them.",
    fallback_css: "linear-gradient(135deg, #f97316, #ec4899, #8b5cf6)",
    fallback_caption: "CSS fallback gradient (WebGL unavailable)",
};

/// Fragment shader: sine bands over noise-distorted UVs.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform float u_distortion;
uniform float u_speed;
uniform vec3 u_color1;
uniform vec3 u_color2;
uniform vec3 u_color3;
"#,
    simplex_noise!(),
    r#"
void main() {
    float t = u_time * u_speed;

    vec2 distortedUV = v_uv;
    distortedUV.x += snoise(v_uv * 2.0 + t * 0.3) * u_distortion;
    distortedUV.y += snoise(v_uv * 2.0 - t * 0.2 + 100.0) * u_distortion;

    float band1 = sin(distortedUV.x * 3.0 + distortedUV.y * 2.0 + t) * 0.5 + 0.5;
    float band2 = sin(distortedUV.x * 2.0 - distortedUV.y * 3.0 - t * 0.7) * 0.5 + 0.5;
    float band3 = sin(distortedUV.x * 4.0 + t * 1.2) * 0.5 + 0.5;

    vec3 color = u_color1 * band1;
    color = mix(color, u_color2, band2 * 0.6);
    color = mix(color, u_color3, band3 * 0.4);

    float brightness = 0.85 + snoise(v_uv * 3.0 + t * 0.5) * 0.15;
    color *= brightness;

    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Three colours of a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Base band colour (hex)
    pub color1: &'static str,
    /// Second band colour (hex)
    pub color2: &'static str,
    /// Third band colour (hex)
    pub color3: &'static str,
}

/// Colour schemes.
pub const SCHEMES: [Preset<ColorScheme>; 4] = [
    Preset { name: "Sunset", value: ColorScheme { color1: "#f97316", color2: "#ec4899", color3: "#8b5cf6" } },
    Preset { name: "Ocean", value: ColorScheme { color1: "#0ea5e9", color2: "#06b6d4", color3: "#14b8a6" } },
    Preset { name: "Aurora", value: ColorScheme { color1: "#22c55e", color2: "#06b6d4", color3: "#8b5cf6" } },
    Preset { name: "Ember", value: ColorScheme { color1: "#ef4444", color2: "#f97316", color3: "#eab308" } },
];

/// Distortion slider.
pub const DISTORTION: SliderSpec = SliderSpec {
    label: "Distortion",
    min: 0.0,
    max: 0.4,
    step: 0.05,
    default: 0.15,
};

/// Speed slider.
pub const SPEED: SliderSpec = SliderSpec {
    label: "Speed",
    min: 0.1,
    max: 1.5,
    step: 0.1,
    default: 0.5,
};

/// Controls for the flowing-gradient demo.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowingGradientDemo {
    /// Index into [`SCHEMES`]
    pub scheme: usize,
    /// UV distortion amount
    pub distortion: f32,
    /// Band speed
    pub speed: f32,
    /// Play / pause
    pub playing: bool,
}

impl Default for FlowingGradientDemo {
    fn default() -> Self {
        Self {
            scheme: 0,
            distortion: DISTORTION.default,
            speed: SPEED.default,
            playing: true,
        }
    }
}

impl ShaderDemo for FlowingGradientDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(scheme) = select_preset(self.scheme, &SCHEMES).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        uniforms.set("u_distortion", self.distortion);
        uniforms.set("u_speed", self.speed);
        uniforms.set("u_color1", hex_to_rgb(scheme.color1));
        uniforms.set("u_color2", hex_to_rgb(scheme.color2));
        uniforms.set("u_color3", hex_to_rgb(scheme.color3));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
