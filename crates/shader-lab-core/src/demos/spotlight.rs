//! Pointer-following spotlight.

use crate::color::hex_to_rgb;
use crate::control::{select_preset, Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, random};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-spotlight",
    title: "Mouse Spotlight",
    description: "Move the pointer over the canvas. The light follows it with a soft, \
                  pulsing falloff.",
    fallback_css: "radial-gradient(circle at 50% 50%, #8b5cf6 0%, #0a0a0f 60%)",
    fallback_caption: "CSS fallback spotlight (WebGL unavailable)",
};

/// Fragment shader: smooth radial light around `u_mouse` plus grain.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform vec2 u_mouse;
uniform float u_time;
uniform float u_radius;
uniform float u_softness;
uniform vec3 u_lightColor;
"#,
    random!(),
    r#"
void main() {
    vec2 mouse = u_mouse / u_resolution;
    mouse.y = 1.0 - mouse.y;

    vec3 baseColor = vec3(0.04, 0.04, 0.06);

    float dist = distance(v_uv, mouse);
    float spotlight = 1.0 - smoothstep(0.0, u_radius * u_softness, dist);
    spotlight = pow(spotlight, 1.8);
    spotlight *= 0.9 + sin(u_time * 2.0) * 0.1;

    float grain = random(v_uv + fract(u_time * 0.1)) * 0.04;

    gl_FragColor = vec4(baseColor + u_lightColor * spotlight + grain, 1.0);
}
"#
);

/// Light colours.
pub const LIGHTS: [Preset<&str>; 4] = [
    Preset { name: "Purple", value: "#8b5cf6" },
    Preset { name: "Blue", value: "#3b82f6" },
    Preset { name: "Cyan", value: "#06b6d4" },
    Preset { name: "Pink", value: "#ec4899" },
];

/// Radius slider.
pub const RADIUS: SliderSpec = SliderSpec {
    label: "Radius",
    min: 0.1,
    max: 0.6,
    step: 0.05,
    default: 0.35,
};

/// Softness slider.
pub const SOFTNESS: SliderSpec = SliderSpec {
    label: "Softness",
    min: 0.5,
    max: 2.0,
    step: 0.1,
    default: 1.2,
};

/// Controls for the spotlight demo.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightDemo {
    /// Index into [`LIGHTS`]
    pub light: usize,
    /// Light radius in UV units
    pub radius: f32,
    /// Falloff multiplier
    pub softness: f32,
    /// Pointer position over the canvas, `[0, 1]` from the top-left
    pub pointer: [f32; 2],
}

impl Default for SpotlightDemo {
    fn default() -> Self {
        Self {
            light: 0,
            radius: RADIUS.default,
            softness: SOFTNESS.default,
            pointer: [0.5, 0.5],
        }
    }
}

impl SpotlightDemo {
    /// Record a pointer position given in element-relative CSS pixels.
    pub fn track_pointer(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pointer = [(x / width) as f32, (y / height) as f32];
    }
}

impl ShaderDemo for SpotlightDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(light) = select_preset(self.light, &LIGHTS).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_mouse", frame.viewport.to_pixels(self.pointer));
        uniforms.set("u_time", frame.time);
        uniforms.set("u_radius", self.radius);
        uniforms.set("u_softness", self.softness);
        uniforms.set("u_lightColor", hex_to_rgb(light));
    }
}
