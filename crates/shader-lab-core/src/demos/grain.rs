//! Film grain over a dark gradient.

use crate::control::{Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, random};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-grain",
    title: "Film Grain Effect",
    description: "Per-pixel random noise adds texture to flat surfaces. Animated grain \
                  re-seeds every frame; static grain stays put.",
    fallback_css: "linear-gradient(180deg, #0f0f14, #1f1a24)",
    fallback_caption: "CSS fallback (WebGL unavailable)",
};

/// Fragment shader: centred white noise added to a vertical gradient.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform float u_intensity;
uniform float u_animated;
"#,
    random!(),
    r#"
void main() {
    vec3 baseColor = mix(
        vec3(0.06, 0.06, 0.08),
        vec3(0.12, 0.10, 0.14),
        v_uv.y
    );

    float timeOffset = u_animated > 0.5 ? fract(u_time * 10.0) : 0.0;

    vec2 grainUV = v_uv * u_resolution / 2.0;
    float grain = random(grainUV + timeOffset);
    grain = (grain - 0.5) * u_intensity;

    gl_FragColor = vec4(baseColor + grain, 1.0);
}
"#
);

/// Intensity slider.
pub const INTENSITY: SliderSpec = SliderSpec {
    label: "Intensity",
    min: 0.02,
    max: 0.3,
    step: 0.01,
    default: 0.1,
};

/// Intensity presets.
pub const PRESETS: [Preset<f32>; 4] = [
    Preset { name: "Subtle", value: 0.05 },
    Preset { name: "Medium", value: 0.1 },
    Preset { name: "Strong", value: 0.15 },
    Preset { name: "Heavy", value: 0.25 },
];

/// Controls for the grain demo.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainDemo {
    /// Grain amplitude
    pub intensity: f32,
    /// Re-seed the grain every frame
    pub animated: bool,
}

impl Default for GrainDemo {
    fn default() -> Self {
        Self {
            intensity: INTENSITY.default,
            animated: true,
        }
    }
}

impl ShaderDemo for GrainDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        uniforms.set("u_intensity", self.intensity);
        uniforms.set("u_animated", self.animated);
    }

    /// Static grain does not depend on time, so the loop idles.
    fn is_playing(&self) -> bool {
        self.animated
    }
}
