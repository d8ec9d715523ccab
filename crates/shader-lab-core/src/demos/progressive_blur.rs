//! Direction-dependent blur over an image.
//!
//! Unlike the other demos this one is static: it redraws when a control
//! changes or the image finishes loading, never on a timer.

use crate::config::{ContextOptions, IMAGE_TEXTURE_UNIT, PLACEHOLDER_TEXEL};
use crate::control::{select_preset, Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-progressive-blur",
    title: "Progressive Blur",
    description: "Blur that ramps up across the image instead of applying uniformly. Pick where \
                  it stays sharp and how quickly it falls off.",
    fallback_css: "linear-gradient(180deg, #64647a, #2a2a35)",
    fallback_caption: "CSS fallback (WebGL unavailable)",
};

/// Image blurred by the demo.
pub const IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop&auto=format&q=80";

/// Fragment shader: 9x9 weighted kernel whose radius follows the blur ramp.
pub const FRAGMENT_SHADER: &str = r#"
precision highp float;

uniform sampler2D u_image;
uniform vec2 u_resolution;
uniform float u_blurStrength;
uniform int u_direction;
uniform float u_falloff;

varying vec2 v_uv;

vec4 variableBlur(sampler2D image, vec2 uv, vec2 resolution, float blurAmount) {
    if (blurAmount < 0.01) {
        return texture2D(image, uv);
    }

    vec4 color = vec4(0.0);
    float total = 0.0;
    float radius = blurAmount * 16.0;

    for (float x = -4.0; x <= 4.0; x += 1.0) {
        for (float y = -4.0; y <= 4.0; y += 1.0) {
            vec2 offset = vec2(x, y) * radius / 4.0;
            float weight = max(1.0 - length(vec2(x, y)) / 5.66, 0.0);
            weight = weight * weight;
            color += texture2D(image, uv + offset / resolution) * weight;
            total += weight;
        }
    }

    return color / total;
}

void main() {
    vec2 uv = v_uv;
    uv.y = 1.0 - uv.y;

    float blurFactor = 0.0;
    if (u_direction == 0) {
        blurFactor = pow(1.0 - uv.y, u_falloff);
    } else if (u_direction == 1) {
        blurFactor = pow(uv.y, u_falloff);
    } else {
        float dist = distance(uv, vec2(0.5)) * 2.0;
        blurFactor = pow(dist, u_falloff);
    }

    blurFactor = clamp(blurFactor, 0.0, 1.0) * u_blurStrength;

    gl_FragColor = variableBlur(u_image, uv, u_resolution, blurFactor);
}
"#;

/// Where the image stays sharp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlurDirection {
    /// Sharp at the top, blurry at the bottom
    #[default]
    TopToBottom,
    /// Sharp at the bottom, blurry at the top
    BottomToTop,
    /// Sharp in the centre, blurry at the edges
    Radial,
}

impl BlurDirection {
    /// Value of the `u_direction` uniform.
    pub fn code(&self) -> i32 {
        match self {
            BlurDirection::TopToBottom => 0,
            BlurDirection::BottomToTop => 1,
            BlurDirection::Radial => 2,
        }
    }
}

/// Direction presets.
pub const DIRECTIONS: [Preset<BlurDirection>; 3] = [
    Preset { name: "Top → Bottom", value: BlurDirection::TopToBottom },
    Preset { name: "Bottom → Top", value: BlurDirection::BottomToTop },
    Preset { name: "Radial", value: BlurDirection::Radial },
];

/// Strength presets.
pub const STRENGTHS: [Preset<f32>; 3] = [
    Preset { name: "Subtle", value: 0.3 },
    Preset { name: "Medium", value: 0.6 },
    Preset { name: "Strong", value: 1.0 },
];

/// Falloff slider.
pub const FALLOFF: SliderSpec = SliderSpec {
    label: "Falloff",
    min: 0.5,
    max: 3.0,
    step: 0.1,
    default: 1.5,
};

/// Controls for the progressive-blur demo.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressiveBlurDemo {
    /// Index into [`DIRECTIONS`]
    pub direction: usize,
    /// Index into [`STRENGTHS`]
    pub strength: usize,
    /// Ramp exponent
    pub falloff: f32,
}

impl Default for ProgressiveBlurDemo {
    fn default() -> Self {
        Self {
            direction: 0,
            strength: 1,
            falloff: FALLOFF.default,
        }
    }
}

impl ShaderDemo for ProgressiveBlurDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(direction) = select_preset(self.direction, &DIRECTIONS).map(|p| p.value) else {
            return;
        };
        let Some(strength) = select_preset(self.strength, &STRENGTHS).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_image", IMAGE_TEXTURE_UNIT as i32);
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_blurStrength", strength);
        uniforms.set("u_direction", direction.code());
        uniforms.set("u_falloff", self.falloff);
    }

    fn is_animated(&self) -> bool {
        false
    }

    fn texture_placeholder(&self) -> Option<[u8; 4]> {
        Some(PLACEHOLDER_TEXEL)
    }

    fn context_options(&self) -> ContextOptions {
        ContextOptions::opaque()
    }
}
