//! Two-colour flowing gradient.

use crate::color::hex_to_rgb;
use crate::control::{select_preset, Preset};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::header;
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-gradient",
    title: "Shader Gradient",
    description: "This gradient is calculated per-pixel on the GPU. The smooth, flowing motion \
                  would be difficult to achieve with CSS alone.",
    fallback_css: "linear-gradient(135deg, #6366f1, #ec4899)",
    fallback_caption: "CSS fallback gradient (WebGL unavailable)",
};

/// Fragment shader: diagonal gradient displaced by two sine waves.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform vec3 u_color1;
uniform vec3 u_color2;

void main() {
    float gradient = (v_uv.x + v_uv.y) / 2.0;

    gradient += sin(v_uv.x * 3.0 + u_time) * 0.15;
    gradient += sin(v_uv.y * 2.0 - u_time * 0.7) * 0.1;
    gradient = clamp(gradient, 0.0, 1.0);

    vec3 color = mix(u_color1, u_color2, gradient);
    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Start and end colour of a gradient preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    /// Start colour (hex)
    pub color1: &'static str,
    /// End colour (hex)
    pub color2: &'static str,
}

/// Colour presets.
pub const PRESETS: [Preset<ColorPair>; 4] = [
    Preset { name: "Indigo → Pink", value: ColorPair { color1: "#6366f1", color2: "#ec4899" } },
    Preset { name: "Blue → Cyan", value: ColorPair { color1: "#3b82f6", color2: "#06b6d4" } },
    Preset { name: "Purple → Orange", value: ColorPair { color1: "#8b5cf6", color2: "#f97316" } },
    Preset { name: "Green → Yellow", value: ColorPair { color1: "#10b981", color2: "#eab308" } },
];

/// Controls for the gradient demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientDemo {
    /// Index into [`PRESETS`]
    pub preset: usize,
    /// Play / pause
    pub playing: bool,
}

impl Default for GradientDemo {
    fn default() -> Self {
        Self {
            preset: 0,
            playing: true,
        }
    }
}

impl ShaderDemo for GradientDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(colors) = select_preset(self.preset, &PRESETS).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        uniforms.set("u_color1", hex_to_rgb(colors.color1));
        uniforms.set("u_color2", hex_to_rgb(colors.color2));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
