//! Four-point mesh gradient.

use crate::color::hex_to_rgb;
use crate::control::{select_preset, Preset};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::header;
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-mesh-gradient",
    title: "Mesh Gradient",
    description: "Four drifting control points each pull nearby pixels toward their colour, \
                  blended by distance.",
    fallback_css: "linear-gradient(135deg, #f97316, #ec4899, #8b5cf6, #f59e0b)",
    fallback_caption: "CSS fallback gradient (WebGL unavailable)",
};

/// Fragment shader: inverse-distance blend of four animated points.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform vec3 u_color1;
uniform vec3 u_color2;
uniform vec3 u_color3;
uniform vec3 u_color4;

void main() {
    vec2 p1 = vec2(0.25 + sin(u_time * 0.5) * 0.1, 0.25 + cos(u_time * 0.3) * 0.1);
    vec2 p2 = vec2(0.75 + sin(u_time * 0.4) * 0.1, 0.3 + sin(u_time * 0.6) * 0.1);
    vec2 p3 = vec2(0.3 + cos(u_time * 0.35) * 0.1, 0.75 + sin(u_time * 0.45) * 0.1);
    vec2 p4 = vec2(0.7 + sin(u_time * 0.55) * 0.1, 0.8 + cos(u_time * 0.4) * 0.1);

    float d1 = pow(1.0 - smoothstep(0.0, 0.7, distance(v_uv, p1)), 1.5);
    float d2 = pow(1.0 - smoothstep(0.0, 0.7, distance(v_uv, p2)), 1.5);
    float d3 = pow(1.0 - smoothstep(0.0, 0.7, distance(v_uv, p3)), 1.5);
    float d4 = pow(1.0 - smoothstep(0.0, 0.7, distance(v_uv, p4)), 1.5);

    float total = d1 + d2 + d3 + d4 + 0.001;
    vec3 color = (u_color1 * d1 + u_color2 * d2 + u_color3 * d3 + u_color4 * d4) / total;

    color *= 0.9 + 0.1 * sin(v_uv.x * 10.0 + u_time);

    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Colour palettes, four colours each.
pub const PALETTES: [Preset<[&str; 4]>; 4] = [
    Preset { name: "Sunset", value: ["#f97316", "#ec4899", "#8b5cf6", "#f59e0b"] },
    Preset { name: "Ocean", value: ["#06b6d4", "#3b82f6", "#8b5cf6", "#14b8a6"] },
    Preset { name: "Forest", value: ["#10b981", "#84cc16", "#eab308", "#22c55e"] },
    Preset { name: "Midnight", value: ["#6366f1", "#8b5cf6", "#a855f7", "#3b82f6"] },
];

const COLOR_UNIFORMS: [&str; 4] = ["u_color1", "u_color2", "u_color3", "u_color4"];

/// Controls for the mesh-gradient demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshGradientDemo {
    /// Index into [`PALETTES`]
    pub palette: usize,
    /// Play / pause
    pub playing: bool,
}

impl Default for MeshGradientDemo {
    fn default() -> Self {
        Self {
            palette: 0,
            playing: true,
        }
    }
}

impl ShaderDemo for MeshGradientDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(palette) = select_preset(self.palette, &PALETTES).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        for (name, hex) in COLOR_UNIFORMS.into_iter().zip(palette) {
            uniforms.set(name, hex_to_rgb(hex));
        }
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
