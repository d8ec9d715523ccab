//! Drifting glow orbs.

use crate::color::hex_to_rgb;
use crate::control::{select_preset, Preset, SliderSpec};
use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, random};
use crate::uniform::UniformSet;

/// Demo metadata.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-glow",
    title: "Ambient Glow",
    description: "Soft orbs orbit and pulse over a dark background. Each orb gets its own \
                  seeded position, speed and size.",
    fallback_css: "radial-gradient(circle at 40% 40%, #8b5cf6 0%, #06b6d4 35%, #050509 70%)",
    fallback_caption: "CSS fallback glow (WebGL unavailable)",
};

/// Fragment shader: up to six seeded, pulsing orbs plus light grain.
pub const FRAGMENT_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
uniform float u_intensity;
uniform float u_orbCount;
uniform vec3 u_color1;
uniform vec3 u_color2;
"#,
    random!(),
    r#"
void main() {
    vec2 uv = v_uv;
    float aspect = u_resolution.x / u_resolution.y;
    uv.x *= aspect;

    vec3 color = vec3(0.02, 0.02, 0.04);

    for (float i = 0.0; i < 6.0; i++) {
        if (i >= u_orbCount) break;

        float seed = i * 1.618;
        vec2 orbCenter;
        orbCenter.x = 0.3 + random(vec2(seed, 0.0)) * 0.4 * aspect;
        orbCenter.y = 0.3 + random(vec2(0.0, seed)) * 0.4;

        float orbSpeed = 0.3 + random(vec2(seed, seed)) * 0.3;
        float orbRadius = 0.1 + random(vec2(seed * 2.0, 0.0)) * 0.15;
        orbCenter.x += sin(u_time * orbSpeed + seed) * orbRadius;
        orbCenter.y += cos(u_time * orbSpeed * 0.7 + seed) * orbRadius;

        float dist = distance(uv, orbCenter);

        float pulse = 0.8 + sin(u_time * (1.0 + random(vec2(seed, 1.0))) + seed * 2.0) * 0.2;
        float glowSize = (0.15 + random(vec2(seed, 2.0)) * 0.1) * pulse;
        float glow = smoothstep(glowSize, 0.0, dist);
        glow = pow(glow, 1.5) * u_intensity;

        vec3 orbColor = (mod(i, 2.0) < 1.0) ? u_color1 : u_color2;
        color += orbColor * glow * 0.6;
    }

    color += random(uv + fract(u_time * 0.1)) * 0.03;

    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Colour pair of a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbColors {
    /// Even orbs (hex)
    pub color1: &'static str,
    /// Odd orbs (hex)
    pub color2: &'static str,
}

/// Palettes.
pub const PALETTES: [Preset<OrbColors>; 4] = [
    Preset { name: "Cosmic", value: OrbColors { color1: "#8b5cf6", color2: "#06b6d4" } },
    Preset { name: "Sunset", value: OrbColors { color1: "#f97316", color2: "#ec4899" } },
    Preset { name: "Forest", value: OrbColors { color1: "#22c55e", color2: "#14b8a6" } },
    Preset { name: "Fire", value: OrbColors { color1: "#ef4444", color2: "#eab308" } },
];

/// Intensity slider.
pub const INTENSITY: SliderSpec = SliderSpec {
    label: "Intensity",
    min: 0.3,
    max: 1.5,
    step: 0.1,
    default: 1.0,
};

/// Orb-count slider. The shader loop is capped at six.
pub const ORBS: SliderSpec = SliderSpec {
    label: "Orbs",
    min: 2.0,
    max: 6.0,
    step: 1.0,
    default: 4.0,
};

/// Controls for the glow demo.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowDemo {
    /// Index into [`PALETTES`]
    pub palette: usize,
    /// Glow multiplier
    pub intensity: f32,
    /// Number of orbs drawn
    pub orb_count: f32,
    /// Play / pause
    pub playing: bool,
}

impl Default for GlowDemo {
    fn default() -> Self {
        Self {
            palette: 0,
            intensity: INTENSITY.default,
            orb_count: ORBS.default,
            playing: true,
        }
    }
}

impl ShaderDemo for GlowDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SHADER
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        let Some(colors) = select_preset(self.palette, &PALETTES).map(|p| p.value) else {
            return;
        };
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
        uniforms.set("u_intensity", self.intensity);
        uniforms.set("u_orbCount", self.orb_count);
        uniforms.set("u_color1", hex_to_rgb(colors.color1));
        uniforms.set("u_color2", hex_to_rgb(colors.color2));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
