//! Side-by-side comparison of simplex, value and Worley noise.

use crate::demo::{DemoInfo, FrameInput, ShaderDemo};
use crate::glsl::{header, random, random2, simplex_noise, value_noise};
use crate::uniform::UniformSet;

/// Demo metadata, shared by the three canvases.
pub const INFO: DemoInfo = DemoInfo {
    slug: "shader-noise-types",
    title: "Noise Type Comparison",
    description: "The same animated field rendered with three classic noise functions.",
    fallback_css: "linear-gradient(90deg, #121224, #0d1a1a, #05050d)",
    fallback_caption: "CSS fallback (WebGL unavailable)",
};

/// Simplex noise field.
pub const SIMPLEX_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
"#,
    simplex_noise!(),
    r#"
void main() {
    vec2 st = v_uv * 4.0;
    float n = snoise(st + u_time * 0.3) * 0.5 + 0.5;
    vec3 color = mix(vec3(0.07, 0.07, 0.14), vec3(0.4, 0.2, 0.6), n);
    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Two-octave value noise field.
pub const VALUE_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
"#,
    random!(),
    value_noise!(),
    r#"
void main() {
    vec2 st = v_uv * 6.0;
    float n = value_noise(st + u_time * 0.5);
    n += value_noise(st * 2.0 - u_time * 0.3) * 0.5;
    n = n / 1.5;
    vec3 color = mix(vec3(0.05, 0.1, 0.1), vec3(0.1, 0.5, 0.4), n);
    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Worley (cellular) noise field with orbiting feature points.
pub const WORLEY_SHADER: &str = concat!(
    header!(),
    r#"
uniform vec2 u_resolution;
uniform float u_time;
"#,
    random2!(),
    r#"
float worley(vec2 st) {
    vec2 i_st = floor(st);
    vec2 f_st = fract(st);
    float m_dist = 1.0;
    for (int y = -1; y <= 1; y++) {
        for (int x = -1; x <= 1; x++) {
            vec2 neighbor = vec2(float(x), float(y));
            vec2 point = random2(i_st + neighbor);
            point = 0.5 + 0.5 * sin(u_time * 0.5 + 6.2831 * point);
            m_dist = min(m_dist, length(neighbor + point - f_st));
        }
    }
    return m_dist;
}

void main() {
    float n = 1.0 - worley(v_uv * 5.0);
    vec3 color = mix(vec3(0.02, 0.02, 0.05), vec3(0.9, 0.4, 0.2), n * n);
    gl_FragColor = vec4(color, 1.0);
}
"#
);

/// Which noise function a canvas shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// Simplex gradient noise
    Simplex,
    /// Interpolated lattice noise
    Value,
    /// Cellular noise
    Worley,
}

impl NoiseKind {
    /// All kinds in display order.
    pub const ALL: [NoiseKind; 3] = [NoiseKind::Simplex, NoiseKind::Value, NoiseKind::Worley];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            NoiseKind::Simplex => "Simplex",
            NoiseKind::Value => "Value",
            NoiseKind::Worley => "Worley",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            NoiseKind::Simplex => "Smooth, organic gradients",
            NoiseKind::Value => "Classic interpolated noise",
            NoiseKind::Worley => "Cellular/Voronoi patterns",
        }
    }

    /// Fragment shader source.
    pub fn shader(&self) -> &'static str {
        match self {
            NoiseKind::Simplex => SIMPLEX_SHADER,
            NoiseKind::Value => VALUE_SHADER,
            NoiseKind::Worley => WORLEY_SHADER,
        }
    }
}

/// Controls for one canvas of the comparison. The play flag is shared by
/// all three canvases in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseTypeDemo {
    /// Noise function shown
    pub kind: NoiseKind,
    /// Play / pause
    pub playing: bool,
}

impl NoiseTypeDemo {
    /// A playing canvas of `kind`.
    pub fn new(kind: NoiseKind) -> Self {
        Self {
            kind,
            playing: true,
        }
    }
}

impl ShaderDemo for NoiseTypeDemo {
    fn info(&self) -> &'static DemoInfo {
        &INFO
    }

    fn fragment_source(&self) -> &'static str {
        self.kind.shader()
    }

    fn write_uniforms(&self, frame: &FrameInput, uniforms: &mut UniformSet) {
        uniforms.set("u_resolution", frame.viewport.resolution());
        uniforms.set("u_time", frame.time);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
