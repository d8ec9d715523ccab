//! Shared GLSL source fragments.
//!
//! Each fragment is a macro expanding to a string literal so demos can splice
//! it into their source with `concat!` at compile time.

/// Precision header plus the `v_uv` varying written by the default vertex shader.
macro_rules! header {
    () => {
        r#"
precision mediump float;

varying vec2 v_uv;
"#
    };
}
pub(crate) use header;

/// `float random(vec2)`: hash-based white noise in `[0, 1)`.
macro_rules! random {
    () => {
        r#"
float random(vec2 st) {
    return fract(sin(dot(st.xy, vec2(12.9898, 78.233))) * 43758.5453123);
}
"#
    };
}
pub(crate) use random;

/// `vec2 random2(vec2)`: 2-D hash used to jitter cell points.
macro_rules! random2 {
    () => {
        r#"
vec2 random2(vec2 p) {
    return fract(sin(vec2(dot(p, vec2(127.1, 311.7)), dot(p, vec2(269.5, 183.3)))) * 43758.5453);
}
"#
    };
}
pub(crate) use random2;

/// `float snoise(vec2)`: 2-D simplex noise in roughly `[-1, 1]`.
macro_rules! simplex_noise {
    () => {
        r#"
vec3 mod289(vec3 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec2 mod289(vec2 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec3 permute(vec3 x) { return mod289(((x * 34.0) + 1.0) * x); }

float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod289(i);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 ox = floor(x + 0.5);
    vec3 a0 = x - ox;
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}
"#
    };
}
pub(crate) use simplex_noise;

/// `float value_noise(vec2)`: smoothly interpolated lattice noise. Needs `random`.
macro_rules! value_noise {
    () => {
        r#"
float value_noise(vec2 st) {
    vec2 i = floor(st);
    vec2 f = fract(st);
    float a = random(i);
    float b = random(i + vec2(1.0, 0.0));
    float c = random(i + vec2(0.0, 1.0));
    float d = random(i + vec2(1.0, 1.0));
    vec2 u = f * f * (3.0 - 2.0 * f);
    return mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y;
}
"#
    };
}
pub(crate) use value_noise;

#[cfg(test)]
mod tests {
    #[test]
    fn test_fragments_compose() {
        const SRC: &str = concat!(header!(), random!(), value_noise!());
        assert!(SRC.contains("precision mediump float;"));
        let random_at = SRC.find("float random(").unwrap_or(usize::MAX);
        let noise_at = SRC.find("float value_noise(").unwrap_or(0);
        assert!(random_at < noise_at, "random must be declared before use");
    }

    #[test]
    fn test_simplex_defines_snoise() {
        assert!(simplex_noise!().contains("float snoise(vec2 v)"));
        assert!(random2!().contains("vec2 random2(vec2 p)"));
    }
}
