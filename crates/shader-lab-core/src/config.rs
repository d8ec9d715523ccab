//! Harness configuration and constants.
//!
//! Geometry, sizing limits and context attributes shared by every demo are
//! centralized here.

/// Upper bound applied to `window.devicePixelRatio` when sizing canvases.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Colour every frame is cleared to before drawing (opaque black).
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Clip-space corners of the full-screen quad, drawn as a triangle strip.
#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 8] = [
    -1.0, -1.0,
     1.0, -1.0,
    -1.0,  1.0,
     1.0,  1.0,
];

/// Number of vertices in [`QUAD_VERTICES`].
pub const QUAD_VERTEX_COUNT: i32 = 4;

/// Components per quad vertex.
pub const QUAD_COMPONENTS: i32 = 2;

/// Vertex attribute the default vertex shader reads positions from.
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Maximum number of uniforms a single demo can push per frame.
pub const MAX_UNIFORMS: usize = 12;

/// 1x1 RGBA texel shown by textured demos until their image arrives.
pub const PLACEHOLDER_TEXEL: [u8; 4] = [100, 100, 120, 255];

/// Texture unit textured demos sample from.
pub const IMAGE_TEXTURE_UNIT: u32 = 0;

/// CSS height of a demo canvas in pixels.
pub const CANVAS_CSS_HEIGHT: u32 = 256;

/// Scheduler timestamps are in milliseconds.
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Drawing-context attributes requested when a demo acquires its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextOptions {
    /// Request multisampled antialiasing
    pub antialias: bool,
    /// Request an alpha channel in the drawing buffer
    pub alpha: bool,
    /// Keep the drawing buffer after compositing (needed for on-demand redraw)
    pub preserve_drawing_buffer: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            alpha: true,
            preserve_drawing_buffer: true,
        }
    }
}

impl ContextOptions {
    /// Opaque drawing buffer, for demos that fully cover the canvas with an image.
    #[must_use]
    pub const fn opaque() -> Self {
        Self {
            antialias: true,
            alpha: false,
            preserve_drawing_buffer: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_clip_space() {
        let xs: Vec<f32> = QUAD_VERTICES.iter().step_by(2).copied().collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().skip(1).step_by(2).copied().collect();
        assert_eq!(xs.len() as i32, QUAD_VERTEX_COUNT);
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
        assert!(ys.contains(&-1.0) && ys.contains(&1.0));
    }

    #[test]
    fn opaque_only_drops_alpha() {
        let opaque = ContextOptions::opaque();
        let default = ContextOptions::default();
        assert!(!opaque.alpha);
        assert_eq!(opaque.antialias, default.antialias);
        assert_eq!(opaque.preserve_drawing_buffer, default.preserve_drawing_buffer);
    }
}
