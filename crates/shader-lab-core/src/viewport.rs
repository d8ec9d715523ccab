//! Canvas backing-store sizing.

use crate::config::MAX_DEVICE_PIXEL_RATIO;

/// Backing-store size of a canvas in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as the `u_resolution` uniform expects it.
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    /// True if either side is zero (nothing to draw).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map a point normalized to `[0, 1]` over the element into device pixels.
    pub fn to_pixels(&self, normalized: [f32; 2]) -> [f32; 2] {
        [
            normalized[0] * self.width as f32,
            normalized[1] * self.height as f32,
        ]
    }
}

/// Clamp a reported device-pixel-ratio into `[1, MAX_DEVICE_PIXEL_RATIO]`.
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size for an element of the given CSS size.
pub fn backing_store_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Viewport {
    let ratio = effective_pixel_ratio(device_pixel_ratio);
    let scale = |css: f64| {
        if css.is_finite() && css > 0.0 {
            (css * ratio) as u32
        } else {
            0
        }
    };
    Viewport::new(scale(css_width), scale(css_height))
}

/// Tracks the last applied viewport so resizes only act on real changes.
#[derive(Clone, Debug, Default)]
pub struct ResizeTracker {
    current: Option<Viewport>,
}

impl ResizeTracker {
    /// Create a tracker with no size applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied viewport.
    pub fn current(&self) -> Option<Viewport> {
        self.current
    }

    /// Record a measurement; returns the new viewport if it differs from the last.
    pub fn observe(&mut self, css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Option<Viewport> {
        let next = backing_store_size(css_width, css_height, device_pixel_ratio);
        if self.current == Some(next) {
            None
        } else {
            self.current = Some(next);
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_capped() {
        assert_eq!(effective_pixel_ratio(3.0), 2.0);
        assert_eq!(effective_pixel_ratio(1.5), 1.5);
        assert_eq!(effective_pixel_ratio(0.0), 1.0);
        assert_eq!(effective_pixel_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn test_backing_store_scales_css_size() {
        assert_eq!(backing_store_size(400.0, 256.0, 2.0), Viewport::new(800, 512));
        assert_eq!(backing_store_size(400.5, 256.0, 1.0), Viewport::new(400, 256));
        assert!(backing_store_size(0.0, 256.0, 1.0).is_empty());
    }

    #[test]
    fn test_tracker_reports_only_changes() {
        let mut tracker = ResizeTracker::new();
        assert_eq!(tracker.observe(300.0, 200.0, 1.0), Some(Viewport::new(300, 200)));
        assert_eq!(tracker.observe(300.0, 200.0, 1.0), None);
        assert_eq!(tracker.observe(300.0, 200.0, 2.0), Some(Viewport::new(600, 400)));
    }

    #[test]
    fn test_pointer_to_pixels() {
        let vp = Viewport::new(800, 400);
        assert_eq!(vp.to_pixels([0.5, 0.25]), [400.0, 100.0]);
    }
}
