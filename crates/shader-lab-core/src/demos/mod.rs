//! The demo catalogue.
//!
//! Each demo module holds its metadata, GLSL source, presets and a control
//! struct implementing [`ShaderDemo`](crate::demo::ShaderDemo).

pub mod flowing_gradient;
pub mod glow;
pub mod gradient;
pub mod grain;
pub mod mesh_gradient;
pub mod noise;
pub mod noise_types;
pub mod progressive_blur;
pub mod spotlight;

pub use flowing_gradient::FlowingGradientDemo;
pub use glow::GlowDemo;
pub use gradient::GradientDemo;
pub use grain::GrainDemo;
pub use mesh_gradient::MeshGradientDemo;
pub use noise::NoiseDemo;
pub use noise_types::{NoiseKind, NoiseTypeDemo};
pub use progressive_blur::ProgressiveBlurDemo;
pub use spotlight::SpotlightDemo;

use crate::demo::DemoInfo;

/// Every demo in the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// Two-colour flowing gradient
    Gradient,
    /// Layered simplex noise
    Noise,
    /// Three-colour distorted bands
    FlowingGradient,
    /// Film grain
    Grain,
    /// Four-point mesh gradient
    MeshGradient,
    /// Glow orbs
    Glow,
    /// Pointer spotlight
    Spotlight,
    /// Noise comparison
    NoiseTypes,
    /// Progressive blur
    ProgressiveBlur,
}

impl DemoKind {
    /// All demos in gallery order.
    pub const ALL: [DemoKind; 9] = [
        DemoKind::Gradient,
        DemoKind::Noise,
        DemoKind::FlowingGradient,
        DemoKind::Grain,
        DemoKind::MeshGradient,
        DemoKind::Glow,
        DemoKind::Spotlight,
        DemoKind::NoiseTypes,
        DemoKind::ProgressiveBlur,
    ];

    /// Static metadata.
    pub fn info(&self) -> &'static DemoInfo {
        match self {
            DemoKind::Gradient => &gradient::INFO,
            DemoKind::Noise => &noise::INFO,
            DemoKind::FlowingGradient => &flowing_gradient::INFO,
            DemoKind::Grain => &grain::INFO,
            DemoKind::MeshGradient => &mesh_gradient::INFO,
            DemoKind::Glow => &glow::INFO,
            DemoKind::Spotlight => &spotlight::INFO,
            DemoKind::NoiseTypes => &noise_types::INFO,
            DemoKind::ProgressiveBlur => &progressive_blur::INFO,
        }
    }

    /// Registry key.
    pub fn slug(&self) -> &'static str {
        self.info().slug
    }

    /// Look a demo up by registry key.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Comma-separated list of every slug, for diagnostics.
    pub fn available() -> String {
        Self::ALL.map(|kind| kind.slug()).join(", ")
    }
}
