//! UI components for the shader gallery.

pub mod controls;
pub mod flowing_gradient;
pub mod glow;
pub mod gradient;
pub mod grain;
pub mod mesh_gradient;
pub mod noise;
pub mod noise_types;
pub mod progressive_blur;
pub mod spotlight;
pub mod surface;
pub mod visual_example;

pub use controls::{
    ControlButton, ControlGroup, ExampleWrapper, PlayButton, ResetButton, ShaderBadge,
    SliderControl, StaticFallback,
};
pub use flowing_gradient::ShaderFlowingGradient;
pub use glow::ShaderGlow;
pub use gradient::ShaderGradient;
pub use grain::ShaderGrain;
pub use mesh_gradient::ShaderMeshGradient;
pub use noise::ShaderNoise;
pub use noise_types::ShaderNoiseTypes;
pub use progressive_blur::ShaderProgressiveBlur;
pub use spotlight::ShaderSpotlight;
pub use surface::shader_surface;
pub use visual_example::VisualExample;
