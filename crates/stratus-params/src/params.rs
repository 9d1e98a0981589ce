//! The full per-frame parameter set consumed by the volumetric renderer.
//!
//! [`FogParameters`] is a plain value type: constructed fresh each frame,
//! never shared mutably, cheap to copy across thread boundaries.

use glam::{Vec2, Vec3};

/// Renderer debug visualization mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugMode {
    /// Normal composited output.
    #[default]
    Off,
    /// Show only the fog/cloud contribution, no scene color.
    FogOnly,
    /// Visualize the ray-march step count per pixel.
    StepCount,
    /// Visualize the sampled density field.
    DensityField,
}

impl DebugMode {
    /// Integer encoding used in the GPU uniform.
    pub fn index(self) -> u32 {
        match self {
            DebugMode::Off => 0,
            DebugMode::FogOnly => 1,
            DebugMode::StepCount => 2,
            DebugMode::DensityField => 3,
        }
    }
}

/// Complete volumetric fog/cloud parameter set for one frame.
///
/// Field ranges are advisory, not enforced: hand-authored values with
/// `cloud_base_height >= cloud_top_height` or coverage outside `[0, 1]`
/// pass through unchanged and it is the renderer's job to clamp them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogParameters {
    /// Base extinction density. Typical range `[0.0, 0.1]`.
    pub fog_density: f32,
    /// Linear RGB tint applied to in-scattered fog.
    pub fog_color: Vec3,
    /// Bottom of the cloud layer in world units.
    pub cloud_base_height: f32,
    /// Top of the cloud layer in world units.
    pub cloud_top_height: f32,
    /// Fraction of the sky occupied by clouds, `[0, 1]`.
    pub cloud_coverage: f32,
    /// Overall cloud density multiplier, `[0, 1]`.
    pub cloud_intensity: f32,
    /// Base noise frequency for the density field. Must be positive.
    pub noise_scale: f32,
    /// In-scattering strength, `[0, 1]`.
    pub scattering_intensity: f32,
    /// Flat ambient term added to cloud lighting, `[0, 1]`.
    pub ambient_lighting: f32,
    /// Wind advection speed in world units per second.
    pub wind_speed: f32,
    /// Unit 2-vector giving the horizontal wind direction.
    pub wind_direction: Vec2,
    /// Linear RGB color of the sun.
    pub sun_color: Vec3,
    /// Scalar sun intensity multiplier.
    pub sun_intensity: f32,
    /// Strength of the bright rim on cloud edges facing the sun.
    pub silver_lining: f32,
    /// Ray-march sample budget per pixel.
    pub step_count: u32,
    /// Maximum march distance in world units.
    pub max_distance: f32,
    /// Debug visualization mode.
    pub debug_mode: DebugMode,
}

impl Default for FogParameters {
    /// The renderer's out-of-the-box look, matching the LightClouds-leaning
    /// defaults a fresh controller ships with.
    fn default() -> Self {
        Self {
            fog_density: 0.01,
            fog_color: Vec3::new(0.76, 0.81, 0.85),
            cloud_base_height: 20.0,
            cloud_top_height: 50.0,
            cloud_coverage: 0.6,
            cloud_intensity: 0.6,
            noise_scale: 1.5,
            scattering_intensity: 0.7,
            ambient_lighting: 0.3,
            wind_speed: 2.0,
            wind_direction: Vec2::new(std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),
            sun_color: Vec3::new(1.0, 0.95, 0.8),
            sun_intensity: 1.5,
            silver_lining: 1.2,
            step_count: 256,
            max_distance: 200.0,
            debug_mode: DebugMode::Off,
        }
    }
}
