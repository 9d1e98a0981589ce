//! Named atmosphere presets: constant parameter bundles for common skies.

use glam::{Vec2, Vec3};

use crate::params::{DebugMode, FogParameters};

const WIND_DIAGONAL: Vec2 = Vec2::new(
    std::f32::consts::FRAC_1_SQRT_2,
    std::f32::consts::FRAC_1_SQRT_2,
);

/// A named constant bundle of fog/cloud parameters.
///
/// The enum is closed: every variant maps to a fixed [`FogParameters`]
/// literal, so preset lookup has no failure path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Sparse high clouds, long view distance.
    ClearSky,
    /// Scattered cumulus, the default look.
    LightClouds,
    /// Low overcast with muted light.
    DenseClouds,
    /// Near-total cover, dim desaturated light.
    StormyClouds,
    /// Thick fog hugging the ground below 8 units.
    GroundFog,
    /// Thin warm low mist with strong silver lining.
    MorningMist,
    /// Warm orange haze, low sun.
    Sunset,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 7] = [
        Preset::ClearSky,
        Preset::LightClouds,
        Preset::DenseClouds,
        Preset::StormyClouds,
        Preset::GroundFog,
        Preset::MorningMist,
        Preset::Sunset,
    ];

    /// The constant parameter table for this preset.
    pub fn parameters(self) -> FogParameters {
        let base = FogParameters {
            noise_scale: 3.0,
            ambient_lighting: 0.3,
            wind_direction: WIND_DIAGONAL,
            step_count: 256,
            max_distance: 200.0,
            debug_mode: DebugMode::Off,
            ..FogParameters::default()
        };

        match self {
            Preset::ClearSky => FogParameters {
                cloud_intensity: 0.2,
                fog_density: 0.005,
                cloud_base_height: 30.0,
                cloud_top_height: 60.0,
                cloud_coverage: 0.3,
                wind_speed: 2.0,
                scattering_intensity: 0.5,
                silver_lining: 1.5,
                sun_intensity: 2.0,
                fog_color: Vec3::new(0.85, 0.9, 0.95),
                sun_color: Vec3::new(1.0, 1.0, 0.9),
                ..base
            },
            Preset::LightClouds => FogParameters {
                cloud_intensity: 0.5,
                fog_density: 0.008,
                cloud_base_height: 25.0,
                cloud_top_height: 50.0,
                cloud_coverage: 0.5,
                wind_speed: 1.5,
                scattering_intensity: 0.6,
                silver_lining: 1.2,
                sun_intensity: 3.0,
                fog_color: Vec3::new(0.76, 0.81, 0.85),
                sun_color: Vec3::new(1.0, 1.0, 1.0),
                ..base
            },
            Preset::DenseClouds => FogParameters {
                cloud_intensity: 0.8,
                fog_density: 0.015,
                cloud_base_height: 15.0,
                cloud_top_height: 45.0,
                cloud_coverage: 0.7,
                wind_speed: 2.0,
                scattering_intensity: 0.7,
                silver_lining: 0.8,
                sun_intensity: 1.0,
                fog_color: Vec3::new(0.6, 0.65, 0.7),
                sun_color: Vec3::new(0.9, 0.9, 0.85),
                ..base
            },
            Preset::StormyClouds => FogParameters {
                cloud_intensity: 1.0,
                fog_density: 0.025,
                cloud_base_height: 10.0,
                cloud_top_height: 40.0,
                cloud_coverage: 0.85,
                wind_speed: 2.0,
                scattering_intensity: 0.8,
                silver_lining: 0.5,
                sun_intensity: 0.5,
                fog_color: Vec3::new(0.4, 0.45, 0.5),
                sun_color: Vec3::new(0.7, 0.7, 0.7),
                ..base
            },
            Preset::GroundFog => FogParameters {
                cloud_intensity: 0.6,
                fog_density: 0.02,
                cloud_base_height: 0.0,
                cloud_top_height: 8.0,
                cloud_coverage: 0.8,
                wind_speed: 2.0,
                scattering_intensity: 0.9,
                silver_lining: 0.2,
                sun_intensity: 0.8,
                fog_color: Vec3::new(0.7, 0.75, 0.8),
                sun_color: Vec3::new(0.9, 0.85, 0.7),
                ..base
            },
            Preset::MorningMist => FogParameters {
                cloud_intensity: 0.4,
                fog_density: 0.0018,
                cloud_base_height: 0.0,
                cloud_top_height: 15.0,
                cloud_coverage: 0.6,
                wind_speed: 2.0,
                scattering_intensity: 0.8,
                silver_lining: 1.8,
                sun_intensity: 1.2,
                fog_color: Vec3::new(0.9, 0.85, 0.7),
                sun_color: Vec3::new(1.0, 0.9, 0.6),
                ..base
            },
            Preset::Sunset => FogParameters {
                cloud_intensity: 0.6,
                fog_density: 0.01,
                cloud_base_height: 20.0,
                cloud_top_height: 55.0,
                cloud_coverage: 0.55,
                wind_speed: 2.0,
                scattering_intensity: 0.9,
                silver_lining: 2.0,
                sun_intensity: 2.5,
                fog_color: Vec3::new(1.0, 0.7, 0.4),
                sun_color: Vec3::new(1.0, 0.6, 0.2),
                ..base
            },
        }
    }
}
