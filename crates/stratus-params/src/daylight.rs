//! Time-of-day resolution: piecewise day-cycle tracks for sun intensity,
//! sun color, and fog density, sampled at a wall-clock hour.

use glam::{Quat, Vec3};

use crate::curve::{ColorGradient, ColorKey, CurveTrack, Keyframe};
use crate::params::FogParameters;
use crate::preset::Preset;

/// Fixed haze color blended into the fog tint over the whole day.
pub const HAZE_COLOR: Vec3 = Vec3::new(0.7, 0.75, 0.8);

/// Fixed sun yaw in degrees; only the elevation varies over the day.
const SUN_YAW_DEGREES: f32 = 170.0;

/// Normalize an hour value into `[0, 24)`.
///
/// Out-of-range input wraps instead of erroring, so a clock that ran past
/// midnight or a negative offset both resolve to a valid time.
pub fn wrap_hours(hours: f32) -> f32 {
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid(24.0) of exactly 24.0 yields 0.0, but of values a hair
    // below 24.0 it can round to 24.0; fold that back.
    if wrapped >= 24.0 { 0.0 } else { wrapped }
}

/// Unit sun direction for a given hour of the day.
///
/// The sun sweeps a full circle per day: elevation angle
/// `hours / 24 * 360 - 90` degrees at a fixed yaw, so 6:00 is sunrise at the
/// horizon, 12:00 overhead, 18:00 sunset.
pub fn sun_direction_at_hours(hours: f32) -> Vec3 {
    let normalized = wrap_hours(hours) / 24.0;
    let elevation = (normalized * 360.0 - 90.0).to_radians();
    let rotation =
        Quat::from_rotation_y(SUN_YAW_DEGREES.to_radians()) * Quat::from_rotation_x(elevation);
    (rotation * Vec3::Z).normalize()
}

/// One sampled instant of the day cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaySample {
    /// Sun color from the day gradient.
    pub sun_color: Vec3,
    /// Sun intensity after the controller's 2x scale.
    pub sun_intensity: f32,
    /// Fog density from the day track.
    pub fog_density: f32,
    /// Midpoint blend of the sun color sample and [`HAZE_COLOR`].
    pub fog_color: Vec3,
    /// Unit sun direction at this hour.
    pub sun_direction: Vec3,
}

/// The three piecewise day-cycle tracks plus the base parameter set that
/// time-of-day values are overlaid onto.
#[derive(Clone, Debug)]
pub struct DayCycle {
    sun_intensity: CurveTrack,
    fog_density: CurveTrack,
    sun_color: ColorGradient,
    base: FogParameters,
}

impl Default for DayCycle {
    /// The documented default tracks, keyed at {0, 0.25, 0.5, 0.75, 1.0}
    /// (midnight, dawn, noon, dusk, midnight).
    fn default() -> Self {
        Self {
            sun_intensity: CurveTrack::new(vec![
                Keyframe::new(0.0, 0.0),
                Keyframe::new(0.25, 0.3),
                Keyframe::new(0.5, 1.0),
                Keyframe::new(0.75, 0.5),
                Keyframe::new(1.0, 1.0),
            ]),
            fog_density: CurveTrack::new(vec![
                Keyframe::new(0.0, 0.02),
                Keyframe::new(0.25, 0.015),
                Keyframe::new(0.5, 0.008),
                Keyframe::new(0.75, 0.012),
                Keyframe::new(1.0, 0.005),
            ]),
            sun_color: ColorGradient::new(vec![
                ColorKey::new(0.0, Vec3::new(0.2, 0.2, 0.3)),
                ColorKey::new(0.25, Vec3::new(1.0, 0.6, 0.3)),
                ColorKey::new(0.5, Vec3::new(1.0, 1.0, 0.9)),
                ColorKey::new(0.75, Vec3::new(1.0, 0.7, 0.4)),
                ColorKey::new(1.0, Vec3::new(0.2, 0.2, 0.3)),
            ]),
            base: Preset::LightClouds.parameters(),
        }
    }
}

impl DayCycle {
    /// Custom tracks over a custom base parameter set.
    pub fn new(
        sun_intensity: CurveTrack,
        fog_density: CurveTrack,
        sun_color: ColorGradient,
        base: FogParameters,
    ) -> Self {
        Self {
            sun_intensity,
            fog_density,
            sun_color,
            base,
        }
    }

    /// The base parameters that [`DayCycle::resolve`] overlays onto.
    pub fn base(&self) -> &FogParameters {
        &self.base
    }

    /// Sample all tracks at the given hour. Wraps modulo 24.
    pub fn sample(&self, hours: f32) -> DaySample {
        let hours = wrap_hours(hours);
        let t = hours / 24.0;

        let sun_color = self.sun_color.evaluate(t);
        DaySample {
            sun_color,
            sun_intensity: self.sun_intensity.evaluate(t) * 2.0,
            fog_density: self.fog_density.evaluate(t),
            fog_color: sun_color.lerp(HAZE_COLOR, 0.5),
            sun_direction: sun_direction_at_hours(hours),
        }
    }

    /// Full parameter set for the given hour: the day-cycle sample overlaid
    /// on this cycle's base parameters.
    pub fn resolve(&self, hours: f32) -> FogParameters {
        self.overlay(self.base, hours)
    }

    /// Overlay the day-cycle sample onto an arbitrary base, leaving every
    /// field the cycle does not drive untouched.
    pub fn overlay(&self, base: FogParameters, hours: f32) -> FogParameters {
        let sample = self.sample(hours);
        FogParameters {
            sun_color: sample.sun_color,
            sun_intensity: sample.sun_intensity,
            fog_density: sample.fog_density,
            fog_color: sample.fog_color,
            ..base
        }
    }
}
