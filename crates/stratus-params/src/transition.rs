//! Timed interpolation between two parameter sets.
//!
//! A [`Transition`] owns a source and target [`FogParameters`] plus elapsed
//! time; each `advance` call moves it toward the target with a
//! smoothstep-weighted per-field lerp. Completion is terminal: once the
//! duration is reached the transition keeps returning the target unchanged.

use crate::curve::smooth_step;
use crate::params::FogParameters;

/// An in-flight blend from one parameter set to another.
#[derive(Clone, Debug)]
pub struct Transition {
    from: FogParameters,
    to: FogParameters,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    /// Begin a transition. A `duration <= 0` transition completes on the
    /// first `advance` call instead of dividing by zero.
    pub fn new(from: FogParameters, to: FogParameters, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// The target parameter set.
    pub fn target(&self) -> &FogParameters {
        &self.to
    }

    /// Whether the transition has reached its target.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds (clamped to the duration) and return the
    /// interpolated parameters plus whether the target has been reached.
    ///
    /// On and after completion this returns the target bit-for-bit.
    pub fn advance(&mut self, dt: f32) -> (FogParameters, bool) {
        if self.duration <= 0.0 {
            self.elapsed = 0.0;
            self.duration = 0.0;
            return (self.to, true);
        }

        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.elapsed >= self.duration {
            return (self.to, true);
        }

        let weight = smooth_step(self.elapsed / self.duration);
        (interpolate(&self.from, &self.to, weight), false)
    }
}

/// Per-field lerp between two parameter sets at a precomputed weight.
///
/// Scalars and color channels lerp; the wind direction lerps and is
/// re-normalized; the step count lerps and rounds; the debug mode switches
/// at the halfway point. Weights at the ends return the endpoints exactly.
pub(crate) fn interpolate(from: &FogParameters, to: &FogParameters, weight: f32) -> FogParameters {
    if weight <= 0.0 {
        return *from;
    }
    if weight >= 1.0 {
        return *to;
    }

    let wind = from.wind_direction.lerp(to.wind_direction, weight);
    // Opposite endpoint directions can cancel mid-blend; fall back to the
    // target direction rather than emitting a zero vector.
    let wind_direction = if wind.length_squared() > 1e-12 {
        wind.normalize()
    } else {
        to.wind_direction
    };

    FogParameters {
        fog_density: lerp(from.fog_density, to.fog_density, weight),
        fog_color: from.fog_color.lerp(to.fog_color, weight),
        cloud_base_height: lerp(from.cloud_base_height, to.cloud_base_height, weight),
        cloud_top_height: lerp(from.cloud_top_height, to.cloud_top_height, weight),
        cloud_coverage: lerp(from.cloud_coverage, to.cloud_coverage, weight),
        cloud_intensity: lerp(from.cloud_intensity, to.cloud_intensity, weight),
        noise_scale: lerp(from.noise_scale, to.noise_scale, weight),
        scattering_intensity: lerp(from.scattering_intensity, to.scattering_intensity, weight),
        ambient_lighting: lerp(from.ambient_lighting, to.ambient_lighting, weight),
        wind_speed: lerp(from.wind_speed, to.wind_speed, weight),
        wind_direction,
        sun_color: from.sun_color.lerp(to.sun_color, weight),
        sun_intensity: lerp(from.sun_intensity, to.sun_intensity, weight),
        silver_lining: lerp(from.silver_lining, to.silver_lining, weight),
        step_count: lerp(from.step_count as f32, to.step_count as f32, weight).round() as u32,
        max_distance: lerp(from.max_distance, to.max_distance, weight),
        debug_mode: if weight < 0.5 {
            from.debug_mode
        } else {
            to.debug_mode
        },
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    #[test]
    fn test_zero_weight_returns_source_exactly() {
        let from = Preset::ClearSky.parameters();
        let to = Preset::StormyClouds.parameters();
        assert_eq!(interpolate(&from, &to, 0.0), from);
    }

    #[test]
    fn test_full_weight_returns_target_exactly() {
        let from = Preset::ClearSky.parameters();
        let to = Preset::StormyClouds.parameters();
        assert_eq!(interpolate(&from, &to, 1.0), to);
    }

    #[test]
    fn test_completion_is_terminal() {
        let from = Preset::ClearSky.parameters();
        let to = Preset::Sunset.parameters();
        let mut transition = Transition::new(from, to, 1.0);

        let (_, done) = transition.advance(2.0);
        assert!(done, "advancing past the duration must complete");

        // Further calls are no-ops returning the target unchanged.
        for _ in 0..3 {
            let (params, done) = transition.advance(0.5);
            assert!(done);
            assert_eq!(params, to, "completed transition must return target bit-for-bit");
        }
    }

    #[test]
    fn test_zero_duration_completes_on_first_call() {
        let from = Preset::ClearSky.parameters();
        let to = Preset::DenseClouds.parameters();
        let mut transition = Transition::new(from, to, 0.0);
        let (params, done) = transition.advance(0.0);
        assert!(done, "zero duration must complete immediately");
        assert_eq!(params, to);
    }

    #[test]
    fn test_negative_duration_completes_on_first_call() {
        let from = Preset::ClearSky.parameters();
        let to = Preset::DenseClouds.parameters();
        let mut transition = Transition::new(from, to, -3.0);
        let (params, done) = transition.advance(0.016);
        assert!(done);
        assert_eq!(params, to);
    }

    #[test]
    fn test_monotonic_fields_move_monotonically() {
        // ClearSky fog density (0.005) rises toward StormyClouds (0.025);
        // the interpolated value must never move backwards.
        let from = Preset::ClearSky.parameters();
        let to = Preset::StormyClouds.parameters();
        let mut transition = Transition::new(from, to, 2.0);

        let mut prev = from.fog_density;
        for _ in 0..40 {
            let (params, _) = transition.advance(0.05);
            assert!(
                params.fog_density >= prev,
                "fog density regressed: {prev} -> {}",
                params.fog_density
            );
            prev = params.fog_density;
        }
        assert_eq!(prev, to.fog_density);
    }

    #[test]
    fn test_halfway_value_matches_smoothstep() {
        // ClearSky -> StormyClouds over 3 s: at t=1.5 s the fog density is
        // lerp(0.005, 0.025, smoothstep(0.5)) = 0.015.
        let from = Preset::ClearSky.parameters();
        let to = Preset::StormyClouds.parameters();
        let mut transition = Transition::new(from, to, 3.0);
        let (params, done) = transition.advance(1.5);
        assert!(!done);
        assert!(
            (params.fog_density - 0.015).abs() < 1e-6,
            "expected ~0.015 at the midpoint, got {}",
            params.fog_density
        );
    }

    #[test]
    fn test_wind_direction_stays_unit_during_blend() {
        let mut from = Preset::ClearSky.parameters();
        let mut to = Preset::StormyClouds.parameters();
        from.wind_direction = glam::Vec2::new(1.0, 0.0);
        to.wind_direction = glam::Vec2::new(0.0, 1.0);

        let mut transition = Transition::new(from, to, 1.0);
        for _ in 0..9 {
            let (params, _) = transition.advance(0.1);
            let len = params.wind_direction.length();
            assert!(
                (len - 1.0).abs() < 1e-5,
                "wind direction must be re-normalized, got length {len}"
            );
        }
    }

    #[test]
    fn test_opposite_wind_directions_do_not_collapse() {
        let mut from = Preset::ClearSky.parameters();
        let mut to = Preset::ClearSky.parameters();
        from.wind_direction = glam::Vec2::new(1.0, 0.0);
        to.wind_direction = glam::Vec2::new(-1.0, 0.0);

        let mid = interpolate(&from, &to, 0.5);
        assert!(
            mid.wind_direction.length() > 0.99,
            "cancelled blend must fall back to a unit direction"
        );
    }

    #[test]
    fn test_debug_mode_switches_at_midpoint() {
        use crate::params::DebugMode;

        let mut from = Preset::ClearSky.parameters();
        let mut to = Preset::ClearSky.parameters();
        from.debug_mode = DebugMode::Off;
        to.debug_mode = DebugMode::StepCount;

        // Source mode holds up to the midpoint, target from it on.
        assert_eq!(interpolate(&from, &to, 0.49).debug_mode, DebugMode::Off);
        assert_eq!(interpolate(&from, &to, 0.5).debug_mode, DebugMode::StepCount);
        assert_eq!(interpolate(&from, &to, 0.51).debug_mode, DebugMode::StepCount);
    }

    #[test]
    fn test_step_count_rounds_to_integer() {
        let mut from = Preset::ClearSky.parameters();
        let mut to = Preset::ClearSky.parameters();
        from.step_count = 100;
        to.step_count = 200;
        let mid = interpolate(&from, &to, 0.5);
        assert_eq!(mid.step_count, 150);
    }
}
