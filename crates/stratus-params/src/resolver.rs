//! Front door of the parameter model: preset lookup, time-of-day
//! resolution, and ownership of the single active transition.

use crate::daylight::DayCycle;
use crate::params::FogParameters;
use crate::preset::Preset;
use crate::transition::Transition;

/// Resolves high-level knobs into full parameter sets, once per frame.
///
/// Owns at most one transition at a time: beginning a new transition while
/// one is active discards the old one.
#[derive(Clone, Debug, Default)]
pub struct ParameterResolver {
    day_cycle: DayCycle,
    transition: Option<Transition>,
}

impl ParameterResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom day-cycle tracks instead of the defaults.
    pub fn with_day_cycle(day_cycle: DayCycle) -> Self {
        Self {
            day_cycle,
            transition: None,
        }
    }

    /// Pure lookup into the preset's constant table.
    pub fn resolve_preset(&self, preset: Preset) -> FogParameters {
        preset.parameters()
    }

    /// Parameters for an hour of the day in `[0, 24)`; out-of-range hours
    /// wrap instead of erroring.
    pub fn resolve_time_of_day(&self, hours: f32) -> FogParameters {
        self.day_cycle.resolve(hours)
    }

    /// The day-cycle tables in use.
    pub fn day_cycle(&self) -> &DayCycle {
        &self.day_cycle
    }

    /// Start blending from `from` to `to` over `duration` seconds,
    /// discarding any transition already in flight.
    pub fn begin_transition(&mut self, from: FogParameters, to: FogParameters, duration: f32) {
        if self.is_transitioning() {
            log::debug!("discarding in-flight transition for a new target");
        }
        self.transition = Some(Transition::new(from, to, duration));
    }

    /// Convenience: transition from the current parameters to a preset.
    pub fn transition_to_preset(&mut self, current: FogParameters, preset: Preset, duration: f32) {
        self.begin_transition(current, preset.parameters(), duration);
    }

    /// Advance the active transition by `dt` seconds.
    ///
    /// Returns `None` when no transition has ever been started; otherwise
    /// the interpolated parameters and a completion flag. A completed
    /// transition keeps returning its target.
    pub fn advance_transition(&mut self, dt: f32) -> Option<(FogParameters, bool)> {
        self.transition.as_mut().map(|t| t.advance(dt))
    }

    /// Whether a transition is active and not yet complete.
    pub fn is_transitioning(&self) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_complete())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preset_is_pure_lookup() {
        let resolver = ParameterResolver::new();
        assert_eq!(
            resolver.resolve_preset(Preset::Sunset),
            Preset::Sunset.parameters()
        );
    }

    #[test]
    fn test_time_of_day_wraps() {
        let resolver = ParameterResolver::new();
        assert_eq!(
            resolver.resolve_time_of_day(0.0),
            resolver.resolve_time_of_day(24.0)
        );
        assert_eq!(
            resolver.resolve_time_of_day(6.0),
            resolver.resolve_time_of_day(30.0)
        );
    }

    #[test]
    fn test_no_transition_yields_none() {
        let mut resolver = ParameterResolver::new();
        assert!(resolver.advance_transition(0.016).is_none());
        assert!(!resolver.is_transitioning());
    }

    #[test]
    fn test_advance_at_zero_elapsed_returns_source() {
        let mut resolver = ParameterResolver::new();
        let from = Preset::ClearSky.parameters();
        let to = Preset::StormyClouds.parameters();
        resolver.begin_transition(from, to, 3.0);

        let (params, done) = resolver.advance_transition(0.0).unwrap();
        assert!(!done);
        assert_eq!(params, from, "at elapsed=0 the output equals the source");
    }

    #[test]
    fn test_new_transition_discards_previous() {
        let mut resolver = ParameterResolver::new();
        let clear = Preset::ClearSky.parameters();
        let storm = Preset::StormyClouds.parameters();
        let sunset = Preset::Sunset.parameters();

        resolver.begin_transition(clear, storm, 10.0);
        resolver.advance_transition(1.0);

        // Re-target mid-flight: the old transition is gone, the new one
        // starts from its own source at elapsed zero.
        resolver.begin_transition(clear, sunset, 10.0);
        let (params, done) = resolver.advance_transition(0.0).unwrap();
        assert!(!done);
        assert_eq!(params, clear);

        let (end, done) = resolver.advance_transition(10.0).unwrap();
        assert!(done);
        assert_eq!(end, sunset);
    }

    #[test]
    fn test_is_transitioning_goes_false_on_completion() {
        let mut resolver = ParameterResolver::new();
        resolver.transition_to_preset(Preset::ClearSky.parameters(), Preset::GroundFog, 1.0);
        assert!(resolver.is_transitioning());

        resolver.advance_transition(2.0);
        assert!(!resolver.is_transitioning());

        // The terminal state still answers with the target.
        let (params, done) = resolver.advance_transition(1.0).unwrap();
        assert!(done);
        assert_eq!(params, Preset::GroundFog.parameters());
    }
}
