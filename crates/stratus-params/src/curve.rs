//! Keyframe tracks with eased interpolation.
//!
//! Replaces engine-provided curve/gradient objects with a small ordered
//! keyframe sequence plus a pure evaluation function. Interpolation between
//! bracketing keys is smoothstep-eased rather than linear; the ease-in/out
//! shape is visibly part of the day-cycle behavior.

use glam::Vec3;

/// Hermite smooth step, clamped to `[0, 1]`.
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A single `(time, value)` scalar keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Normalized sample position, typically in `[0, 1]`.
    pub time: f32,
    /// Track value at this position.
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// An ordered scalar keyframe track.
///
/// Evaluation clamps outside the key range and eases between the bracketing
/// pair inside it.
#[derive(Clone, Debug)]
pub struct CurveTrack {
    keys: Vec<Keyframe>,
}

impl CurveTrack {
    /// Build a track from keyframes, sorting them by time.
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        assert!(!keys.is_empty(), "curve track needs at least one keyframe");
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// The keyframes in time order.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Sample the track at `t` with eased interpolation.
    pub fn evaluate(&self, t: f32) -> f32 {
        match bracket(&self.keys, |k| k.time, t) {
            Bracket::Before => self.keys[0].value,
            Bracket::After => self.keys[self.keys.len() - 1].value,
            Bracket::Between(i, u) => {
                let a = self.keys[i].value;
                let b = self.keys[i + 1].value;
                a + (b - a) * smooth_step(u)
            }
        }
    }
}

/// A single `(time, color)` keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorKey {
    /// Normalized sample position, typically in `[0, 1]`.
    pub time: f32,
    /// Linear RGB color at this position.
    pub color: Vec3,
}

impl ColorKey {
    pub fn new(time: f32, color: Vec3) -> Self {
        Self { time, color }
    }
}

/// An ordered color keyframe track, evaluated per channel with the same
/// eased interpolation as [`CurveTrack`].
#[derive(Clone, Debug)]
pub struct ColorGradient {
    keys: Vec<ColorKey>,
}

impl ColorGradient {
    /// Build a gradient from color keys, sorting them by time.
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    pub fn new(mut keys: Vec<ColorKey>) -> Self {
        assert!(!keys.is_empty(), "color gradient needs at least one key");
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// The color keys in time order.
    pub fn keys(&self) -> &[ColorKey] {
        &self.keys
    }

    /// Sample the gradient at `t`.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        match bracket(&self.keys, |k| k.time, t) {
            Bracket::Before => self.keys[0].color,
            Bracket::After => self.keys[self.keys.len() - 1].color,
            Bracket::Between(i, u) => {
                let a = self.keys[i].color;
                let b = self.keys[i + 1].color;
                a.lerp(b, smooth_step(u))
            }
        }
    }
}

enum Bracket {
    Before,
    After,
    /// Index of the left key and the normalized position between it and the
    /// next key.
    Between(usize, f32),
}

/// Locate `t` within a slice of keys sorted by time.
fn bracket<K>(keys: &[K], time_of: impl Fn(&K) -> f32, t: f32) -> Bracket {
    let last = keys.len() - 1;

    if t <= time_of(&keys[0]) {
        return Bracket::Before;
    }
    if t >= time_of(&keys[last]) {
        return Bracket::After;
    }

    for i in 0..last {
        let left = time_of(&keys[i]);
        let right = time_of(&keys[i + 1]);
        if t < right {
            let span = right - left;
            // Coincident keys: snap to the right key's value.
            if span <= f32::EPSILON {
                return Bracket::Between(i, 1.0);
            }
            return Bracket::Between(i, (t - left) / span);
        }
    }

    Bracket::After
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> CurveTrack {
        CurveTrack::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
    }

    #[test]
    fn test_smooth_step_endpoints_and_midpoint() {
        assert!((smooth_step(0.0) - 0.0).abs() < f32::EPSILON);
        assert!((smooth_step(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((smooth_step(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_smooth_step_is_monotonic() {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let v = smooth_step(i as f32 / 100.0);
            assert!(v >= prev, "smooth_step must be monotonic: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn test_evaluate_hits_keyframes_exactly() {
        let track = CurveTrack::new(vec![
            Keyframe::new(0.0, 0.02),
            Keyframe::new(0.25, 0.015),
            Keyframe::new(0.5, 0.008),
            Keyframe::new(0.75, 0.012),
            Keyframe::new(1.0, 0.005),
        ]);
        assert_eq!(track.evaluate(0.0), 0.02);
        assert_eq!(track.evaluate(0.25), 0.015);
        assert_eq!(track.evaluate(0.5), 0.008);
        assert_eq!(track.evaluate(0.75), 0.012);
        assert_eq!(track.evaluate(1.0), 0.005);
    }

    #[test]
    fn test_evaluate_eases_between_keys() {
        // Midway between two keys, an eased curve matches linear (smoothstep
        // of 0.5 is 0.5), but at the quarter point it lags behind linear.
        let track = ramp();
        assert!((track.evaluate(0.5) - 0.5).abs() < 1e-6);

        let quarter = track.evaluate(0.25);
        assert!(
            quarter < 0.25,
            "eased value should lag linear near the start, got {quarter}"
        );

        let three_quarter = track.evaluate(0.75);
        assert!(
            three_quarter > 0.75,
            "eased value should lead linear near the end, got {three_quarter}"
        );
    }

    #[test]
    fn test_evaluate_clamps_outside_range() {
        let track = ramp();
        assert_eq!(track.evaluate(-1.0), 0.0);
        assert_eq!(track.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_keys_are_sorted_on_construction() {
        let track = CurveTrack::new(vec![Keyframe::new(1.0, 1.0), Keyframe::new(0.0, 0.0)]);
        assert_eq!(track.keys()[0].time, 0.0);
        assert!((track.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "at least one keyframe")]
    fn test_empty_track_panics() {
        CurveTrack::new(Vec::new());
    }

    #[test]
    fn test_gradient_interpolates_per_channel() {
        let gradient = ColorGradient::new(vec![
            ColorKey::new(0.0, Vec3::new(0.2, 0.2, 0.3)),
            ColorKey::new(1.0, Vec3::new(1.0, 0.6, 0.3)),
        ]);
        let mid = gradient.evaluate(0.5);
        assert!((mid.x - 0.6).abs() < 1e-6);
        assert!((mid.y - 0.4).abs() < 1e-6);
        assert!((mid.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_clamps_outside_range() {
        let gradient = ColorGradient::new(vec![
            ColorKey::new(0.25, Vec3::ONE),
            ColorKey::new(0.75, Vec3::ZERO),
        ]);
        assert_eq!(gradient.evaluate(0.0), Vec3::ONE);
        assert_eq!(gradient.evaluate(1.0), Vec3::ZERO);
    }

    #[test]
    fn test_single_key_track_is_constant() {
        let track = CurveTrack::new(vec![Keyframe::new(0.5, 7.0)]);
        assert_eq!(track.evaluate(0.0), 7.0);
        assert_eq!(track.evaluate(0.5), 7.0);
        assert_eq!(track.evaluate(1.0), 7.0);
    }
}
