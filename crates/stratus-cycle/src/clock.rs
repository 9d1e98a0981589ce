//! A scaled day clock: real seconds in, hours-of-day out.

use stratus_params::wrap_hours;

/// Maps elapsed real time onto a repeating 24-hour cycle.
#[derive(Clone, Debug)]
pub struct DayClock {
    /// Real seconds one full day takes.
    day_duration: f32,
    hours: f32,
}

impl Default for DayClock {
    /// Two-minute days, starting at noon.
    fn default() -> Self {
        Self::new(120.0, 12.0)
    }
}

impl DayClock {
    /// A clock where a full day lasts `day_duration` real seconds, starting
    /// at `start_hours`.
    ///
    /// A non-positive duration (possible from a hand-edited config) falls
    /// back to the two-minute default rather than dividing by zero.
    pub fn new(day_duration: f32, start_hours: f32) -> Self {
        let day_duration = if day_duration > 0.0 {
            day_duration
        } else {
            log::warn!("day duration {day_duration} is not positive, using 120 s");
            120.0
        };
        Self {
            day_duration,
            hours: wrap_hours(start_hours),
        }
    }

    /// Current hour of day in `[0, 24)`.
    pub fn hours(&self) -> f32 {
        self.hours
    }

    /// Hours and minutes for display, e.g. `(7, 30)` for 07:30.
    pub fn hours_minutes(&self) -> (u32, u32) {
        let hours = self.hours.floor();
        let minutes = ((self.hours - hours) * 60.0).floor();
        (hours as u32, minutes as u32)
    }

    /// Advance by `dt` real seconds and return the new hour of day.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.hours = wrap_hours(self.hours + (24.0 / self.day_duration) * dt);
        self.hours
    }
}
