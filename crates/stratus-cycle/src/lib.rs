//! Tick-driven atmosphere sequencing: preset cycling, a day clock, and
//! random weather changes.
//!
//! Each driver is advanced explicitly with `tick(dt)` by the owning render
//! loop; there is no hidden scheduling, so the caller controls pacing and
//! everything is deterministic under a fixed timestep.

mod clock;
mod cycler;
mod weather;

pub use clock::DayClock;
pub use cycler::{CyclerConfig, PRESET_SEQUENCE, PresetCycler};
pub use weather::{WeatherConfig, WeatherSystem, preset_for_roll};
