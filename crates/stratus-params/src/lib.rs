//! Volumetric fog/cloud parameter model for the Stratus renderer.
//!
//! Converts high-level knobs (a named preset or a time of day) into the full
//! parameter set a ray-marching renderer consumes, and interpolates between
//! parameter sets over time. Pure CPU-side computation; the actual ray
//! marching happens in an external shader fed by [`FogUniform`].

mod curve;
mod daylight;
mod params;
mod preset;
mod resolver;
mod transition;
mod uniform;

pub use curve::{ColorGradient, ColorKey, CurveTrack, Keyframe, smooth_step};
pub use daylight::{DayCycle, DaySample, HAZE_COLOR, sun_direction_at_hours, wrap_hours};
pub use params::{DebugMode, FogParameters};
pub use preset::Preset;
pub use resolver::ParameterResolver;
pub use transition::Transition;
pub use uniform::{FogUniform, FrameContext};
