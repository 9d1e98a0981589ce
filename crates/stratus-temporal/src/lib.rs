//! Temporal accumulation for stochastic volumetric rendering.
//!
//! Owns the history buffer (previous frame plus previous view-projection)
//! and decides each frame whether history may be blended in or must be
//! reset. The blend itself runs in the external shader; this crate supplies
//! the buffer, the blend weight, and the CPU mirror of the reprojection
//! math.

mod accumulator;
mod buffer;
mod reproject;

pub use accumulator::{
    HistoryRequest, HistoryState, TemporalAccumulator, TemporalConfig, TemporalError,
};
pub use buffer::{HistoryBuffer, Texel, texel_count};
pub use reproject::{history_uv, reconstruct_world};
