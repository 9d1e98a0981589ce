//! The two-state history machine: `Empty` until a frame is committed at the
//! current resolution, `Valid` afterwards.
//!
//! Blending against uninitialized or stale-resolution history produces
//! ghosting or a mismatched texture read, so reuse is gated on one explicit
//! invariant: the buffer's resolution always equals the resolution of the
//! most recent `prepare` call, or the buffer is absent.

use glam::Mat4;

use crate::buffer::{HistoryBuffer, Texel};

/// Whether the history buffer holds a usable prior frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryState {
    /// No valid history: first frame, post-reallocation, or invalidated.
    #[default]
    Empty,
    /// The buffer matches the current resolution and holds a prior frame.
    Valid,
}

/// Tuning for the accumulator.
#[derive(Clone, Debug)]
pub struct TemporalConfig {
    /// Weight given to history when blending, `[0, 1]`. Higher values
    /// denoise more but ghost longer.
    pub blend_factor: f32,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self { blend_factor: 0.9 }
    }
}

/// Errors from caller contract violations; normal resolution changes are
/// never errors, they trigger reallocation.
#[derive(Debug, thiserror::Error)]
pub enum TemporalError {
    /// The committed frame does not match the current allocation.
    #[error("frame has {actual} texels, allocation {width}x{height} expects {expected}")]
    FrameSizeMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },

    /// `commit` was called before any `prepare` allocated a buffer.
    #[error("commit called with no history allocation; call prepare first")]
    NoAllocation,
}

/// What `prepare` hands the render loop for the upcoming frame.
#[derive(Debug)]
pub struct HistoryRequest<'a> {
    /// Whether the shader may blend against history this frame.
    pub use_history: bool,
    /// Configured blend weight; meaningful only when `use_history` is set.
    pub blend_factor: f32,
    /// The prior frame and its transform, present only when `use_history`.
    pub history: Option<&'a HistoryBuffer>,
}

/// Owns the history buffer and decides, per frame, whether it may be reused.
///
/// Single-threaded and frame-synchronous: `prepare` at the start of a frame,
/// `commit` the rendered result at the end of the same frame.
#[derive(Debug, Default)]
pub struct TemporalAccumulator {
    config: TemporalConfig,
    state: HistoryState,
    buffer: Option<HistoryBuffer>,
}

impl TemporalAccumulator {
    pub fn new(config: TemporalConfig) -> Self {
        Self {
            config,
            state: HistoryState::Empty,
            buffer: None,
        }
    }

    /// Current state of the history machine.
    pub fn state(&self) -> HistoryState {
        self.state
    }

    /// Resolution of the current allocation, if any.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.buffer.as_ref().map(|b| (b.width(), b.height()))
    }

    /// Ready the accumulator for a frame at the given resolution.
    ///
    /// Reallocates (releasing any existing buffer first) whenever no buffer
    /// exists or its dimensions differ, which drops back to `Empty`; history
    /// is offered only when the state is `Valid` at a matching resolution.
    ///
    /// Zero dimensions (a minimized window) are clamped to 1x1 so the
    /// allocation invariant holds for any host.
    pub fn prepare(&mut self, width: u32, height: u32) -> HistoryRequest<'_> {
        let (width, height) = (width.max(1), height.max(1));

        let needs_alloc = !self
            .buffer
            .as_ref()
            .is_some_and(|b| b.matches(width, height));

        if needs_alloc {
            if let Some(old) = self.buffer.take() {
                log::debug!(
                    "reallocating history buffer {}x{} -> {width}x{height}",
                    old.width(),
                    old.height()
                );
            } else {
                log::debug!("allocating history buffer {width}x{height}");
            }
            self.buffer = Some(HistoryBuffer::new(width, height));
            self.state = HistoryState::Empty;
        }

        let use_history = self.state == HistoryState::Valid;
        HistoryRequest {
            use_history,
            blend_factor: self.config.blend_factor,
            history: if use_history { self.buffer.as_ref() } else { None },
        }
    }

    /// Store the rendered frame and its view-projection as history for the
    /// next frame. The copy is always full resolution; a slice of any other
    /// length is a caller bug.
    pub fn commit(&mut self, frame: &[Texel], view_projection: Mat4) -> Result<(), TemporalError> {
        let buffer = self.buffer.as_mut().ok_or(TemporalError::NoAllocation)?;

        let expected = buffer.texels().len();
        if frame.len() != expected {
            return Err(TemporalError::FrameSizeMismatch {
                actual: frame.len(),
                expected,
                width: buffer.width(),
                height: buffer.height(),
            });
        }

        buffer.store(frame, view_projection);
        self.state = HistoryState::Valid;
        Ok(())
    }

    /// Force the state back to `Empty` without deallocating.
    ///
    /// Used on visual discontinuities (camera teleport, scene cut) where the
    /// resolution is unchanged, so the next frame skips the blend without
    /// paying a free/alloc cycle.
    pub fn invalidate(&mut self) {
        if self.state == HistoryState::Valid {
            log::debug!("history invalidated");
        }
        self.state = HistoryState::Empty;
    }

    /// Release the owned buffer. Called by the owning render-loop context on
    /// teardown; dropping the accumulator does the same.
    pub fn release(&mut self) {
        self.buffer = None;
        self.state = HistoryState::Empty;
    }
}
