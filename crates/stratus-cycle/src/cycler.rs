//! Stepping through a fixed sequence of presets, manually or on a timer.

use stratus_params::Preset;

/// The demo tour order: calm morning through to the storm.
pub const PRESET_SEQUENCE: [Preset; 6] = [
    Preset::MorningMist,
    Preset::ClearSky,
    Preset::LightClouds,
    Preset::DenseClouds,
    Preset::Sunset,
    Preset::StormyClouds,
];

/// Auto-cycling behavior.
#[derive(Clone, Debug)]
pub struct CyclerConfig {
    /// Fire a preset change automatically every interval.
    pub auto_cycle: bool,
    /// Seconds between automatic changes.
    pub cycle_interval: f32,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            auto_cycle: false,
            cycle_interval: 10.0,
        }
    }
}

/// Walks [`PRESET_SEQUENCE`], manually via `next`/`previous` or on a timer
/// via `tick`.
#[derive(Clone, Debug)]
pub struct PresetCycler {
    config: CyclerConfig,
    index: usize,
    timer: f32,
}

impl Default for PresetCycler {
    fn default() -> Self {
        Self::new(CyclerConfig::default())
    }
}

impl PresetCycler {
    pub fn new(config: CyclerConfig) -> Self {
        Self {
            config,
            index: 0,
            timer: 0.0,
        }
    }

    /// The preset the cycler currently points at.
    pub fn current(&self) -> Preset {
        PRESET_SEQUENCE[self.index]
    }

    /// Advance to the next preset in the sequence, wrapping at the end.
    pub fn next(&mut self) -> Preset {
        self.index = (self.index + 1) % PRESET_SEQUENCE.len();
        log::info!("preset cycled to {:?}", self.current());
        self.current()
    }

    /// Step back to the previous preset, wrapping at the start.
    pub fn previous(&mut self) -> Preset {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(PRESET_SEQUENCE.len() - 1);
        log::info!("preset cycled back to {:?}", self.current());
        self.current()
    }

    /// Point the cycler at a specific preset if it is part of the sequence;
    /// presets outside the tour leave the position unchanged.
    pub fn jump_to(&mut self, preset: Preset) {
        if let Some(index) = PRESET_SEQUENCE.iter().position(|p| *p == preset) {
            self.index = index;
        }
    }

    /// Advance the auto-cycle timer by `dt` seconds.
    ///
    /// Returns the next preset when the interval elapses and no transition
    /// is mid-flight. An elapsed interval during a transition is skipped
    /// entirely (the timer restarts), matching the cadence of checking once
    /// per interval.
    pub fn tick(&mut self, dt: f32, transitioning: bool) -> Option<Preset> {
        if !self.config.auto_cycle {
            return None;
        }

        self.timer += dt;
        if self.timer < self.config.cycle_interval {
            return None;
        }

        self.timer = 0.0;
        if transitioning {
            return None;
        }
        Some(self.next())
    }
}
