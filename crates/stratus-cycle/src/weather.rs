//! Random weather pattern changes on a fixed interval.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stratus_params::Preset;

/// Weather change pacing.
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    /// Seconds between weather rolls.
    pub change_interval: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            change_interval: 30.0,
        }
    }
}

/// Map a uniform roll in `[0, 1)` to a weather preset.
///
/// Clear skies are common, storms rare: 30% clear, 30% light clouds,
/// 25% dense clouds, 15% storm.
pub fn preset_for_roll(roll: f32) -> Preset {
    if roll < 0.3 {
        Preset::ClearSky
    } else if roll < 0.6 {
        Preset::LightClouds
    } else if roll < 0.85 {
        Preset::DenseClouds
    } else {
        Preset::StormyClouds
    }
}

/// Rolls a new weather preset every `change_interval` seconds.
///
/// Seeded explicitly so a demo run is reproducible.
#[derive(Clone, Debug)]
pub struct WeatherSystem {
    config: WeatherConfig,
    rng: ChaCha8Rng,
    timer: f32,
}

impl WeatherSystem {
    pub fn new(config: WeatherConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            timer: 0.0,
        }
    }

    /// Advance by `dt` seconds; returns a new weather preset when the
    /// interval elapses.
    pub fn tick(&mut self, dt: f32) -> Option<Preset> {
        self.timer += dt;
        if self.timer < self.config.change_interval {
            return None;
        }
        self.timer = 0.0;
        Some(self.roll())
    }

    /// Draw a weather preset immediately.
    pub fn roll(&mut self) -> Preset {
        let roll: f32 = self.rng.random_range(0.0..1.0);
        let preset = preset_for_roll(roll);
        log::info!("weather change: rolled {roll:.2} -> {preset:?}");
        preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_thresholds() {
        assert_eq!(preset_for_roll(0.0), Preset::ClearSky);
        assert_eq!(preset_for_roll(0.29), Preset::ClearSky);
        assert_eq!(preset_for_roll(0.3), Preset::LightClouds);
        assert_eq!(preset_for_roll(0.59), Preset::LightClouds);
        assert_eq!(preset_for_roll(0.6), Preset::DenseClouds);
        assert_eq!(preset_for_roll(0.84), Preset::DenseClouds);
        assert_eq!(preset_for_roll(0.85), Preset::StormyClouds);
        assert_eq!(preset_for_roll(0.99), Preset::StormyClouds);
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let mut a = WeatherSystem::new(WeatherConfig::default(), 42);
        let mut b = WeatherSystem::new(WeatherConfig::default(), 42);
        for _ in 0..32 {
            assert_eq!(a.roll(), b.roll(), "seeded weather must be reproducible");
        }
    }

    #[test]
    fn test_tick_fires_on_interval() {
        let mut weather = WeatherSystem::new(
            WeatherConfig {
                change_interval: 30.0,
            },
            7,
        );

        let mut fired = 0;
        // 90 seconds at 10 Hz: exactly three weather changes.
        for _ in 0..900 {
            if weather.tick(0.1).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_rolls_only_produce_weather_presets() {
        let mut weather = WeatherSystem::new(WeatherConfig::default(), 1234);
        for _ in 0..256 {
            let preset = weather.roll();
            assert!(
                matches!(
                    preset,
                    Preset::ClearSky
                        | Preset::LightClouds
                        | Preset::DenseClouds
                        | Preset::StormyClouds
                ),
                "weather must never roll {preset:?}"
            );
        }
    }
}
