//! Command-line argument parsing for the Stratus demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Stratus demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "stratus", about = "Stratus volumetrics demo")]
pub struct CliArgs {
    /// Output width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Volumetric render scale (0.5 - 1.0).
    #[arg(long)]
    pub render_scale: Option<f32>,

    /// Ray-march step count.
    #[arg(long)]
    pub steps: Option<u32>,

    /// Starting preset name.
    #[arg(long)]
    pub preset: Option<String>,

    /// Enable or disable temporal accumulation.
    #[arg(long)]
    pub temporal: Option<bool>,

    /// Auto-cycle through the preset tour.
    #[arg(long)]
    pub auto_cycle: Option<bool>,

    /// Simulate time of day.
    #[arg(long)]
    pub time_of_day: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.render.width = w;
        }
        if let Some(h) = args.height {
            self.render.height = h;
        }
        if let Some(scale) = args.render_scale {
            self.render.render_scale = scale;
        }
        if let Some(steps) = args.steps {
            self.render.step_count = steps;
        }
        if let Some(ref preset) = args.preset {
            self.render.preset = preset.clone();
        }
        if let Some(temporal) = args.temporal {
            self.temporal.enabled = temporal;
        }
        if let Some(auto) = args.auto_cycle {
            self.cycle.auto_cycle = auto;
        }
        if let Some(tod) = args.time_of_day {
            self.cycle.simulate_time_of_day = tod;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1280),
            render_scale: Some(0.5),
            preset: Some("StormyClouds".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.render.width, 1280);
        assert_eq!(config.render.render_scale, 0.5);
        assert_eq!(config.render.preset, "StormyClouds");
        // Non-overridden fields retain defaults
        assert_eq!(config.render.height, 1080);
        assert_eq!(config.render.step_count, 256);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
