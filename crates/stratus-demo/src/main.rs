//! Headless demo loop for the Stratus volumetrics stack.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Runs a fixed-timestep frame loop that resolves parameters, feeds
//! the temporal accumulator, and packs the per-frame uniform exactly the way
//! a GPU-backed host would, standing in for the external ray marcher with a
//! synthesized frame.
//!
//! Run with `cargo run -p stratus-demo -- --auto-cycle true` to watch the
//! preset tour, or `-- --time-of-day true` for the day cycle.

use clap::Parser;
use glam::{Mat4, Vec3};
use stratus_config::{CliArgs, Config, default_config_dir};
use stratus_cycle::{CyclerConfig, DayClock, PresetCycler, WeatherConfig, WeatherSystem};
use stratus_params::{
    FogParameters, FogUniform, FrameContext, ParameterResolver, Preset, sun_direction_at_hours,
};
use stratus_temporal::{Texel, TemporalAccumulator, TemporalConfig, texel_count};
use tracing::{debug, info, warn};

const FIXED_DT: f32 = 1.0 / 60.0;
const DEMO_FRAMES: u32 = 1800; // 30 seconds
/// Frame at which the demo simulates a window resize.
const RESIZE_AT_FRAME: u32 = 600;
/// Frame at which the demo simulates a camera cut.
const CUT_AT_FRAME: u32 = 1200;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| ".".into());
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|err| {
        eprintln!("config unavailable ({err}), continuing with defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    stratus_log::init_logging(None, cfg!(debug_assertions), Some(&config));
    info!("stratus demo starting: {} frames at 60 Hz", DEMO_FRAMES);

    run(&config);
}

fn run(config: &Config) {
    let mut resolver = ParameterResolver::new();
    let mut accumulator = TemporalAccumulator::new(TemporalConfig {
        blend_factor: config.temporal.blend_factor,
    });

    let mut cycler = PresetCycler::new(CyclerConfig {
        auto_cycle: config.cycle.auto_cycle,
        cycle_interval: config.cycle.cycle_interval,
    });
    let mut clock = DayClock::new(config.cycle.day_duration, config.cycle.start_hours);
    let mut weather = WeatherSystem::new(
        WeatherConfig {
            change_interval: config.cycle.weather_change_interval,
        },
        config.cycle.weather_seed,
    );

    let start_preset = parse_preset(&config.render.preset).unwrap_or_else(|| {
        warn!("unknown preset '{}', using LightClouds", config.render.preset);
        Preset::LightClouds
    });
    cycler.jump_to(start_preset);

    let mut current = apply_overrides(start_preset.parameters(), config);
    let (mut width, mut height) = volumetric_resolution(config, 1.0);
    let mut previous_view_projection = Mat4::IDENTITY;
    let mut time_seconds = 0.0f32;

    for frame in 0..DEMO_FRAMES {
        time_seconds += FIXED_DT;

        // Scripted events: a resize halfway through and a hard camera cut.
        if frame == RESIZE_AT_FRAME {
            (width, height) = volumetric_resolution(config, 2.0 / 3.0);
            info!("resize: volumetric buffer now {width}x{height}");
        }
        if frame == CUT_AT_FRAME {
            info!("camera cut: invalidating history");
            accumulator.invalidate();
        }

        // Drive the sequencers.
        if let Some(preset) = cycler.tick(FIXED_DT, resolver.is_transitioning()) {
            begin_change(&mut resolver, current, preset, config);
        }
        if config.cycle.dynamic_weather
            && let Some(preset) = weather.tick(FIXED_DT)
        {
            cycler.jump_to(preset);
            begin_change(&mut resolver, current, preset, config);
        }

        // Resolve this frame's parameters.
        if let Some((params, _done)) = resolver.advance_transition(FIXED_DT) {
            current = apply_overrides(params, config);
        }
        let hours = clock.advance(FIXED_DT);
        if config.cycle.simulate_time_of_day {
            current = resolver.day_cycle().overlay(current, hours);
        }

        // Hand off to the (stand-in) ray marcher.
        let view_projection = orbit_camera(time_seconds, width, height);
        if !config.temporal.enabled {
            accumulator.invalidate();
        }
        let request = accumulator.prepare(width, height);
        let use_history = request.use_history;
        let blend_factor = request.blend_factor;

        let uniform = FogUniform::pack(
            &current,
            &FrameContext {
                view_projection,
                previous_view_projection,
                inverse_projection: projection(width, height).inverse(),
                sun_direction: sun_direction_at_hours(hours),
                use_history,
                blend_factor,
                time_seconds,
                frame_index: frame,
            },
        );
        let rendered = march(&uniform, width, height);

        if config.temporal.enabled
            && let Err(err) = accumulator.commit(&rendered, view_projection)
        {
            warn!("history commit failed: {err}");
        }
        previous_view_projection = view_projection;

        if frame % 300 == 0 {
            let (h, m) = clock.hours_minutes();
            info!(
                "frame {frame}: preset {:?}, {h:02}:{m:02}, density {:.4}, history {}",
                cycler.current(),
                current.fog_density,
                use_history,
            );
        }
    }

    accumulator.release();
    info!("stratus demo finished");
}

/// Kick off a preset change, blended or immediate per config.
fn begin_change(
    resolver: &mut ParameterResolver,
    current: FogParameters,
    preset: Preset,
    config: &Config,
) {
    if config.cycle.smooth_transition {
        resolver.transition_to_preset(current, preset, config.cycle.transition_duration);
    } else {
        resolver.begin_transition(current, preset.parameters(), 0.0);
    }
    debug!("changing to {preset:?}");
}

/// Fold config-level render settings into resolved parameters.
fn apply_overrides(mut params: FogParameters, config: &Config) -> FogParameters {
    params.step_count = config.render.step_count;
    params
}

/// Volumetric buffer size: output resolution times render scale, with an
/// extra factor for scripted resizes.
fn volumetric_resolution(config: &Config, extra_scale: f32) -> (u32, u32) {
    let scale = config.render.render_scale * extra_scale;
    let width = ((config.render.width as f32 * scale).round() as u32).max(1);
    let height = ((config.render.height as f32 * scale).round() as u32).max(1);
    (width, height)
}

fn projection(width: u32, height: u32) -> Mat4 {
    Mat4::perspective_rh(
        60f32.to_radians(),
        width as f32 / height as f32,
        0.1,
        500.0,
    )
}

/// A slow orbit around the scene origin.
fn orbit_camera(time_seconds: f32, width: u32, height: u32) -> Mat4 {
    let angle = time_seconds * 0.1;
    let eye = Vec3::new(angle.cos() * 40.0, 15.0, angle.sin() * 40.0);
    projection(width, height) * Mat4::look_at_rh(eye, Vec3::new(0.0, 10.0, 0.0), Vec3::Y)
}

/// Stand-in for the external ray marcher: a flat frame of the fog color.
/// A real host renders with the packed uniform and the offered history.
fn march(uniform: &FogUniform, width: u32, height: u32) -> Vec<Texel> {
    let [r, g, b, density] = uniform.fog_color_density;
    vec![[r, g, b, density]; texel_count(width, height)]
}

/// Preset names accepted in config files and on the CLI.
fn parse_preset(name: &str) -> Option<Preset> {
    match name {
        "ClearSky" => Some(Preset::ClearSky),
        "LightClouds" => Some(Preset::LightClouds),
        "DenseClouds" => Some(Preset::DenseClouds),
        "StormyClouds" => Some(Preset::StormyClouds),
        "GroundFog" => Some(Preset::GroundFog),
        "MorningMist" => Some(Preset::MorningMist),
        "Sunset" => Some(Preset::Sunset),
        _ => None,
    }
}
