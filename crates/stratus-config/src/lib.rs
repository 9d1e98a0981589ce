//! Configuration for the Stratus volumetrics demo.
//!
//! Runtime-tunable settings persisted to disk as RON, with CLI overrides
//! via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, CycleConfig, DebugConfig, RenderConfig, TemporalConfig, default_config_dir};
pub use error::ConfigError;
