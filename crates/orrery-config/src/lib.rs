//! Configuration for the orrery.
//!
//! Settings persist to disk as `config.ron` and are overridden from the
//! command line via clap. Body definitions are plain data here; the app
//! turns them into simulation bodies.

mod body;
mod cli;
mod config;
mod error;

pub use body::{BodyConfig, MotionConfig, PlacementConfig, default_bodies};
pub use cli::CliArgs;
pub use config::{Config, DebugConfig, InputConfig, MeshConfig, SPEED_RANGE, SimulationConfig};
pub use error::ConfigError;
