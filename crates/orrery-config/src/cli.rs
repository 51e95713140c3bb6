//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural solar system simulation")]
pub struct CliArgs {
    /// Number of frames to simulate (0 = until interrupted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Initial speed level (1-5).
    #[arg(long)]
    pub speed: Option<u8>,

    /// Start with self-rotation enabled or disabled.
    #[arg(long)]
    pub rotation: Option<bool>,

    /// Start with orbital revolution enabled or disabled.
    #[arg(long)]
    pub orbit: Option<bool>,

    /// Sphere longitude subdivisions.
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Sphere latitude subdivisions.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Target frame rate (0 = unpaced).
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Key presses to replay before the first frame (e.g. `--press KeyE`).
    #[arg(long = "press", value_name = "KEY")]
    pub presses: Vec<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(speed) = args.speed {
            self.simulation.speed = speed;
        }
        if let Some(rotation) = args.rotation {
            self.simulation.rotation = rotation;
        }
        if let Some(orbit) = args.orbit {
            self.simulation.orbit = orbit;
        }
        if let Some(sectors) = args.sectors {
            self.mesh.sector_count = sectors;
        }
        if let Some(stacks) = args.stacks {
            self.mesh.stack_count = stacks;
        }
        if let Some(fps) = args.fps {
            self.simulation.target_fps = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
