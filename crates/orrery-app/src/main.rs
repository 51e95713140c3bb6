//! Orrery entry point.
//!
//! Run with: `cargo run -p orrery-app -- --frames 300 --press KeyE`

use clap::Parser;
use orrery_app::platform::AppDirs;
use orrery_app::{AppError, RunSummary};
use orrery_config::{CliArgs, Config};
use tracing::{error, info};

fn setup(args: &CliArgs) -> Result<(AppDirs, Config), AppError> {
    let dirs = AppDirs::resolve_with_override(args.config.as_deref())?;
    dirs.create_dirs()?;
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok((dirs, config))
}

fn report(summary: &RunSummary) {
    info!(
        frames = summary.frames,
        uploaded_mib = summary.uploaded_bytes as f64 / (1024.0 * 1024.0),
        "Run summary"
    );
    for body in &summary.bodies {
        info!(
            "{:>8}: pos=({:.3}, {:.3}, {:.3}) angle={:.3} rad draws={}",
            body.name, body.position.x, body.position.y, body.position.z, body.angle, body.draws
        );
    }
}

fn main() {
    let args = CliArgs::parse();

    let (dirs, config) = match setup(&args) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!("Orrery");
    info!("Config: {}", dirs.config_dir.display());

    match orrery_app::run(&config, &args.presses) {
        Ok(summary) => report(&summary),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
